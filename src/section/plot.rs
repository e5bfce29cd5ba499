use std::io::Cursor;
use std::ops::Range;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use ndarray::{ArrayView1, ArrayView2};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::section::{
    wiggle, AxisBounds, DrawCommand, PlotStyle, Scene, TraceColor, WiggleError, WiggleOptions,
};
fn rgb(color: &TraceColor) -> RGBColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b)
}
/// Plotters has no axis inversion, so an inverted scene is drawn with the
/// vertical coordinate negated and the labels negated back.
fn plot_ranges(bounds: AxisBounds, inverted: bool) -> (Range<f64>, Range<f64>) {
    let widen = |(a, b): (f64, f64)| {
        let (lo, hi) = (a.min(b), a.max(b));
        if (hi - lo).abs() < f64::EPSILON {
            (lo - 0.5, hi + 0.5)
        } else {
            (lo, hi)
        }
    };
    let (x0, x1) = widen(bounds.x);
    let (y0, y1) = widen(bounds.y);
    let y = if inverted { -y1..-y0 } else { y0..y1 };
    (x0..x1, y)
}
/// Rasterize a recorded scene into PNG bytes.
pub fn render_scene_png(scene: &Scene, style: &PlotStyle) -> Result<Vec<u8>, WiggleError> {
    let bounds = scene
        .view_bounds()
        .ok_or_else(|| WiggleError::Plot("scene has nothing to draw".into()))?;
    let session = scene.session.clone().unwrap_or_default();
    let background = rgb(&session.background);
    let foreground = rgb(&session.foreground);
    let flip = if scene.inverted { -1.0 } else { 1.0 };
    let (x_range, y_range) = plot_ranges(bounds, scene.inverted);
    let size = style
        .width
        .checked_mul(style.height)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| {
            WiggleError::Plot(format!(
                "image of {}x{} pixels is too large",
                style.width, style.height
            ))
        })?;
    let mut buffer = vec![0u8; size as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&background)?;
        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if style.labels {
            builder
                .set_label_area_size(LabelAreaPosition::Left, 50)
                .set_label_area_size(LabelAreaPosition::Bottom, 40);
        }
        if let Some(caption) = &style.caption {
            builder.caption(caption, ("sans-serif", 20).into_font().color(&foreground));
        }
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;
        if style.labels || scene.grid.is_some() {
            let label_y = |v: &f64| format!("{}", flip * v);
            let mut mesh = chart.configure_mesh();
            mesh.axis_style(&foreground)
                .label_style(("sans-serif", 12).into_font().color(&foreground))
                .y_label_formatter(&label_y);
            match scene.grid {
                Some(grid) => {
                    mesh.bold_line_style(&foreground.mix(grid.alpha as f64))
                        .light_line_style(&foreground.mix(grid.alpha as f64 * 0.3));
                    if !grid.x {
                        mesh.disable_x_mesh();
                    }
                    if !grid.y {
                        mesh.disable_y_mesh();
                    }
                }
                None => {
                    mesh.disable_mesh();
                }
            }
            mesh.draw()?;
        }
        for command in &scene.commands {
            match command {
                DrawCommand::Fill { region, color } => {
                    let fill = rgb(color).filled();
                    let polygons = region.lobes().into_iter().map(|lobe| {
                        let points: Vec<(f64, f64)> =
                            lobe.into_iter().map(|(x, y)| (x, flip * y)).collect();
                        Polygon::new(points, fill)
                    });
                    chart.draw_series(polygons)?;
                }
                DrawCommand::Line { line, color } => {
                    let stroke = rgb(color);
                    for segment in line.segments() {
                        let points = segment.into_iter().map(|(x, y)| (x, flip * y));
                        chart.draw_series(LineSeries::new(points, &stroke))?;
                    }
                }
            }
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
/// Normalize, lay out and rasterize a wiggle section in one call.
pub fn render_wiggle_png(
    data: ArrayView2<'_, f64>,
    tt: Option<ArrayView1<'_, f64>>,
    xx: Option<ArrayView1<'_, f64>>,
    options: &WiggleOptions,
    style: &PlotStyle,
) -> Result<Vec<u8>, WiggleError> {
    let mut scene = Scene::new();
    wiggle(&mut scene, data, tt, xx, options)?;
    render_scene_png(&scene, style)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, WiggleError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| WiggleError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
