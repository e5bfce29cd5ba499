// src/viewer.rs
use eframe::egui;
use egui::{Color32, Stroke, Vec2};
use egui_plot::{Line, Plot, PlotPoints, Polygon};
use log::info;
use crate::section::geometry::Point;
use crate::section::{DrawCommand, Scene, SessionConfig, TraceColor};
fn color32(color: &TraceColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}
/// egui_plot cannot flip an axis, so inverted scenes are drawn with `y`
/// negated and the tick labels negated back.
fn vertical_sign(scene: &Scene) -> f64 {
    if scene.inverted {
        -1.0
    } else {
        1.0
    }
}
fn plot_point((x, y): Point, sign: f64) -> [f64; 2] {
    [x, sign * y]
}
/// Interactive window over a recorded [`Scene`].
pub struct SectionViewer {
    scene: Scene,
}
impl SectionViewer {
    pub fn new(scene: Scene) -> Self {
        Self { scene }
    }
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
    /// Map the session colors onto egui visuals.
    pub fn apply_session(ctx: &egui::Context, session: &SessionConfig) {
        let background = color32(&session.background);
        let mut visuals = if session.background.luminance() > 0.5 {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        visuals.panel_fill = background;
        visuals.window_fill = background;
        visuals.extreme_bg_color = background;
        visuals.override_text_color = Some(color32(&session.foreground));
        ctx.set_visuals(visuals);
    }
    fn draw(&self, ui: &mut egui::Ui) {
        let sign = vertical_sign(&self.scene);
        let mut plot = Plot::new("seismic_section")
            .show_grid(self.scene.grid.is_some())
            .set_margin_fraction(Vec2::ZERO)
            .y_axis_formatter(move |y, _digits, _range| format!("{}", sign * y));
        if let Some(bounds) = self.scene.view_bounds() {
            plot = plot
                .include_x(bounds.x.0)
                .include_x(bounds.x.1)
                .include_y(sign * bounds.y.0)
                .include_y(sign * bounds.y.1);
        }
        plot.show(ui, |plot_ui| {
            for command in &self.scene.commands {
                match command {
                    DrawCommand::Fill { region, color } => {
                        let fill = color32(color);
                        for strip in region.strips() {
                            let points: Vec<[f64; 2]> =
                                strip.iter().map(|p| plot_point(*p, sign)).collect();
                            plot_ui.polygon(
                                Polygon::new(PlotPoints::new(points))
                                    .fill_color(fill)
                                    .stroke(Stroke::NONE),
                            );
                        }
                    }
                    DrawCommand::Line { line, color } => {
                        let stroke = color32(color);
                        for segment in line.segments() {
                            let points: Vec<[f64; 2]> =
                                segment.into_iter().map(|p| plot_point(p, sign)).collect();
                            plot_ui.line(Line::new(PlotPoints::new(points)).color(stroke));
                        }
                    }
                }
            }
        });
    }
}
impl eframe::App for SectionViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.draw(ui));
    }
}
/// Open a native window on `scene` and block until it is closed.
pub fn show(scene: Scene, title: &str) -> eframe::Result<()> {
    let session = scene.session.clone().unwrap_or_default();
    info!(
        "opening viewer: {} draw commands, antialias = {}",
        scene.commands.len(),
        session.antialias
    );
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1000.0, 800.0])
        .with_min_inner_size([400.0, 300.0])
        .with_title(title);
    let options = eframe::NativeOptions {
        viewport,
        multisampling: if session.antialias { 4 } else { 0 },
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            SectionViewer::apply_session(&cc.egui_ctx, &session);
            Box::new(SectionViewer::new(scene))
        }),
    )
}
