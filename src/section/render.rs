use log::{debug, info};
use ndarray::{ArrayView1, ArrayView2};
use crate::section::{
    insert_zeros, normalize_matrix, offset_trace, AxisBounds, Grid, PlotBackend, SeismicSection,
    SessionConfig, ShadedTrace, WiggleError, WiggleOptions,
};
/// Grid opacity used by the interactive renderer.
pub const GRID_ALPHA: f32 = 0.3;
/// Static wiggle section: filled positive lobes plus the full trace line.
///
/// Inputs are validated before the backend sees a single call.
pub fn wiggle<B: PlotBackend>(
    backend: &mut B,
    data: ArrayView2<'_, f64>,
    tt: Option<ArrayView1<'_, f64>>,
    xx: Option<ArrayView1<'_, f64>>,
    options: &WiggleOptions,
) -> Result<SeismicSection, WiggleError> {
    let section = normalize_matrix(data, tt, xx, options.scale_factor, options.verbose)?;
    draw_wiggle(backend, &section, options)?;
    Ok(section)
}
pub fn draw_wiggle<B: PlotBackend>(
    backend: &mut B,
    section: &SeismicSection,
    options: &WiggleOptions,
) -> Result<(), WiggleError> {
    for (index, &offset) in section.xx.iter().enumerate() {
        log_offset(options, index, offset);
        let augmented = insert_zeros(section.trace(index), Some(section.tt.view()))?;
        let shaded = ShadedTrace::new(&augmented, offset);
        backend.fill_between(shaded.fill(), &options.color)?;
        let line = offset_trace(augmented.amplitudes.view(), augmented.times.view(), offset);
        backend.draw_line(line, &options.color)?;
    }
    let (first_t, last_t) = (section.tt[0], section.tt[section.n_samples() - 1]);
    backend.set_range(AxisBounds::new(horizontal_extent(section), (first_t, last_t)))?;
    backend.invert_vertical(true)?;
    debug!("wiggle: drew {} traces", section.n_traces());
    Ok(())
}
/// Interactive-style section for large datasets.
///
/// Without shading each trace is one raw line. With shading the trace is
/// zero-inserted and split into top, baseline and bottom lines, and the
/// area between baseline and top is filled.
pub fn traces<B: PlotBackend>(
    backend: &mut B,
    data: ArrayView2<'_, f64>,
    tt: Option<ArrayView1<'_, f64>>,
    xx: Option<ArrayView1<'_, f64>>,
    options: &WiggleOptions,
    session: &SessionConfig,
) -> Result<SeismicSection, WiggleError> {
    let section = normalize_matrix(data, tt, xx, options.scale_factor, options.verbose)?;
    draw_traces(backend, &section, options, session)?;
    Ok(section)
}
pub fn draw_traces<B: PlotBackend>(
    backend: &mut B,
    section: &SeismicSection,
    options: &WiggleOptions,
    session: &SessionConfig,
) -> Result<(), WiggleError> {
    backend.begin_session(session)?;
    let color = &options.color;
    for (index, &offset) in section.xx.iter().enumerate() {
        log_offset(options, index, offset);
        if options.shade {
            let augmented = insert_zeros(section.trace(index), Some(section.tt.view()))?;
            let shaded = ShadedTrace::new(&augmented, offset);
            let fill = shaded.fill();
            backend.draw_line(shaded.top, color)?;
            backend.draw_line(shaded.baseline, color)?;
            backend.draw_line(shaded.bottom, color)?;
            backend.fill_between(fill, color)?;
        } else {
            let line = offset_trace(section.trace(index), section.tt.view(), offset);
            backend.draw_line(line, color)?;
        }
    }
    backend.show_grid(Grid::both(GRID_ALPHA))?;
    backend.invert_vertical(true)?;
    let (t_min, t_max) = section
        .tt
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        });
    backend.set_range(AxisBounds::new(horizontal_extent(section), (t_min, t_max)))?;
    debug!(
        "traces: drew {} traces (shade = {})",
        section.n_traces(),
        options.shade
    );
    Ok(())
}
/// First and last trace offsets padded by one trace spacing.
fn horizontal_extent(section: &SeismicSection) -> (f64, f64) {
    let ts = section.trace_spacing;
    let first = section.xx[0];
    let last = section.xx[section.n_traces() - 1];
    (first - ts, last + ts)
}
fn log_offset(options: &WiggleOptions, index: usize, offset: f64) {
    if options.verbose {
        info!("trace {index}: offset {offset}");
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{DrawCommand, Scene, TraceColor};
    use ndarray::{array, Array2};
    fn options(shade: bool) -> WiggleOptions {
        WiggleOptions {
            shade,
            ..WiggleOptions::default()
        }
    }
    #[test]
    fn wiggle_fills_and_outlines_every_trace() {
        let data = array![[1.0, 2.0], [-1.0, -2.0]];
        let tt = array![0.0, 1.0];
        let xx = array![0.0, 1.0];
        let mut scene = Scene::new();
        let section = wiggle(
            &mut scene,
            data.view(),
            Some(tt.view()),
            Some(xx.view()),
            &options(false),
        )
        .unwrap();
        assert_eq!(scene.fills().count(), 2);
        assert_eq!(scene.lines().count(), 2);
        assert!(scene.inverted);
        assert!(scene.grid.is_none());
        assert!(scene.session.is_none());
        let bounds = scene.bounds.unwrap();
        assert_eq!(bounds.x, (-1.0, 2.0));
        assert_eq!(bounds.y, (0.0, 1.0));
        // both traces cross half way down
        let (line, _) = scene.lines().next().unwrap();
        let gain = section.data[[0, 0]];
        assert_eq!(
            line.points,
            vec![Some((gain, 0.0)), Some((0.0, 0.5)), Some((-gain, 1.0))]
        );
        let (second, _) = scene.lines().nth(1).unwrap();
        assert_eq!(second.points[1], Some((1.0, 0.5)));
    }
    #[test]
    fn invalid_input_draws_nothing() {
        let data = array![[1.0, 2.0], [-1.0, -2.0]];
        let xx = array![0.0, 1.0, 2.0];
        let mut scene = Scene::new();
        let result = wiggle(&mut scene, data.view(), None, Some(xx.view()), &options(false));
        assert!(matches!(result, Err(WiggleError::LengthMismatch { .. })));
        assert!(scene.commands.is_empty());
        assert!(scene.bounds.is_none());
    }
    #[test]
    fn unshaded_traces_hand_over_raw_lines() {
        let data = array![[0.5, -0.5], [-0.5, 0.5], [0.25, 0.25]];
        let xx = array![10.0, 20.0];
        let mut scene = Scene::new();
        let session = SessionConfig::default();
        let section =
            traces(&mut scene, data.view(), None, Some(xx.view()), &options(false), &session)
                .unwrap();
        assert_eq!(scene.session.as_ref(), Some(&session));
        assert_eq!(scene.fills().count(), 0);
        let lines: Vec<_> = scene.lines().collect();
        assert_eq!(lines.len(), 2);
        // no zero insertion on the raw path
        assert_eq!(lines[0].0.len(), 3);
        assert_eq!(lines[1].0.points[0], Some((section.data[[0, 1]] + 20.0, 0.0)));
        assert_eq!(scene.grid, Some(Grid::both(GRID_ALPHA)));
        assert!(scene.inverted);
        assert_eq!(scene.bounds.unwrap().x, (0.0, 30.0));
        assert_eq!(scene.bounds.unwrap().y, (0.0, 2.0));
    }
    #[test]
    fn shaded_traces_emit_three_lines_and_a_fill() {
        let data = Array2::from_shape_fn((6, 3), |(r, c)| ((r + c) as f64 * 1.3).sin());
        let red: TraceColor = "r".parse().unwrap();
        let opts = WiggleOptions {
            color: red.clone(),
            shade: true,
            ..WiggleOptions::default()
        };
        let mut scene = Scene::new();
        traces(&mut scene, data.view(), None, None, &opts, &SessionConfig::default()).unwrap();
        assert_eq!(scene.lines().count(), 9);
        assert_eq!(scene.fills().count(), 3);
        assert!(scene.commands.iter().all(|command| match command {
            DrawCommand::Line { color, .. } | DrawCommand::Fill { color, .. } => *color == red,
        }));
        // every fill edge sits on the trace offset
        for (index, (fill, _)) in scene.fills().enumerate() {
            assert!(fill.lower.defined().all(|(x, _)| x == index as f64));
        }
    }
    #[test]
    fn vertical_range_uses_axis_extremes() {
        let data = array![[1.0], [2.0], [3.0]];
        let tt = array![0.3, 0.1, 0.2];
        let mut scene = Scene::new();
        traces(
            &mut scene,
            data.view(),
            Some(tt.view()),
            None,
            &options(false),
            &SessionConfig::default(),
        )
        .unwrap();
        assert_eq!(scene.bounds.unwrap().y, (0.1, 0.3));
        assert_eq!(scene.bounds.unwrap().x, (-1.0, 1.0));
    }
}
