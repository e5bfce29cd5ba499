use log::trace;
use crate::section::geometry::Point;
use crate::section::{AxisBounds, FillRegion, Polyline, SessionConfig, TraceColor, WiggleError};
/// Grid line visibility per axis plus opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub x: bool,
    pub y: bool,
    pub alpha: f32,
}
impl Grid {
    pub fn both(alpha: f32) -> Self {
        Self {
            x: true,
            y: true,
            alpha,
        }
    }
}
/// The drawing primitives a wiggle renderer needs from a plotting library.
pub trait PlotBackend {
    /// Apply backend-wide configuration before anything is drawn.
    fn begin_session(&mut self, config: &SessionConfig) -> Result<(), WiggleError>;
    fn draw_line(&mut self, line: Polyline, color: &TraceColor) -> Result<(), WiggleError>;
    fn fill_between(&mut self, region: FillRegion, color: &TraceColor) -> Result<(), WiggleError>;
    fn set_range(&mut self, bounds: AxisBounds) -> Result<(), WiggleError>;
    /// Make the vertical axis grow downward.
    fn invert_vertical(&mut self, inverted: bool) -> Result<(), WiggleError>;
    fn show_grid(&mut self, grid: Grid) -> Result<(), WiggleError>;
}
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { line: Polyline, color: TraceColor },
    Fill { region: FillRegion, color: TraceColor },
}
/// Recording backend: keeps every call so a concrete renderer can replay it.
///
/// Both the PNG renderer and the egui viewer draw from a `Scene`, which
/// lets axis ranges arrive after the traces, as they do in `wiggle`.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub session: Option<SessionConfig>,
    pub commands: Vec<DrawCommand>,
    pub bounds: Option<AxisBounds>,
    pub inverted: bool,
    pub grid: Option<Grid>,
}
impl Scene {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn lines(&self) -> impl Iterator<Item = (&Polyline, &TraceColor)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { line, color } => Some((line, color)),
            DrawCommand::Fill { .. } => None,
        })
    }
    pub fn fills(&self) -> impl Iterator<Item = (&FillRegion, &TraceColor)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Fill { region, color } => Some((region, color)),
            DrawCommand::Line { .. } => None,
        })
    }
    /// Explicit range if one was set, otherwise the extent of everything drawn.
    pub fn view_bounds(&self) -> Option<AxisBounds> {
        self.bounds.or_else(|| self.data_bounds())
    }
    pub fn data_bounds(&self) -> Option<AxisBounds> {
        let mut bounds: Option<AxisBounds> = None;
        let mut include = |(x, y): Point| {
            if !(x.is_finite() && y.is_finite()) {
                return;
            }
            let b = bounds.get_or_insert(AxisBounds::new((x, x), (y, y)));
            b.x = (b.x.0.min(x), b.x.1.max(x));
            b.y = (b.y.0.min(y), b.y.1.max(y));
        };
        for command in &self.commands {
            match command {
                DrawCommand::Line { line, .. } => line.defined().for_each(&mut include),
                DrawCommand::Fill { region, .. } => region
                    .upper
                    .defined()
                    .chain(region.lower.defined())
                    .for_each(&mut include),
            }
        }
        bounds
    }
}
impl PlotBackend for Scene {
    fn begin_session(&mut self, config: &SessionConfig) -> Result<(), WiggleError> {
        trace!("scene session: {config:?}");
        self.session = Some(config.clone());
        Ok(())
    }
    fn draw_line(&mut self, line: Polyline, color: &TraceColor) -> Result<(), WiggleError> {
        self.commands.push(DrawCommand::Line {
            line,
            color: color.clone(),
        });
        Ok(())
    }
    fn fill_between(&mut self, region: FillRegion, color: &TraceColor) -> Result<(), WiggleError> {
        self.commands.push(DrawCommand::Fill {
            region,
            color: color.clone(),
        });
        Ok(())
    }
    fn set_range(&mut self, bounds: AxisBounds) -> Result<(), WiggleError> {
        self.bounds = Some(bounds);
        Ok(())
    }
    fn invert_vertical(&mut self, inverted: bool) -> Result<(), WiggleError> {
        self.inverted = inverted;
        Ok(())
    }
    fn show_grid(&mut self, grid: Grid) -> Result<(), WiggleError> {
        self.grid = Some(grid);
        Ok(())
    }
}
