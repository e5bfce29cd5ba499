// src/section/mod.rs
pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod normalize;
pub mod plot;
pub mod render;
pub mod zero_crossing;
pub use backend::{DrawCommand, Grid, PlotBackend, Scene};
pub use color::TraceColor;
pub use config::{PlotStyle, SessionConfig, WiggleOptions};
pub use error::WiggleError;
pub use geometry::{offset_trace, AxisBounds, FillRegion, Polyline, ShadedTrace};
pub use normalize::{normalize, normalize_matrix, SeismicSection};
pub use plot::{render_scene_png, render_wiggle_png};
pub use render::{draw_traces, draw_wiggle, traces, wiggle};
pub use zero_crossing::{insert_zeros, zero_crossings, AugmentedTrace};
