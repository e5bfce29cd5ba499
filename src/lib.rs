//! Seismic wiggle-trace sections.
//!
//! `section` validates and normalizes amplitude matrices, splices exact
//! zero crossings into each trace and lays the traces out through a
//! [`section::PlotBackend`]. `viewer` shows a recorded scene interactively.
pub mod section;
pub mod viewer;
pub use section::{
    insert_zeros, normalize, render_wiggle_png, traces, wiggle, Scene, SessionConfig,
    WiggleError, WiggleOptions,
};
