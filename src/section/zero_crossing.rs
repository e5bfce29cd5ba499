//! Exact zero-crossing insertion for wiggle shading.
//!
//! A crossing exists between samples `i` and `i + 1` when one is strictly
//! positive and the other strictly negative. Samples that are exactly zero
//! (either sign) already sit on the boundary, so nothing is inserted next to
//! them; NaN samples never form a crossing.
use ndarray::{Array1, ArrayView1};
use crate::section::normalize::index_axis;
use crate::section::WiggleError;
/// A trace with synthetic zero samples spliced in at every sign change.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentedTrace {
    pub amplitudes: Array1<f64>,
    pub times: Array1<f64>,
}
impl AugmentedTrace {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.amplitudes.iter().copied().zip(self.times.iter().copied())
    }
}
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
    Positive,
    Negative,
    Boundary,
}
fn side(value: f64) -> Side {
    if value > 0.0 {
        Side::Positive
    } else if value < 0.0 {
        Side::Negative
    } else {
        Side::Boundary
    }
}
fn crosses(a: f64, b: f64) -> bool {
    matches!(
        (side(a), side(b)),
        (Side::Positive, Side::Negative) | (Side::Negative, Side::Positive)
    )
}
/// Indices `i` where the trace changes sign between `i` and `i + 1`.
pub fn zero_crossings(trace: ArrayView1<'_, f64>) -> Vec<usize> {
    trace
        .iter()
        .zip(trace.iter().skip(1))
        .enumerate()
        .filter(|(_, (a, b))| crosses(**a, **b))
        .map(|(i, _)| i)
        .collect()
}
/// Axis coordinate where the line through `(x1, y1)` and `(x2, y2)` hits zero.
///
/// `y1` and `y2` must have strictly opposite signs, which keeps the
/// denominator nonzero. Coincident axis coordinates collapse to `x1`.
pub fn crossing_time(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    x1 + (x2 - x1) * (y1 / (y1 - y2))
}
/// Splice interpolated `(0, t0)` points into `trace` at every sign change.
///
/// `tt` defaults to `0..len`. Original samples keep their values and order;
/// the output grows by exactly one point per crossing.
pub fn insert_zeros(
    trace: ArrayView1<'_, f64>,
    tt: Option<ArrayView1<'_, f64>>,
) -> Result<AugmentedTrace, WiggleError> {
    let generated;
    let tt = match tt {
        Some(tt) => {
            if tt.len() != trace.len() {
                return Err(WiggleError::LengthMismatch {
                    argument: "tt",
                    expected: trace.len(),
                    actual: tt.len(),
                });
            }
            tt.reborrow()
        }
        None => {
            generated = index_axis(trace.len());
            generated.view()
        }
    };
    let crossings = zero_crossings(trace);
    let capacity = trace.len() + crossings.len();
    let mut amplitudes = Vec::with_capacity(capacity);
    let mut times = Vec::with_capacity(capacity);
    let mut next = crossings.iter().peekable();
    for i in 0..trace.len() {
        amplitudes.push(trace[i]);
        times.push(tt[i]);
        if next.next_if(|&&c| c == i).is_some() {
            amplitudes.push(0.0);
            times.push(crossing_time(tt[i], tt[i + 1], trace[i], trace[i + 1]));
        }
    }
    Ok(AugmentedTrace {
        amplitudes: Array1::from(amplitudes),
        times: Array1::from(times),
    })
}
