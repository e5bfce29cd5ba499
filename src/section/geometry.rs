use ndarray::ArrayView1;
use crate::section::AugmentedTrace;
/// `(x, y)` in plot space: x is offset amplitude, y is the sample axis.
pub type Point = (f64, f64);
/// An ordered run of points where `None` marks a gap in the line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Option<Point>>,
}
impl Polyline {
    pub fn new(points: Vec<Option<Point>>) -> Self {
        Self { points }
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Contiguous gap-free runs, in order.
    pub fn segments(&self) -> Vec<Vec<Point>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for point in &self.points {
            match point {
                Some(p) => current.push(*p),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
    pub fn defined(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().flatten().copied()
    }
}
/// Area between two polylines sampled on the same vertical axis.
#[derive(Clone, Debug, PartialEq)]
pub struct FillRegion {
    pub lower: Polyline,
    pub upper: Polyline,
}
impl FillRegion {
    /// Closed polygons, one per run where both edges are defined.
    ///
    /// Each polygon walks `upper` forward and returns along `lower`.
    pub fn lobes(&self) -> Vec<Vec<Point>> {
        let mut lobes = Vec::new();
        let mut upper_run = Vec::new();
        let mut lower_run = Vec::new();
        let pairs = self.upper.points.iter().zip(&self.lower.points);
        for pair in pairs.map(Some).chain(std::iter::once(None)) {
            if let Some((Some(up), Some(low))) = pair {
                upper_run.push(*up);
                lower_run.push(*low);
                continue;
            }
            if upper_run.len() >= 2 {
                let mut polygon = std::mem::take(&mut upper_run);
                polygon.extend(lower_run.iter().rev());
                lobes.push(polygon);
            }
            upper_run.clear();
            lower_run.clear();
        }
        lobes
    }
    /// The same area as [`lobes`](Self::lobes), cut into trapezoids between
    /// consecutive samples. Each strip is convex, for backends that can only
    /// fill convex shapes.
    pub fn strips(&self) -> Vec<[Point; 4]> {
        let pairs: Vec<_> = self
            .upper
            .points
            .iter()
            .zip(&self.lower.points)
            .map(|(up, low)| (*up).zip(*low))
            .collect();
        pairs
            .windows(2)
            .filter_map(|w| match (w[0], w[1]) {
                (Some((u0, l0)), Some((u1, l1))) => Some([u0, u1, l1, l0]),
                _ => None,
            })
            .collect()
    }
}
/// The three derived lines of a shaded trace.
///
/// `top` and `baseline` are defined where the amplitude is `>= 0`, `bottom`
/// where it is `<= 0`. Inserted zeros belong to both halves, so shaded lobes
/// close exactly on the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedTrace {
    pub top: Polyline,
    pub baseline: Polyline,
    pub bottom: Polyline,
}
impl ShadedTrace {
    pub fn new(trace: &AugmentedTrace, offset: f64) -> Self {
        let capacity = trace.len();
        let mut top = Vec::with_capacity(capacity);
        let mut baseline = Vec::with_capacity(capacity);
        let mut bottom = Vec::with_capacity(capacity);
        for (amplitude, time) in trace.points() {
            let positive = amplitude >= 0.0;
            top.push(positive.then_some((amplitude + offset, time)));
            baseline.push(positive.then_some((offset, time)));
            bottom.push((amplitude <= 0.0).then_some((amplitude + offset, time)));
        }
        Self {
            top: Polyline::new(top),
            baseline: Polyline::new(baseline),
            bottom: Polyline::new(bottom),
        }
    }
    pub fn fill(&self) -> FillRegion {
        FillRegion {
            lower: self.baseline.clone(),
            upper: self.top.clone(),
        }
    }
}
/// A full trace shifted to its horizontal position; non-finite samples are gaps.
pub fn offset_trace(
    amplitudes: ArrayView1<'_, f64>,
    times: ArrayView1<'_, f64>,
    offset: f64,
) -> Polyline {
    let points = amplitudes
        .iter()
        .zip(times.iter())
        .map(|(&a, &t)| (a.is_finite() && t.is_finite()).then_some((a + offset, t)))
        .collect();
    Polyline::new(points)
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}
impl AxisBounds {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }
}
