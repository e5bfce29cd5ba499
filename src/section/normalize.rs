use log::{debug, info, warn};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewD, Axis, Ix1, Ix2};
use crate::section::WiggleError;
/// A validated, amplitude-normalized section ready for trace rendering.
///
/// `data` is rows = samples, columns = traces. Only amplitudes are rescaled;
/// `tt` and `xx` are kept exactly as given (or synthesized as index axes).
#[derive(Clone, Debug)]
pub struct SeismicSection {
    pub data: Array2<f64>,
    pub tt: Array1<f64>,
    pub xx: Array1<f64>,
    pub trace_spacing: f64,
}
impl SeismicSection {
    pub fn n_samples(&self) -> usize {
        self.data.nrows()
    }
    pub fn n_traces(&self) -> usize {
        self.data.ncols()
    }
    pub fn trace(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.column(index)
    }
}
/// Validate dynamically-shaped inputs and normalize them.
///
/// Dimensionality is checked here (`Shape`), then the typed path in
/// [`normalize_matrix`] takes over.
pub fn normalize(
    data: ArrayViewD<'_, f64>,
    tt: Option<ArrayViewD<'_, f64>>,
    xx: Option<ArrayViewD<'_, f64>>,
    scale_factor: f64,
    verbose: bool,
) -> Result<SeismicSection, WiggleError> {
    let data = as_matrix(data)?;
    let tt = tt.map(|axis| as_axis("tt", axis)).transpose()?;
    let xx = xx.map(|axis| as_axis("xx", axis)).transpose()?;
    normalize_matrix(data, tt, xx, scale_factor, verbose)
}
pub fn normalize_matrix(
    data: ArrayView2<'_, f64>,
    tt: Option<ArrayView1<'_, f64>>,
    xx: Option<ArrayView1<'_, f64>>,
    scale_factor: f64,
    verbose: bool,
) -> Result<SeismicSection, WiggleError> {
    let (n_samples, n_traces) = data.dim();
    if n_samples < 2 {
        return Err(WiggleError::TooFewSamples {
            argument: "data",
            minimum: 2,
            actual: n_samples,
        });
    }
    if n_traces < 1 {
        return Err(WiggleError::TooFewSamples {
            argument: "data",
            minimum: 1,
            actual: n_traces,
        });
    }
    let tt = resolve_axis("tt", tt, n_samples, verbose)?;
    let xx = resolve_axis("xx", xx, n_traces, verbose)?;
    check_scale_factor(scale_factor)?;
    let trace_spacing = trace_spacing(xx.view());
    let global_std = global_std(data);
    let gain = if global_std > 0.0 && global_std.is_finite() {
        trace_spacing * scale_factor / global_std
    } else {
        warn!("section has zero amplitude spread (std = {global_std}); skipping std normalization");
        trace_spacing * scale_factor
    };
    debug!(
        "normalized {n_samples}x{n_traces} section: ts={trace_spacing}, std={global_std}, gain={gain}"
    );
    Ok(SeismicSection {
        data: data.mapv(|v| v * gain),
        tt,
        xx,
        trace_spacing,
    })
}
/// Minimum adjacent difference of the trace axis; `1.0` for a single trace.
pub fn trace_spacing(xx: ArrayView1<'_, f64>) -> f64 {
    if xx.len() < 2 {
        return 1.0;
    }
    let spacing = xx
        .iter()
        .zip(xx.iter().skip(1))
        .map(|(a, b)| b - a)
        .fold(f64::INFINITY, f64::min);
    if spacing <= 0.0 {
        warn!("trace axis is not strictly increasing (min spacing {spacing})");
    }
    spacing
}
/// Largest per-column population standard deviation.
pub fn global_std(data: ArrayView2<'_, f64>) -> f64 {
    if data.nrows() == 0 {
        return 0.0;
    }
    data.std_axis(Axis(0), 0.0)
        .iter()
        .copied()
        .fold(0.0, f64::max)
}
fn as_matrix(data: ArrayViewD<'_, f64>) -> Result<ArrayView2<'_, f64>, WiggleError> {
    let actual = data.ndim();
    data.into_dimensionality::<Ix2>()
        .map_err(|_| WiggleError::Shape {
            argument: "data",
            expected: 2,
            actual,
        })
}
fn as_axis<'a>(
    argument: &'static str,
    axis: ArrayViewD<'a, f64>,
) -> Result<ArrayView1<'a, f64>, WiggleError> {
    let actual = axis.ndim();
    axis.into_dimensionality::<Ix1>()
        .map_err(|_| WiggleError::Shape {
            argument,
            expected: 1,
            actual,
        })
}
fn resolve_axis(
    argument: &'static str,
    axis: Option<ArrayView1<'_, f64>>,
    expected_len: usize,
    verbose: bool,
) -> Result<Array1<f64>, WiggleError> {
    match axis {
        Some(axis) => {
            if axis.len() != expected_len {
                return Err(WiggleError::LengthMismatch {
                    argument,
                    expected: expected_len,
                    actual: axis.len(),
                });
            }
            if verbose {
                info!("{argument} = {axis}");
            }
            Ok(axis.to_owned())
        }
        None => {
            let axis = index_axis(expected_len);
            if verbose {
                info!("{argument} is automatically generated: {axis}");
            } else {
                debug!("{argument} is automatically generated ({expected_len} entries)");
            }
            Ok(axis)
        }
    }
}
/// `0, 1, ..., len - 1` as floats.
pub fn index_axis(len: usize) -> Array1<f64> {
    Array1::from_iter((0..len).map(|i| i as f64))
}
fn check_scale_factor(scale_factor: f64) -> Result<(), WiggleError> {
    if !scale_factor.is_finite() {
        return Err(WiggleError::Type {
            argument: "sf",
            reason: format!("stretch factor must be a real number, got {scale_factor}"),
        });
    }
    if scale_factor <= 0.0 {
        return Err(WiggleError::Type {
            argument: "sf",
            reason: format!("stretch factor must be positive, got {scale_factor}"),
        });
    }
    Ok(())
}
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }
    #[test]
    fn example_section_is_rescaled_by_max_column_std() {
        let data = array![[1.0, 2.0], [-1.0, -2.0]];
        let tt = array![0.0, 1.0];
        let xx = array![0.0, 1.0];
        let section =
            normalize_matrix(data.view(), Some(tt.view()), Some(xx.view()), 0.15, false).unwrap();
        // column stds are 1 and 2, ts = 1
        let gain = 0.15 / 2.0;
        assert!(close(section.trace_spacing, 1.0));
        assert!(close(section.data[[0, 0]], gain));
        assert!(close(section.data[[1, 1]], -2.0 * gain));
        assert_eq!(section.tt, tt);
        assert_eq!(section.xx, xx);
    }
    #[test]
    fn axes_default_to_index_sequences() {
        let data = Array2::<f64>::from_shape_fn((4, 3), |(r, c)| (r + c) as f64 - 2.0);
        let section = normalize_matrix(data.view(), None, None, 1.0, true).unwrap();
        assert_eq!(section.tt, array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(section.xx, array![0.0, 1.0, 2.0]);
        assert_eq!(section.n_samples(), 4);
        assert_eq!(section.n_traces(), 3);
    }
    #[test]
    fn one_dimensional_data_is_a_shape_error() {
        let data = array![1.0, -1.0, 2.0].into_dyn();
        let err = normalize(data.view(), None, None, 0.15, false).unwrap_err();
        assert!(matches!(
            err,
            WiggleError::Shape {
                argument: "data",
                expected: 2,
                actual: 1
            }
        ));
        let cube = Array3::<f64>::zeros((2, 2, 2)).into_dyn();
        assert!(matches!(
            normalize(cube.view(), None, None, 0.15, false),
            Err(WiggleError::Shape { actual: 3, .. })
        ));
    }
    #[test]
    fn non_real_scale_factor_is_a_type_error() {
        let data = array![[1.0], [-1.0]];
        for sf in [f64::NAN, f64::INFINITY, 0.0, -0.5] {
            let err = normalize_matrix(data.view(), None, None, sf, false).unwrap_err();
            assert!(matches!(err, WiggleError::Type { argument: "sf", .. }), "sf={sf}");
        }
    }
    #[test]
    fn axis_shape_and_length_are_checked() {
        let data = array![[1.0, 2.0], [-1.0, -2.0], [0.5, 0.5]].into_dyn();
        let tt_2d = array![[0.0, 1.0, 2.0]].into_dyn();
        assert!(matches!(
            normalize(data.view(), Some(tt_2d.view()), None, 1.0, false),
            Err(WiggleError::Shape { argument: "tt", .. })
        ));
        let short_tt = array![0.0, 1.0].into_dyn();
        assert!(matches!(
            normalize(data.view(), Some(short_tt.view()), None, 1.0, false),
            Err(WiggleError::LengthMismatch {
                argument: "tt",
                expected: 3,
                actual: 2
            })
        ));
        // xx is validated against the trace count, not the sample count
        let xx_by_rows = array![0.0, 1.0, 2.0].into_dyn();
        assert!(matches!(
            normalize(data.view(), None, Some(xx_by_rows.view()), 1.0, false),
            Err(WiggleError::LengthMismatch {
                argument: "xx",
                expected: 2,
                actual: 3
            })
        ));
    }
    #[test]
    fn single_sample_row_is_rejected() {
        let data = array![[1.0, 2.0]];
        assert!(matches!(
            normalize_matrix(data.view(), None, None, 1.0, false),
            Err(WiggleError::TooFewSamples { minimum: 2, actual: 1, .. })
        ));
    }
    #[test]
    fn trace_spacing_uses_minimum_gap() {
        let xx = array![0.0, 10.0, 12.5, 20.0];
        assert!(close(trace_spacing(xx.view()), 2.5));
        assert!(close(trace_spacing(array![7.0].view()), 1.0));
    }
    #[test]
    fn amplitude_scale_does_not_change_normalized_shape() {
        let data = array![[0.3, -1.2, 2.0], [-0.7, 0.4, -1.0], [1.1, 0.9, 0.2]];
        let base = normalize_matrix(data.view(), None, None, 0.4, false).unwrap();
        let scaled_input = data.mapv(|v| v * 37.5);
        let scaled = normalize_matrix(scaled_input.view(), None, None, 0.4, false).unwrap();
        for (a, b) in base.data.iter().zip(scaled.data.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }
    #[test]
    fn flat_section_does_not_produce_nan() {
        let data = Array2::<f64>::zeros((5, 2));
        let section = normalize_matrix(data.view(), None, None, 0.15, false).unwrap();
        assert!(section.data.iter().all(|v| *v == 0.0));
    }
}
