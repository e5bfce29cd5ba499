use thiserror::Error;
#[derive(Debug, Error)]
pub enum WiggleError {
    #[error("{argument} has the wrong type: {reason}")]
    Type {
        argument: &'static str,
        reason: String,
    },
    #[error("{argument} must be a {expected}D array, got {actual}D")]
    Shape {
        argument: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{argument} length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        argument: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{argument} needs at least {minimum} entries along its axis, got {actual}")]
    TooFewSamples {
        argument: &'static str,
        minimum: usize,
        actual: usize,
    },
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for WiggleError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        WiggleError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for WiggleError {
    fn from(value: image::ImageError) -> Self {
        WiggleError::Plot(value.to_string())
    }
}
