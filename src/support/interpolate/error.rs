use ninterp::error::{InterpolateError, ValidateError};
use thiserror::Error;

/// Errors from building or evaluating an interpolant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpError {
    #[error(transparent)]
    Validation(#[from] ValidateError),

    #[error(transparent)]
    Interpolation(#[from] InterpolateError),

    /// A sample is `NaN` or infinite.
    #[error("non-finite sample at index {index}")]
    NonFinite { index: usize },

    /// The query point is `NaN`.
    #[error("cannot interpolate at NaN")]
    NotANumber,
}
