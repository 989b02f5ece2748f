use thiserror::Error;

use ninterp::error::InterpolateError;

use crate::support::interpolate::InterpError;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the model's valid domain.
    ///
    /// For example, a temperature beyond the range a property table was
    /// sampled over, when extrapolation is disabled.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}

impl PropertyError {
    /// Wraps an interpolation failure for the named property.
    pub(crate) fn interpolation(property: &str, err: &InterpError) -> Self {
        match err {
            InterpError::Interpolation(InterpolateError::OutOfBounds(_))
            | InterpError::NotANumber => Self::OutOfDomain {
                context: format!("{property}: {err}"),
            },
            _ => Self::Calculation {
                context: format!("{property}: {err}"),
            },
        }
    }
}
