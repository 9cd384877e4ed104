use crate::parameter::ParameterError;
use thiserror::Error;

/// Error type for malformed expression trees, coefficient lists and batch inputs.
#[derive(Error, Debug)]
pub enum FitError {
    #[error("Unknown function type `{0}`.")]
    UnknownFunction(String),
    #[error("Invalid parameter for function `{function}`: {reason}")]
    InvalidParameter { function: String, reason: String },
    #[error("Coefficients are not sorted in strictly descending order: {0}")]
    UnsortedCoefficients(String),
    #[error("Malformed coefficient block: {0}")]
    MalformedCoefficientBlock(String),
    #[error("Derivatives of order {0} are not supported (expected 0, 1 or 2).")]
    UnsupportedDerivativeOrder(usize),
    #[error("Input arrays have incompatible lengths {0} and {1}.")]
    IncompatibleShapes(usize, usize),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

impl FitError {
    pub(crate) fn invalid_parameter(function: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            function: function.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type for `Result<T, FitError>`.
pub type FitResult<T> = Result<T, FitError>;
