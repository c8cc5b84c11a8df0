//! generation::errors — errors for synthetic series generation.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Invalid configuration of a series generator.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Requested series length is zero.
    ZeroLength,

    /// Scale factor is zero, NaN, or ±∞.
    InvalidScale(f64),
}

impl std::error::Error for GenerationError {}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::ZeroLength => {
                write!(f, "Generation Error: series length must be at least 1")
            }
            GenerationError::InvalidScale(scale) => {
                write!(f, "Generation Error: invalid scale {scale}. Must be finite and non-zero.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<GenerationError> for PyErr {
    fn from(err: GenerationError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
