//! report::errors — failures while rendering correlograms.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type ReportResult<T> = Result<T, ReportError>;

/// Unified error type for the rendering helpers.
///
/// I/O failures keep only the error kind and message so the enum stays
/// `Clone + PartialEq` like the other error types in the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    /// No correlogram was passed to a table writer.
    NoColumns,

    /// A column was computed from a series of a different length than the
    /// first column, so the lag axes do not line up.
    LagMismatch { column: String, expected: usize, found: usize },

    /// Writing to the output sink failed.
    Io { kind: std::io::ErrorKind, message: String },

    /// The CSV encoder rejected a record.
    Csv { message: String },
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io { kind: err.kind(), message: err.to_string() }
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => ReportError::from(io_err),
            _ => ReportError::Csv { message },
        }
    }
}

impl std::error::Error for ReportError {}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::NoColumns => write!(f, "Report Error: at least one column is required"),
            ReportError::LagMismatch { column, expected, found } => write!(
                f,
                "Report Error: column {column:?} has series length {found}, expected {expected}"
            ),
            ReportError::Io { kind, message } => {
                write!(f, "Report Error: I/O failure ({kind:?}): {message}")
            }
            ReportError::Csv { message } => write!(f, "Report Error: CSV encoding failed: {message}"),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ReportError> for PyErr {
    fn from(err: ReportError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
