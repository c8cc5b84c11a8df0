//! autocorrelation::errors — error type and result alias for ACF routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every routine in the
//! `autocorrelation` subtree, together with a conversion layer to Python
//! exceptions when the `python-bindings` feature is enabled.
//!
//! Key behaviors
//! -------------
//! - Define [`ACFResult`] and [`ACFError`] as the canonical result and error
//!   types for input validation, variance computation, and normalization.
//! - Attach human-readable `Display` messages to each variant so failures are
//!   meaningful in logs without extra context.
//! - Implement `From<ACFError> for PyErr` to raise `ValueError` at the PyO3
//!   boundary with the Rust message preserved.
//!
//! Invariants & assumptions
//! ------------------------
//! - Public ACF entry points return [`ACFResult<T>`] and never panic on
//!   user-facing invalid input.
//! - `ACFError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("series must be
//!   non-empty", "variance is zero") rather than low-level arithmetic.
//!
//! Testing notes
//! -------------
//! - Unit tests below verify that each variant's `Display` message embeds
//!   its payload (offending index/value, normalization method).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::autocorrelation::acf::Normalization;

pub type ACFResult<T> = Result<T, ACFError>;

/// ACFError — failure conditions of the ACF calculator.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The input series has no observations; an ACF is undefined.
/// - `NonFiniteData { index, value }`
///   The element at `index` is NaN or ±∞.
/// - `UndefinedNormalization { method }`
///   The divisor required by `method` is zero (a constant series under
///   [`Normalization::Variance`], an all-zero series under
///   [`Normalization::ZeroLag`]).
#[derive(Debug, Clone, PartialEq)]
pub enum ACFError {
    //------ Input validation errors ------
    EmptySeries,
    NonFiniteData { index: usize, value: f64 },

    //------ Normalization errors ------
    UndefinedNormalization { method: Normalization },
}

impl std::error::Error for ACFError {}

impl std::fmt::Display for ACFError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ACFError::EmptySeries => {
                write!(f, "ACF is undefined for an empty series; need at least 1 observation.")
            }
            ACFError::NonFiniteData { index, value } => {
                write!(f, "Invalid data value {value} at index {index}. Must be a finite number.")
            }
            ACFError::UndefinedNormalization { method } => {
                write!(f, "Cannot apply {method} normalization: the divisor is zero.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ACFError> for PyErr {
    fn from(err: ACFError) -> PyErr {
        PyValueError::new_err(format!("ACFError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for every ACFError variant.
    //
    // They intentionally DO NOT cover:
    // - The `From<ACFError> for PyErr` conversion, which requires linking
    //   against the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `ACFError::EmptySeries` formats to a non-empty message.
    //
    // Given
    // -----
    // - An `ACFError::EmptySeries` value.
    //
    // Expect
    // ------
    // - The message is non-empty and mentions "empty".
    fn acf_error_empty_series_has_nonempty_display_message() {
        // Arrange
        let err = ACFError::EmptySeries;

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("empty"), "Unexpected message for EmptySeries.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ACFError::NonFiniteData` embeds both the index and the
    // offending value.
    //
    // Given
    // -----
    // - `NonFiniteData { index: 7, value: inf }`.
    //
    // Expect
    // ------
    // - The message contains "7" and "inf".
    fn acf_error_non_finite_data_includes_payload_in_display() {
        // Arrange
        let err = ACFError::NonFiniteData { index: 7, value: f64::INFINITY };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "Display message should include the index.\nGot: {msg}");
        assert!(msg.contains("inf"), "Display message should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `ACFError::UndefinedNormalization` names the normalization
    // method that failed.
    //
    // Given
    // -----
    // - `UndefinedNormalization { method: Normalization::Variance }`.
    //
    // Expect
    // ------
    // - The message contains "variance".
    fn acf_error_undefined_normalization_names_method() {
        // Arrange
        let err = ACFError::UndefinedNormalization { method: Normalization::Variance };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("variance"), "Display message should name the method.\nGot: {msg}");
    }
}
