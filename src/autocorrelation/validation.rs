//! autocorrelation::validation — input guards for ACF routines.
//!
//! Purpose
//! -------
//! Centralize the checks every ACF entry point performs before touching the
//! data, so that the numerical helpers can assume a non-empty, finite series.
//!
//! Invariants & assumptions
//! ------------------------
//! - A series must contain at least one observation.
//! - Every observation must be finite (no NaN, no ±∞).
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_series`] at the top of public routines; a successful
//!   return is a guarantee that the private helpers will not divide by a zero
//!   length or propagate NaN from the input.

use crate::autocorrelation::errors::{ACFError, ACFResult};

/// Validate that `data` is a non-empty series of finite values.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Input series of real-valued observations.
///
/// Returns
/// -------
/// `ACFResult<()>`
///   - `Ok(())` when `data` is non-empty and every element is finite.
///   - `Err(ACFError)` otherwise.
///
/// Errors
/// ------
/// - `ACFError::EmptySeries`
///   Returned when `data.len() == 0`.
/// - `ACFError::NonFiniteData { index, value }`
///   Returned for the first element that is NaN or ±∞.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_acf::autocorrelation::validation::validate_series;
/// # use rust_acf::autocorrelation::errors::ACFError;
/// assert!(validate_series(&[1.0, 2.0]).is_ok());
/// assert_eq!(validate_series(&[]), Err(ACFError::EmptySeries));
/// ```
pub fn validate_series(data: &[f64]) -> ACFResult<()> {
    if data.is_empty() {
        return Err(ACFError::EmptySeries);
    }

    for (index, &value) in data.iter().enumerate() {
        if !value.is_finite() {
            return Err(ACFError::NonFiniteData { index, value });
        }
    }

    Ok(())
}
