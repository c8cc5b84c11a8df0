//! autocorrelation — full two-sided ACF with optional normalization.
//!
//! Purpose
//! -------
//! Collect the ACF calculator and its shared infrastructure: input
//! validation, the error type, the normalization policy, and the
//! [`Correlogram`] value that pairs ACF values with their lag axis.
//!
//! Key behaviors
//! -------------
//! - [`compute_acf`] computes the 2n − 1 overlap sums Σₜ xₜ·xₜ₊ₛ for every lag
//!   s ∈ [−(n−1), n−1] and, when asked, divides them by the population
//!   variance of the series.
//! - [`compute_acf_with`] and [`Correlogram::compute`] accept an explicit
//!   [`Normalization`], including the conventional zero-lag variant.
//! - [`validate_series`] guards every entry point against empty and
//!   non-finite input.
//!
//! Invariants & assumptions
//! ------------------------
//! - All routines are pure: no hidden state, no randomness, no I/O.
//! - Failures are reported via [`ACFResult`]; user input never panics.
//! - A zero divisor (constant series, or all-zero series for the zero-lag
//!   variant) is an error, never ±∞ or NaN in the output.
//! - Normalized output is finite for every finite non-constant series,
//!   however large or small its values.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_acf::autocorrelation::{ACFResult, compute_acf};
//!
//!   fn run(series: &[f64]) -> ACFResult<()> {
//!       let acf = compute_acf(series, true)?;
//!       assert_eq!(acf.len(), 2 * series.len() - 1);
//!       Ok(())
//!   }
//!   # run(&[1.0, 3.0, 2.0]).unwrap();
//!   ```
//!
//! - Renderers (see [`crate::report`]) consume [`Correlogram`] values.
//!
//! Testing notes
//! -------------
//! - [`acf`] holds the property tests (symmetry, scale invariance, peak at
//!   lag 0, length 2n − 1) and the hand-computed examples.
//! - [`errors`] and [`validation`] test their branches directly.

pub mod acf;
pub mod correlogram;
pub mod errors;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::acf::{
    Normalization, compute_acf, compute_acf_with, full_autocorrelation, lags, mean,
    population_variance,
};
pub use self::correlogram::Correlogram;
pub use self::errors::{ACFError, ACFResult};
pub use self::validation::validate_series;

pub mod prelude {
    pub use super::acf::{Normalization, compute_acf, compute_acf_with};
    pub use super::correlogram::Correlogram;
    pub use super::errors::{ACFError, ACFResult};
}
