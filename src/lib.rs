//! rust_acf — full two-sided autocorrelation of time series, with and
//! without normalization.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, behind the
//! `python-bindings` feature, as the PyO3 bridge that exposes the ACF
//! calculator to Python via the `_rust_acf` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core [`autocorrelation`] module together with its
//!   collaborators: [`generation`] (seeded random walks) and [`report`]
//!   (CSV / text rendering of correlograms).
//! - When `python-bindings` is enabled, define `#[pyfunction]` wrappers and
//!   the `#[pymodule]` initializer for `_rust_acf`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in [`autocorrelation`]; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - The ACF of a length-n series has 2n − 1 values indexed by lag
//!   −(n−1),…,n−1, both from Rust and from Python.
//!
//! Conventions
//! -----------
//! - Errors from the core are rich Rust enums internally and are converted to
//!   `ValueError` at the PyO3 boundary.
//! - "Normalized" means divided by the population variance (divisor n) of the
//!   series unless a [`Normalization`](autocorrelation::Normalization) is
//!   chosen explicitly.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`autocorrelation::compute_acf`] or
//!   [`autocorrelation::Correlogram`] directly and can ignore the PyO3 items.
//! - The `acf-demo` binary shows the full generate → compute → render flow.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   `tests/integration_acf_pipeline.rs` integration test.

pub mod autocorrelation;
pub mod generation;
pub mod report;

#[cfg(feature = "python-bindings")]
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    autocorrelation::{compute_acf, lags},
    generation::RandomWalk,
    utils::extract_series,
};

/// Full two-sided ACF of a 1-D float series.
///
/// Python signature: `compute_acf(data, /, normalize=False)`.
///
/// Returns a NumPy array of length `2 * len(data) - 1` ordered by lag
/// `-(n-1), ..., n-1`. Raises `ValueError` for empty or non-finite input and
/// for `normalize=True` on a constant series.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "compute_acf",
    text_signature = "(data, /, normalize=False)",
    signature = (raw_data, normalize = false)
)]
pub fn py_compute_acf<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, normalize: bool,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let series = extract_series(py, raw_data, "data")?;
    let data: &[f64] = series
        .as_slice()
        .map_err(|_| PyValueError::new_err("data must be a 1-D contiguous float64 series"))?;
    let acf = compute_acf(data, normalize)?;
    Ok(acf.into_pyarray(py))
}

/// Lag axis `-(n-1), ..., n-1` matching `compute_acf` for a length-`n` series.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "acf_lags", text_signature = "(n, /)")]
pub fn py_acf_lags<'py>(py: Python<'py>, n: usize) -> PyResult<Bound<'py, PyArray1<isize>>> {
    Ok(lags(n)?.into_pyarray(py))
}

/// Seeded Gaussian random walk of length `n`, multiplied by `scale`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "random_walk",
    text_signature = "(n, /, scale=1.0, seed=42)",
    signature = (n, scale = 1.0, seed = 42)
)]
pub fn py_random_walk<'py>(
    py: Python<'py>, n: usize, scale: f64, seed: u64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let walk = RandomWalk::new(n, scale, seed)?;
    Ok(walk.generate().into_pyarray(py))
}

/// `_rust_acf` — Python extension module initializer.
///
/// Registers `compute_acf`, `acf_lags`, and `random_walk` on the module
/// object imported by the pure-Python `rust_acf` package.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_acf<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_compute_acf, m)?)?;
    m.add_function(wrap_pyfunction!(py_acf_lags, m)?)?;
    m.add_function(wrap_pyfunction!(py_random_walk, m)?)?;
    Ok(())
}
