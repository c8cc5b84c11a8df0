//! utils — conversion helpers for the PyO3 boundary.
//!
//! Only compiled with the `python-bindings` feature.

use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Convert the Python argument `arg` into a contiguous read-only `f64` series.
///
/// Accepted inputs, tried in order:
/// - a contiguous 1-D `float64` `numpy.ndarray`, borrowed without copying;
/// - anything with a `to_numpy()` method (e.g. `pandas.Series`) whose result
///   is such an array;
/// - any sequence of floats, including strided or non-`float64` arrays,
///   which is copied into a fresh array.
///
/// Errors
/// ------
/// - `TypeError` naming `arg` when none of the above applies.
pub fn extract_series<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, arg: &str,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Some(series) = contiguous_f64(raw_data) {
        return Ok(series);
    }

    if raw_data.hasattr("to_numpy")? {
        let converted = raw_data.call_method0("to_numpy")?;
        if let Some(series) = contiguous_f64(&converted) {
            return Ok(series);
        }
    }

    let values: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "{arg} must be a 1-D numpy.ndarray, pandas.Series, or sequence of floats"
        ))
    })?;
    Ok(values.into_pyarray(py).readonly())
}

/// `Some` only for a 1-D `float64` array with contiguous memory.
fn contiguous_f64<'py>(obj: &Bound<'py, PyAny>) -> Option<PyReadonlyArray1<'py, f64>> {
    obj.extract::<PyReadonlyArray1<'py, f64>>().ok().filter(|series| series.as_slice().is_ok())
}
