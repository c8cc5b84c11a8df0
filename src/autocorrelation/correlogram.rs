//! autocorrelation::correlogram — ACF values paired with their lag axis.
//!
//! Purpose
//! -------
//! Wrap the plain ACF array produced by
//! [`compute_acf_with`](crate::autocorrelation::acf::compute_acf_with) in a
//! small value type that remembers the series length and normalization, so
//! renderers and callers can index by lag instead of by array position.
//!
//! Invariants & assumptions
//! ------------------------
//! - `values.len() == 2 * series_len − 1` and `series_len ≥ 1`.
//! - `values[i]` is the ACF at lag `i − (series_len − 1)`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover lag lookup at the boundaries, the peak-lag tie rule,
//!   and the `(lag, value)` iterator.

use ndarray::Array1;

use crate::autocorrelation::acf::{Normalization, compute_acf_with};
use crate::autocorrelation::errors::ACFResult;

/// Correlogram — a computed ACF together with its lag range.
///
/// Fields
/// ------
/// - `values`: `Array1<f64>`
///   ACF ordered by ascending lag, length 2n − 1.
/// - `series_len`: `usize`
///   Length n of the series the ACF was computed from.
/// - `normalization`: [`Normalization`]
///   Divisor that was applied to the raw overlap sums.
///
/// Notes
/// -----
/// - Owns its values; it does not borrow the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlogram {
    values: Array1<f64>,
    series_len: usize,
    normalization: Normalization,
}

impl Correlogram {
    /// Compute the correlogram of `series` under `normalization`.
    ///
    /// Errors
    /// ------
    /// - Every error of
    ///   [`compute_acf_with`](crate::autocorrelation::acf::compute_acf_with).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_acf::autocorrelation::{Correlogram, Normalization};
    ///
    /// let c = Correlogram::compute(&[1.0, 2.0, 3.0], Normalization::None).unwrap();
    /// assert_eq!(c.max_lag(), 2);
    /// assert_eq!(c.value_at(-1), Some(8.0));
    /// assert_eq!(c.value_at(3), None);
    /// ```
    pub fn compute(series: &[f64], normalization: Normalization) -> ACFResult<Self> {
        let values = compute_acf_with(series, normalization)?;
        Ok(Correlogram { values, series_len: series.len(), normalization })
    }

    /// ACF values ordered by ascending lag.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Consume the correlogram and return the ACF values.
    pub fn into_values(self) -> Array1<f64> {
        self.values
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Length of the series the ACF was computed from.
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    /// Number of ACF values, 2n − 1.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `false` for every correlogram built by [`compute`](Self::compute).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest lag n − 1; the lag axis is [−max_lag, max_lag].
    pub fn max_lag(&self) -> isize {
        (self.series_len - 1) as isize
    }

    /// Lag axis −(n−1),…,n−1 aligned with [`values`](Self::values).
    pub fn lags(&self) -> Array1<isize> {
        let max_lag = self.max_lag();
        Array1::from_iter(-max_lag..=max_lag)
    }

    /// ACF at `lag`, or `None` when |lag| > n − 1.
    pub fn value_at(&self, lag: isize) -> Option<f64> {
        if lag.unsigned_abs() > self.series_len - 1 {
            return None;
        }
        self.values.get((lag + self.max_lag()) as usize).copied()
    }

    /// ACF at lag 0.
    pub fn zero_lag_value(&self) -> f64 {
        self.values[self.series_len - 1]
    }

    /// Lag at which the ACF is largest.
    ///
    /// Among equal maxima the lag with the smallest magnitude wins, and the
    /// negative lag wins between ±k. For an unnormalized or normalized ACF of
    /// a series that is not all zeros this is lag 0.
    pub fn peak_lag(&self) -> isize {
        let mut best_lag: isize = 0;
        let mut best_value = f64::NEG_INFINITY;
        for (lag, value) in self.iter() {
            let better = value > best_value
                || (value == best_value && lag.unsigned_abs() < best_lag.unsigned_abs());
            if better {
                best_lag = lag;
                best_value = value;
            }
        }
        best_lag
    }

    /// Iterate over `(lag, value)` pairs in ascending lag order.
    pub fn iter(&self) -> impl Iterator<Item = (isize, f64)> + '_ {
        let max_lag = self.max_lag();
        self.values.iter().enumerate().map(move |(i, &v)| (i as isize - max_lag, v))
    }
}
