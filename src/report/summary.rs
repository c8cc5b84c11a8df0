//! report::summary — one-line descriptions of correlograms.
//!
//! Purpose
//! -------
//! Reduce a correlogram to the handful of numbers that show the effect of
//! normalization at a glance: the zero-lag value, the peak lag, and the
//! value range. Unnormalized ranges grow with the square of the series'
//! scale; normalized ranges do not.

use crate::autocorrelation::{Correlogram, Normalization};

/// CorrelogramSummary — scalar digest of a correlogram.
///
/// Fields
/// ------
/// - `name`: label used when printing.
/// - `normalization`: divisor applied to the raw sums.
/// - `series_len`: length n of the source series.
/// - `zero_lag`: ACF(0).
/// - `peak_lag`: see [`Correlogram::peak_lag`].
/// - `min`, `max`: smallest and largest ACF values over all lags.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelogramSummary {
    pub name: String,
    pub normalization: Normalization,
    pub series_len: usize,
    pub zero_lag: f64,
    pub peak_lag: isize,
    pub min: f64,
    pub max: f64,
}

impl CorrelogramSummary {
    /// Width of the value range, `max − min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Summarize `correlogram` under the label `name`.
///
/// Examples
/// --------
/// ```rust
/// use rust_acf::autocorrelation::{Correlogram, Normalization};
/// use rust_acf::report::summarize;
///
/// let c = Correlogram::compute(&[1.0, 2.0, 3.0], Normalization::None).unwrap();
/// let s = summarize("raw", &c);
/// assert_eq!((s.min, s.max, s.peak_lag), (3.0, 14.0, 0));
/// ```
pub fn summarize(name: &str, correlogram: &Correlogram) -> CorrelogramSummary {
    let values = correlogram.values();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    CorrelogramSummary {
        name: name.to_string(),
        normalization: correlogram.normalization(),
        series_len: correlogram.series_len(),
        zero_lag: correlogram.zero_lag_value(),
        peak_lag: correlogram.peak_lag(),
        min,
        max,
    }
}

impl std::fmt::Display for CorrelogramSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: n = {}, normalization = {}, ACF(0) = {:.4}, peak lag = {}, range = [{:.4}, {:.4}]",
            self.name,
            self.series_len,
            self.normalization,
            self.zero_lag,
            self.peak_lag,
            self.min,
            self.max
        )
    }
}
