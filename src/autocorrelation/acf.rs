//! autocorrelation::acf — full two-sided autocorrelation with normalization.
//!
//! Purpose
//! -------
//! Compute the full linear cross-correlation of a series with itself over
//! every lag in [-(n−1), n−1], optionally rescaled by the population variance
//! of the series. This is the core ACF calculator of the crate.
//!
//! Key behaviors
//! -------------
//! - [`compute_acf`] returns 2n−1 values ordered by ascending lag; index `i`
//!   corresponds to lag `i − (n−1)`.
//! - The value at shift s is Σₜ xₜ·xₜ₊ₛ over the overlapping indices only.
//!   There is no zero padding and no demeaning; the overlap shrinks towards
//!   the extreme lags.
//! - [`Normalization`] selects the divisor: none, the population variance
//!   (the literal formula `correlate(x, x, "full") / std(x)²`), or the
//!   zero-lag value (the conventional ACF with ACF(0) = 1).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated by
//!   [`validate_series`](crate::autocorrelation::validation::validate_series):
//!   non-empty and finite.
//! - The unnormalized ACF is exactly symmetric, ACF(s) == ACF(−s); both
//!   halves are written from the same overlap sum.
//! - Dividing by a positive constant preserves symmetry and the lag of the
//!   maximum.
//! - A zero divisor is reported as
//!   [`ACFError::UndefinedNormalization`] instead of producing ±∞ or NaN.
//!
//! Conventions
//! -----------
//! - Population variance divides by n, never n − 1.
//! - Lags are `isize`; the lag axis is produced by [`lags`].
//!
//! Testing notes
//! -------------
//! - Unit tests check the hand-computed example [1, 2, 3] ↦ [3, 8, 14, 8, 3],
//!   the single-element case, symmetry, the peak at lag 0, length 2n − 1,
//!   scale invariance of the normalized ACF, and the zero-variance policy.

use ndarray::Array1;

use crate::autocorrelation::errors::{ACFError, ACFResult};
use crate::autocorrelation::validation::validate_series;

/// Normalization — divisor applied to the raw overlap sums.
///
/// Variants
/// --------
/// - `None`
///   Raw overlap sums Σₜ xₜ·xₜ₊ₛ. Magnitudes scale with the square of the
///   series' scale.
/// - `Variance`
///   Every value divided once by the population variance of the series.
///   This reproduces `np.correlate(x, x, "full") / np.std(x) ** 2` and is what
///   `compute_acf(x, true)` applies. The result is scale invariant, but it is
///   not the textbook ACF: ACF(0) equals n·(σ² + x̄²)/σ² rather than 1.
/// - `ZeroLag`
///   Every value divided by the zero-lag sum Σₜ xₜ², so ACF(0) = 1 and all
///   values lie in [−1, 1]. Only applied when asked for explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    #[default]
    None,
    Variance,
    ZeroLag,
}

impl Normalization {
    /// Map the boolean `normalize` flag onto a normalization method.
    pub fn from_flag(normalize: bool) -> Self {
        if normalize { Normalization::Variance } else { Normalization::None }
    }

    /// `true` for every method that divides the raw sums.
    pub fn is_normalized(&self) -> bool {
        !matches!(self, Normalization::None)
    }
}

impl std::fmt::Display for Normalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Normalization::None => write!(f, "none"),
            Normalization::Variance => write!(f, "variance"),
            Normalization::ZeroLag => write!(f, "zero-lag"),
        }
    }
}

/// Compute the full two-sided ACF of `series`.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Input series {xₜ} of length n ≥ 1 with finite values.
/// - `normalize`: `bool`
///   When `true`, divide every value by the population variance of
///   `series` ([`Normalization::Variance`]).
///
/// Returns
/// -------
/// `ACFResult<Array1<f64>>`
///   - `Ok(acf)` with `acf.len() == 2n − 1`, where `acf[i]` is the value at
///     lag `i − (n − 1)`.
///   - `Err(ACFError)` on invalid input or a zero variance.
///
/// Errors
/// ------
/// - `ACFError::EmptySeries`
///   Returned when `series` is empty.
/// - `ACFError::NonFiniteData { index, value }`
///   Returned when `series` contains NaN or ±∞.
/// - `ACFError::UndefinedNormalization { method: Normalization::Variance }`
///   Returned when `normalize` is `true` and `series` is constant
///   (including every single-element series).
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// use rust_acf::autocorrelation::compute_acf;
///
/// let acf = compute_acf(&[1.0, 2.0, 3.0], false).unwrap();
/// assert_eq!(acf.to_vec(), vec![3.0, 8.0, 14.0, 8.0, 3.0]);
///
/// assert!(compute_acf(&[5.0, 5.0, 5.0], true).is_err());
/// ```
pub fn compute_acf(series: &[f64], normalize: bool) -> ACFResult<Array1<f64>> {
    compute_acf_with(series, Normalization::from_flag(normalize))
}

/// Compute the full two-sided ACF of `series` under an explicit
/// [`Normalization`].
///
/// Errors
/// ------
/// - Same validation errors as [`compute_acf`].
/// - `ACFError::UndefinedNormalization { method }` when the divisor of
///   `method` is zero: a constant series for `Variance`, an all-zero series
///   for `ZeroLag`.
///
/// Notes
/// -----
/// - Normalized results are computed on the series rescaled by a power of
///   two so that max |xₜ| lies in [1, 2). Both the overlap sums and the
///   divisor scale by the same factor, so the ratio is unchanged, while
///   squares of very large or very small values do not overflow to ∞ or
///   underflow to 0. For inputs in the ordinary range the rescaling is
///   exact and the result is bit-identical to dividing the raw sums.
/// - The unnormalized sums are returned as computed; they overflow to ±∞
///   when Σₜ xₜ² exceeds `f64::MAX`.
pub fn compute_acf_with(series: &[f64], normalization: Normalization) -> ACFResult<Array1<f64>> {
    validate_series(series)?;
    let scaled = match normalization {
        Normalization::None => return Ok(full_autocorrelation(series)),
        Normalization::Variance | Normalization::ZeroLag => rescale_to_unit(series),
    };
    let raw = full_autocorrelation(&scaled);

    let divisor = match normalization {
        Normalization::Variance => calc_population_variance(&scaled),
        _ => raw[series.len() - 1],
    };
    if divisor == 0.0 {
        return Err(ACFError::UndefinedNormalization { method: normalization });
    }

    Ok(raw / divisor)
}

/// Raw overlap sums Σₜ xₜ·xₜ₊ₛ for s = −(n−1),…,n−1.
///
/// Performs no validation: an empty input yields an empty array, and
/// non-finite values propagate into the sums. Public callers wanting the
/// error policy should go through [`compute_acf`].
///
/// The sum at lag k ≥ 0 is formed once as `data[k..]` zipped with `data`
/// and written to both index n−1−k and n−1+k.
pub fn full_autocorrelation(series: &[f64]) -> Array1<f64> {
    let n = series.len();
    if n == 0 {
        return Array1::zeros(0);
    }

    let mut values = Array1::<f64>::zeros(2 * n - 1);
    for k in 0..n {
        let overlap: f64 = series[k..].iter().zip(series).map(|(x_t_k, x_t)| x_t * x_t_k).sum();
        values[n - 1 - k] = overlap;
        values[n - 1 + k] = overlap;
    }
    values
}

/// Lag axis −(n−1),…,n−1 for a series of length `n`.
///
/// Errors
/// ------
/// - `ACFError::EmptySeries` when `n == 0`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_acf::autocorrelation::lags;
/// assert_eq!(lags(3).unwrap().to_vec(), vec![-2, -1, 0, 1, 2]);
/// ```
pub fn lags(n: usize) -> ACFResult<Array1<isize>> {
    if n == 0 {
        return Err(ACFError::EmptySeries);
    }
    let max_lag = (n - 1) as isize;
    Ok(Array1::from_iter(-max_lag..=max_lag))
}

/// Arithmetic mean x̄ = (1 / n) Σₜ xₜ.
///
/// Errors
/// ------
/// - Validation errors from
///   [`validate_series`](crate::autocorrelation::validation::validate_series).
pub fn mean(series: &[f64]) -> ACFResult<f64> {
    validate_series(series)?;
    Ok(calc_mean(series))
}

/// Population variance σ² = (1 / n) Σₜ (xₜ − x̄)².
///
/// This is the square of a standard deviation without Bessel's correction.
/// A constant series returns exactly `0.0`.
///
/// Errors
/// ------
/// - Validation errors from
///   [`validate_series`](crate::autocorrelation::validation::validate_series).
///
/// Examples
/// --------
/// ```rust
/// # use rust_acf::autocorrelation::population_variance;
/// assert_eq!(population_variance(&[1.0, 2.0, 3.0]).unwrap(), 2.0 / 3.0);
/// assert_eq!(population_variance(&[5.0, 5.0, 5.0]).unwrap(), 0.0);
/// ```
pub fn population_variance(series: &[f64]) -> ACFResult<f64> {
    validate_series(series)?;
    Ok(calc_population_variance(series))
}

//
// ---------- Private helpers ----------
//

/// Copy of `data` multiplied by 2^−e, where 2^e ≤ max |xₜ| < 2^(e+1).
///
/// An all-zero series is returned unchanged. The exponent is clamped to
/// ±1022 so the factor stays a normal `f64`; a series of subnormals is then
/// lifted to about 2^−52 instead of 1.
fn rescale_to_unit(data: &[f64]) -> Vec<f64> {
    let max_abs = data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if max_abs == 0.0 {
        return data.to_vec();
    }
    let exponent = (max_abs.log2().floor() as i32).clamp(-1022, 1022);
    let factor = 2.0_f64.powi(-exponent);
    data.iter().map(|x| x * factor).collect()
}

/// Mean of a validated, non-empty series.
#[inline]
fn calc_mean(data: &[f64]) -> f64 {
    let n = data.len();
    let sum: f64 = data.iter().sum();
    sum / n as f64
}

/// Two-pass population variance of a validated, non-empty series.
///
/// The sum of `x / n` for a constant series need not reproduce `x` exactly,
/// which would leave a rounding residue instead of a zero variance, so
/// constant series short-circuit to `0.0`.
#[inline]
fn calc_population_variance(data: &[f64]) -> f64 {
    let first = data[0];
    if data.iter().all(|&x| x == first) {
        return 0.0;
    }

    let n = data.len();
    let mean = calc_mean(data);
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The overlap-sum semantics on small hand-computable series.
    // - Structural invariants: length 2n − 1, exact symmetry, peak at lag 0.
    // - Variance normalization: scale invariance and the zero-variance
    //   policy, including the single-element series.
    // - The zero-lag normalization and its ACF(0) = 1 property.
    // - Helper accessors `lags`, `mean`, and `population_variance`.
    //
    // They intentionally DO NOT cover:
    // - Random-walk inputs at realistic lengths; those are exercised by the
    //   integration test through the `generation` module.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    fn wiggly_series() -> Vec<f64> {
        vec![0.3, -1.2, 2.5, 0.0, 4.1, -0.7, 1.9, 3.3, -2.2]
    }

    #[test]
    // Purpose
    // -------
    // Verify the overlap-sum semantics on the canonical example.
    //
    // Given
    // -----
    // - series = [1, 2, 3], normalize = false.
    //
    // Expect
    // ------
    // - [3, 8, 14, 8, 3] for lags −2..=2:
    //   lag 0: 1+4+9, lag ±1: 1·2+2·3, lag ±2: 1·3.
    fn compute_acf_unnormalized_matches_hand_computed_sums() {
        // Arrange
        let series = [1.0_f64, 2.0, 3.0];

        // Act
        let acf = compute_acf(&series, false).expect("finite input should succeed");

        // Assert
        assert_eq!(acf.to_vec(), vec![3.0, 8.0, 14.0, 8.0, 3.0]);
    }

    #[test]
    // Purpose
    // -------
    // Check the single-element series in both modes.
    //
    // Given
    // -----
    // - series = [7].
    //
    // Expect
    // ------
    // - normalize = false returns [49].
    // - normalize = true fails with UndefinedNormalization (σ² = 0).
    fn compute_acf_single_element_series() {
        // Arrange
        let series = [7.0_f64];

        // Act
        let raw = compute_acf(&series, false);
        let normalized = compute_acf(&series, true);

        // Assert
        assert_eq!(raw.expect("unnormalized ACF of [7] is defined").to_vec(), vec![49.0]);
        assert_eq!(
            normalized,
            Err(ACFError::UndefinedNormalization { method: Normalization::Variance })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a constant series cannot be variance-normalized.
    //
    // Given
    // -----
    // - series = [5, 5, 5], normalize = true.
    //
    // Expect
    // ------
    // - Err(UndefinedNormalization { method: Variance }), not ±∞ or NaN.
    fn compute_acf_constant_series_normalized_returns_error() {
        // Arrange
        let series = [5.0_f64, 5.0, 5.0];

        // Act
        let result = compute_acf(&series, true);

        // Assert
        match result {
            Err(ACFError::UndefinedNormalization { method: Normalization::Variance }) => (),
            other => panic!("expected UndefinedNormalization error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a constant series with a non-representable mean is still
    // detected as zero variance.
    //
    // Given
    // -----
    // - series = [0.1; 7], whose floating-point mean is not exactly 0.1.
    //
    // Expect
    // ------
    // - population_variance returns exactly 0.0 and normalization fails.
    fn compute_acf_constant_fractional_series_has_exact_zero_variance() {
        // Arrange
        let series = vec![0.1_f64; 7];

        // Act
        let variance = population_variance(&series).expect("finite input");
        let result = compute_acf(&series, true);

        // Assert
        assert_eq!(variance, 0.0);
        assert!(result.is_err(), "expected an error for a constant series, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Empty input is rejected in both modes, and NaN is rejected up front.
    //
    // Given
    // -----
    // - An empty series, and a series containing NaN.
    //
    // Expect
    // ------
    // - EmptySeries for the former, NonFiniteData for the latter.
    fn compute_acf_invalid_inputs_return_error() {
        // Arrange
        let empty: Vec<f64> = Vec::new();
        let with_nan = [1.0_f64, f64::NAN];

        // Act & Assert
        assert_eq!(compute_acf(&empty, false), Err(ACFError::EmptySeries));
        assert_eq!(compute_acf(&empty, true), Err(ACFError::EmptySeries));
        match compute_acf(&with_nan, false) {
            Err(ACFError::NonFiniteData { index: 1, .. }) => (),
            other => panic!("expected NonFiniteData at index 1, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the length invariant and exact lag symmetry of the raw ACF.
    //
    // Given
    // -----
    // - A non-symmetric series of length 9.
    //
    // Expect
    // ------
    // - len == 2n − 1 and acf[i] == acf[2n − 2 − i] bit for bit.
    fn compute_acf_unnormalized_is_symmetric_with_expected_length() {
        // Arrange
        let series = wiggly_series();
        let n = series.len();

        // Act
        let acf = compute_acf(&series, false).expect("finite input should succeed");

        // Assert
        assert_eq!(acf.len(), 2 * n - 1);
        for i in 0..acf.len() {
            assert_eq!(acf[i], acf[2 * n - 2 - i], "asymmetry at index {i}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the Cauchy–Schwarz bound: the raw ACF peaks at lag 0.
    //
    // Given
    // -----
    // - A mixed-sign series and an alternating series.
    //
    // Expect
    // ------
    // - Every value is ≤ the value at index n − 1.
    fn compute_acf_unnormalized_peaks_at_zero_lag() {
        for series in [wiggly_series(), vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0]] {
            // Arrange
            let n = series.len();

            // Act
            let acf = compute_acf(&series, false).expect("finite input should succeed");

            // Assert
            let peak = acf[n - 1];
            assert!(acf.iter().all(|&v| v <= peak), "value above ACF(0) = {peak} in {acf:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that the variance-normalized ACF is invariant under rescaling.
    //
    // Given
    // -----
    // - A series S and k·S for k ∈ {10, −3.5, 1e-3, 1e-200, 1e150}; the last
    //   two push the squared values outside the f64 range.
    //
    // Expect
    // ------
    // - compute_acf(k·S, true) ≈ compute_acf(S, true) elementwise.
    fn compute_acf_normalized_is_scale_invariant() {
        // Arrange
        let series = wiggly_series();
        let baseline = compute_acf(&series, true).expect("non-constant series");

        for k in [10.0_f64, -3.5, 1e-3, 1e-200, 1e150] {
            let scaled: Vec<f64> = series.iter().map(|x| k * x).collect();

            // Act
            let acf = compute_acf(&scaled, true).expect("non-constant series");

            // Assert
            for (a, b) in acf.iter().zip(baseline.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure normalization stays finite when Σx² overflows and succeeds
    // when (x − x̄)² underflows.
    //
    // Given
    // -----
    // - [1e200, −1e200, 3e199] = 1e199 · [10, −10, 3].
    // - [1e-200, 2e-200] = 1e-200 · [1, 2].
    //
    // Expect
    // ------
    // - Both Variance and ZeroLag results are finite and match the ACF of
    //   the moderate-magnitude counterpart.
    fn compute_acf_normalized_handles_extreme_magnitudes() {
        // Arrange
        let cases: [(&[f64], &[f64]); 2] = [
            (&[1e200, -1e200, 3e199], &[10.0, -10.0, 3.0]),
            (&[1e-200, 2e-200], &[1.0, 2.0]),
        ];

        for (extreme, moderate) in cases {
            for normalization in [Normalization::Variance, Normalization::ZeroLag] {
                // Act
                let acf = compute_acf_with(extreme, normalization).expect("non-constant series");
                let expected = compute_acf_with(moderate, normalization).expect("non-constant");

                // Assert
                assert!(acf.iter().all(|v| v.is_finite()), "non-finite ACF {acf:?}");
                for (a, b) in acf.iter().zip(expected.iter()) {
                    assert_relative_eq!(*a, *b, epsilon = TOL, max_relative = 1e-12);
                }
            }
        }
        assert_eq!(
            compute_acf(&[1e-200, 2e-200], true).map(|acf| acf.len()),
            Ok(3),
            "tiny non-constant series must not be reported as constant"
        );
    }

    #[test]
    // Purpose
    // -------
    // Confirm that variance normalization divides by σ² exactly once.
    //
    // Given
    // -----
    // - series = [1, 2, 3], σ² = 2/3.
    //
    // Expect
    // ------
    // - [3, 8, 14, 8, 3] · 3/2 = [4.5, 12, 21, 12, 4.5].
    fn compute_acf_normalized_divides_by_population_variance() {
        // Arrange
        let series = [1.0_f64, 2.0, 3.0];
        let expected = [4.5, 12.0, 21.0, 12.0, 4.5];

        // Act
        let acf = compute_acf(&series, true).expect("non-constant series");

        // Assert
        for (a, b) in acf.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *b, epsilon = TOL, max_relative = TOL);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the conventional zero-lag normalization.
    //
    // Given
    // -----
    // - series = [1, 2, 3] under Normalization::ZeroLag, and an all-zero
    //   series.
    //
    // Expect
    // ------
    // - [3, 8, 14, 8, 3] / 14 with the centre exactly 1.
    // - UndefinedNormalization { method: ZeroLag } for the zero series.
    fn compute_acf_with_zero_lag_normalization() {
        // Arrange
        let series = [1.0_f64, 2.0, 3.0];
        let zeros = [0.0_f64; 4];

        // Act
        let acf = compute_acf_with(&series, Normalization::ZeroLag).expect("non-zero series");
        let degenerate = compute_acf_with(&zeros, Normalization::ZeroLag);

        // Assert
        assert_eq!(acf[2], 1.0);
        assert_relative_eq!(acf[1], 8.0 / 14.0, epsilon = TOL);
        assert_relative_eq!(acf[0], 3.0 / 14.0, epsilon = TOL);
        assert_eq!(
            degenerate,
            Err(ACFError::UndefinedNormalization { method: Normalization::ZeroLag })
        );
    }

    #[test]
    // Purpose
    // -------
    // `Normalization::None` via `compute_acf_with` matches `compute_acf(_, false)`
    // and `full_autocorrelation`.
    //
    // Given
    // -----
    // - A mixed-sign series.
    //
    // Expect
    // ------
    // - All three paths return identical arrays.
    fn compute_acf_with_none_matches_raw_paths() {
        // Arrange
        let series = wiggly_series();

        // Act
        let via_flag = compute_acf(&series, false).expect("finite input");
        let via_enum = compute_acf_with(&series, Normalization::None).expect("finite input");
        let raw = full_autocorrelation(&series);

        // Assert
        assert_eq!(via_flag, via_enum);
        assert_eq!(via_flag, raw);
    }

    #[test]
    // Purpose
    // -------
    // Check the helper accessors.
    //
    // Given
    // -----
    // - n = 1 and n = 4 for `lags`, [1, 2, 3, 4] for the moments.
    //
    // Expect
    // ------
    // - lags(1) == [0], lags(4) == [−3..=3], lags(0) fails.
    // - mean == 2.5, population variance == 1.25 (divisor n).
    fn helpers_lags_mean_and_variance() {
        // Arrange
        let series = [1.0_f64, 2.0, 3.0, 4.0];

        // Act & Assert
        assert_eq!(lags(1).expect("n = 1").to_vec(), vec![0]);
        assert_eq!(lags(4).expect("n = 4").to_vec(), vec![-3, -2, -1, 0, 1, 2, 3]);
        assert_eq!(lags(0), Err(ACFError::EmptySeries));
        assert_relative_eq!(mean(&series).expect("finite"), 2.5, epsilon = TOL);
        assert_relative_eq!(population_variance(&series).expect("finite"), 1.25, epsilon = TOL);
        assert!(full_autocorrelation(&[]).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Check the flag mapping and display names of `Normalization`.
    //
    // Given
    // -----
    // - Both boolean flags and every variant.
    //
    // Expect
    // ------
    // - true ↦ Variance, false ↦ None; stable lower-case names.
    fn normalization_flag_mapping_and_display() {
        assert_eq!(Normalization::from_flag(true), Normalization::Variance);
        assert_eq!(Normalization::from_flag(false), Normalization::None);
        assert!(!Normalization::None.is_normalized());
        assert!(Normalization::ZeroLag.is_normalized());
        assert_eq!(Normalization::None.to_string(), "none");
        assert_eq!(Normalization::Variance.to_string(), "variance");
        assert_eq!(Normalization::ZeroLag.to_string(), "zero-lag");
    }
}
