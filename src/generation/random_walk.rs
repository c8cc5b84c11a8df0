//! generation::random_walk — seeded Gaussian random walks.
//!
//! Purpose
//! -------
//! Produce synthetic input series for the ACF calculator: the cumulative sum
//! of independent N(0, 1) draws, multiplied by a constant scale factor.
//!
//! Key behaviors
//! -------------
//! - [`RandomWalk::generate`] seeds a `StdRng` from the configured seed, so
//!   the same configuration always yields the same series.
//! - [`RandomWalk::generate_with`] draws from a caller-supplied generator,
//!   which lets several walks share one random stream.
//!
//! Conventions
//! -----------
//! - Draws use `statrs::distribution::Normal` sampled through `rand`.
//!   The stream differs from NumPy's Mersenne Twister, so a seed reproduces
//!   series within this crate only.

use ndarray::Array1;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;

use crate::generation::errors::{GenerationError, GenerationResult};

/// RandomWalk — configuration of a scaled Gaussian random walk.
///
/// Fields
/// ------
/// - `len`: `usize`
///   Number of observations, ≥ 1.
/// - `scale`: `f64`
///   Multiplier applied to the whole walk; finite and non-zero.
/// - `seed`: `u64`
///   Seed of the `StdRng` used by [`generate`](Self::generate).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RandomWalk {
    len: usize,
    scale: f64,
    seed: u64,
}

impl RandomWalk {
    /// Build a validated random-walk configuration.
    ///
    /// Errors
    /// ------
    /// - `GenerationError::ZeroLength` when `len == 0`.
    /// - `GenerationError::InvalidScale(scale)` when `scale` is zero or not
    ///   finite. Negative scales are allowed.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_acf::generation::RandomWalk;
    /// let walk = RandomWalk::new(100, 10.0, 42).unwrap();
    /// assert_eq!(walk.generate().len(), 100);
    /// assert!(RandomWalk::new(0, 1.0, 42).is_err());
    /// ```
    pub fn new(len: usize, scale: f64, seed: u64) -> GenerationResult<Self> {
        if len == 0 {
            return Err(GenerationError::ZeroLength);
        }
        if !scale.is_finite() || scale == 0.0 {
            return Err(GenerationError::InvalidScale(scale));
        }
        Ok(RandomWalk { len, scale, seed })
    }

    /// Unit-scale random walk.
    pub fn standard(len: usize, seed: u64) -> GenerationResult<Self> {
        RandomWalk::new(len, 1.0, seed)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the walk from a fresh `StdRng` seeded with `self.seed`.
    pub fn generate(&self) -> Array1<f64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generate the walk from `rng`, ignoring `self.seed`.
    ///
    /// Consumes exactly `len` standard normal draws from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        let normal = Normal::new(0.0, 1.0).expect("mean = 0, std_dev = 1");
        let steps: Vec<f64> = (0..self.len).map(|_| normal.sample(rng)).collect();
        cumulative_sum(&steps) * self.scale
    }
}

/// Running sum yₜ = Σ_{s ≤ t} xₛ.
///
/// Examples
/// --------
/// ```rust
/// # use rust_acf::generation::cumulative_sum;
/// assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]).to_vec(), vec![1.0, 3.0, 6.0]);
/// ```
pub fn cumulative_sum(data: &[f64]) -> Array1<f64> {
    let mut acc = 0.0;
    Array1::from_iter(data.iter().map(|&x| {
        acc += x;
        acc
    }))
}
