//! generation — synthetic input series for ACF demonstrations.
//!
//! Purpose
//! -------
//! Supply finite, ordered series of real numbers to the ACF calculator. The
//! calculator is agnostic to where its input comes from; this module only
//! provides the scaled Gaussian random walk used to contrast normalized and
//! unnormalized ACFs across different scales.
//!
//! Key behaviors
//! -------------
//! - [`RandomWalk`] validates its configuration once at construction and then
//!   generates deterministic series for a given seed.
//! - [`cumulative_sum`] is exposed for callers that bring their own steps.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use rust_acf::autocorrelation::compute_acf;
//! use rust_acf::generation::RandomWalk;
//!
//! let series = RandomWalk::new(100, 10.0, 42).unwrap().generate();
//! let acf = compute_acf(series.as_slice().unwrap(), true).unwrap();
//! assert_eq!(acf.len(), 199);
//! ```

pub mod errors;
pub mod random_walk;

pub use self::errors::{GenerationError, GenerationResult};
pub use self::random_walk::{RandomWalk, cumulative_sum};
