//! report — rendering of correlograms for people and spreadsheets.
//!
//! Purpose
//! -------
//! Turn [`Correlogram`](crate::autocorrelation::Correlogram) values into
//! output: a full CSV table of every lag, an aligned text window around lag
//! 0, and one-line summaries. The ACF core never depends on this module.
//!
//! Key behaviors
//! -------------
//! - [`write_table`] and [`write_window`] render several correlograms that
//!   share one lag axis into any `std::io::Write` sink.
//! - [`summarize`] condenses a correlogram into a [`CorrelogramSummary`].
//!
//! Testing notes
//! -------------
//! - Writers are tested against in-memory `Vec<u8>` sinks and a sink that
//!   always fails.

pub mod errors;
pub mod summary;
pub mod table;

pub use self::errors::{ReportError, ReportResult};
pub use self::summary::{CorrelogramSummary, summarize};
pub use self::table::{Column, write_table, write_window};
