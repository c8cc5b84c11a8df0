//! report::table — tabular rendering of correlograms.
//!
//! Purpose
//! -------
//! Render one or more correlograms that share a lag axis side by side, either
//! as machine-readable CSV covering every lag or as an aligned text window
//! around lag 0 for terminal output.
//!
//! Invariants & assumptions
//! ------------------------
//! - All columns must come from series of the same length; otherwise the
//!   writers fail with [`ReportError::LagMismatch`] before writing anything.
//! - Rows are ordered by ascending lag.
//!
//! Conventions
//! -----------
//! - CSV is encoded by the `csv` crate: fields containing commas, quotes or
//!   line breaks are quoted, and every record has the same field count.
//! - CSV values use Rust's shortest round-trip `f64` formatting.

use std::io::Write;

use crate::autocorrelation::Correlogram;
use crate::report::errors::{ReportError, ReportResult};

/// A named correlogram column.
pub type Column<'a> = (&'a str, &'a Correlogram);

/// Write every lag of `columns` as CSV with header `lag,<name>,...`.
///
/// Errors
/// ------
/// - `ReportError::NoColumns` when `columns` is empty.
/// - `ReportError::LagMismatch` when the series lengths differ.
/// - `ReportError::Io` when writing to `out` fails.
/// - `ReportError::Csv` when the encoder rejects a record.
///
/// Examples
/// --------
/// ```rust
/// use rust_acf::autocorrelation::{Correlogram, Normalization};
/// use rust_acf::report::write_table;
///
/// let c = Correlogram::compute(&[1.0, 2.0, 3.0], Normalization::None).unwrap();
/// let mut out = Vec::new();
/// write_table(&mut out, &[("raw", &c)]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "lag,raw\n-2,3\n-1,8\n0,14\n1,8\n2,3\n");
/// ```
pub fn write_table<W: Write>(out: &mut W, columns: &[Column<'_>]) -> ReportResult<()> {
    let series_len = check_columns(columns)?;
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(std::iter::once("lag").chain(columns.iter().map(|(name, _)| *name)))?;

    let max_lag = (series_len - 1) as isize;
    for (i, lag) in (-max_lag..=max_lag).enumerate() {
        let values = columns.iter().map(|(_, correlogram)| correlogram.values()[i].to_string());
        writer.write_record(std::iter::once(lag.to_string()).chain(values))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write an aligned text table of the lags in [−half_width, half_width].
///
/// `half_width` is clamped to the largest available lag.
///
/// Errors
/// ------
/// - Same as [`write_table`].
pub fn write_window<W: Write>(
    out: &mut W, columns: &[Column<'_>], half_width: usize,
) -> ReportResult<()> {
    let series_len = check_columns(columns)?;
    let max_lag = (series_len - 1) as isize;
    let half = half_width.min(series_len - 1) as isize;

    write!(out, "{:>6}", "lag")?;
    for (name, _) in columns {
        write!(out, " {name:>18}")?;
    }
    writeln!(out)?;

    for lag in -half..=half {
        write!(out, "{lag:>6}")?;
        for (_, correlogram) in columns {
            let value = correlogram.values()[(lag + max_lag) as usize];
            write!(out, " {value:>18.6}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Check that `columns` is non-empty and shares one lag axis; return the
/// common series length.
fn check_columns(columns: &[Column<'_>]) -> ReportResult<usize> {
    let (_, first) = columns.first().ok_or(ReportError::NoColumns)?;
    let expected = first.series_len();

    for (name, correlogram) in columns {
        if correlogram.series_len() != expected {
            return Err(ReportError::LagMismatch {
                column: (*name).to_string(),
                expected,
                found: correlogram.series_len(),
            });
        }
    }
    Ok(expected)
}
