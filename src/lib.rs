//! xlsx2csv - Convert XLSX spreadsheets to CSV
//!
//! Reads the active sheet of an XLSX workbook row by row and writes each
//! row as one CSV record. Cells with no stored value become empty fields,
//! and formula cells are passed through as their stored formula text
//! rather than recomputed.
//!
//! # Example
//!
//! ```no_run
//! use xlsx2csv::Converter;
//!
//! let converter = Converter::new("report.xlsx");
//! let stats = converter.convert("report.csv")?;
//!
//! println!("{} rows written", stats.rows);
//! # Ok::<(), xlsx2csv::ConvertError>(())
//! ```

pub mod cli;
pub mod converter;
pub mod error;

// Re-export commonly used types
pub use converter::{ConvertStats, Converter};
pub use error::{ConvertError, ConvertResult};
