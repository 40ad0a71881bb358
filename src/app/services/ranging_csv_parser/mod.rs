//! CSV parser for radio-ranging experiment logs
//!
//! A ranging log is a loosely structured CSV export: some title rows, a
//! positions header followed by a single row of anchor coordinates, then an
//! observation header followed by one row per (packet, node) measurement.
//! Neither block sits at a fixed line, and columns are found by name.
//!
//! ## Architecture
//!
//! The parser runs four stages strictly in order:
//! - [`row_loader`] - CSV reading and blank-row filtering
//! - [`block_locator`] - bounded-window search for the two header rows
//! - [`position_block`] - anchor and ground-truth extraction from the value row
//! - [`record_parser`] - per-row observation parsing with row-level rejection
//!
//! supported by:
//! - [`column_mapping`] - normalized header name to column index lookup
//! - [`field_parsers`] - typed field access with explicit defaults
//! - [`stats`] - parse statistics and result structures
//!
//! ## Usage
//!
//! ```no_run
//! use ranging_log::app::services::ranging_csv_parser::RangingLogParser;
//!
//! # fn example() -> ranging_log::Result<()> {
//! let parser = RangingLogParser::default();
//! let result = parser.parse_file_with_stats(std::path::Path::new("run_01.csv"))?;
//!
//! println!("Stored {} observations from {} data rows",
//!          result.stats.observations_stored,
//!          result.stats.data_rows);
//! # Ok(())
//! # }
//! ```

pub mod block_locator;
pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod position_block;
pub mod record_parser;
pub mod row_loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::RangingLogParser;
pub use record_parser::RowRejection;
pub use stats::{ParseResult, ParseStats};
