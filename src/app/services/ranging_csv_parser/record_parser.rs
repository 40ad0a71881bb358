//! Individual observation record parsing for ranging logs
//!
//! A data row either yields a complete [`ParsedRecord`] or is rejected as a
//! whole. Rejections are row-level conditions that the parser counts and skips;
//! they never fail the file.

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{parse_f64, parse_i64};
use crate::app::models::Observation;
use crate::constants::data_columns;

/// Reason a data row was skipped
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowRejection {
    #[error("row has {found} fields but the data header has {expected}")]
    ShortRow { found: usize, expected: usize },

    #[error("column '{column}' value '{value}' is not a valid {expected}")]
    InvalidNumber {
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Resolved indices of the required data columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataColumns {
    pub node_id: usize,
    pub packet_id: usize,
    pub rssi: usize,
    pub snr: usize,
    pub timestamp: usize,
    pub ticks: usize,

    /// Width of the data header; shorter rows are rejected
    pub width: usize,
}

impl DataColumns {
    /// Resolve the required columns, or `None` if any is missing
    pub fn resolve(mapping: &ColumnMapping) -> Option<Self> {
        Some(DataColumns {
            node_id: mapping.get_index(data_columns::NODE_ID)?,
            packet_id: mapping.get_index(data_columns::PACKET_ID)?,
            rssi: mapping.get_index(data_columns::RSSI)?,
            snr: mapping.get_index(data_columns::SNR)?,
            timestamp: mapping.get_index(data_columns::TIMESTAMP)?,
            ticks: mapping.get_index(data_columns::TICKS)?,
            width: mapping.width,
        })
    }
}

/// One accepted data row
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    /// Trimmed, case preserved
    pub packet_id: String,

    /// Trimmed, upper-cased
    pub node_id: String,

    pub observation: Observation,
}

/// Parse a single observation record from a data row
pub fn parse_observation_record(
    record: &StringRecord,
    columns: &DataColumns,
) -> Result<ParsedRecord, RowRejection> {
    if record.len() < columns.width {
        return Err(RowRejection::ShortRow {
            found: record.len(),
            expected: columns.width,
        });
    }

    let node_id = field(record, columns.node_id).trim().to_uppercase();
    let packet_id = field(record, columns.packet_id).trim().to_string();

    let observation = Observation {
        rssi: required_f64(record, columns.rssi, data_columns::RSSI)?,
        snr: required_f64(record, columns.snr, data_columns::SNR)?,
        timestamp: required_i64(record, columns.timestamp, data_columns::TIMESTAMP)?,
        ticks: required_i64(record, columns.ticks, data_columns::TICKS)?,
    };

    Ok(ParsedRecord {
        packet_id,
        node_id,
        observation,
    })
}

// Width is checked before any field access, so every resolved index is in range.
fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}

fn required_f64(
    record: &StringRecord,
    index: usize,
    column: &'static str,
) -> Result<f64, RowRejection> {
    let value = field(record, index);
    parse_f64(value).ok_or_else(|| RowRejection::InvalidNumber {
        column,
        value: value.to_string(),
        expected: "number",
    })
}

fn required_i64(
    record: &StringRecord,
    index: usize,
    column: &'static str,
) -> Result<i64, RowRejection> {
    let value = field(record, index);
    parse_i64(value).ok_or_else(|| RowRejection::InvalidNumber {
        column,
        value: value.to_string(),
        expected: "integer",
    })
}
