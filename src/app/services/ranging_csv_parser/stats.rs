//! Parsing statistics and result structures for ranging log processing
//!
//! This module provides types for tracking where the header blocks were found
//! and how many data rows were accepted or skipped.

use serde::{Deserialize, Serialize};

use crate::app::models::RangingLog;
use crate::constants::MAX_RECORDED_ROW_ERRORS;

/// Parsing result with the parsed log and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub log: RangingLog,

    pub stats: ParseStats,
}

/// Statistics for one parse pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Rows remaining after blank rows were dropped
    pub rows_loaded: usize,

    /// Filtered row index of the positions header
    pub positions_header_row: usize,

    /// Filtered row index of the positions value row
    pub positions_value_row: usize,

    /// Filtered row index of the data header
    pub data_header_row: usize,

    /// Rows after the data header
    pub data_rows: usize,

    /// Rows that produced an observation (including ones later overwritten)
    pub rows_accepted: usize,

    /// Distinct (packet, node) observations in the result
    pub observations_stored: usize,

    /// Accepted rows that replaced an earlier observation for the same pair
    pub observations_overwritten: usize,

    /// Rows shorter than the data header
    pub rows_skipped_short: usize,

    /// Rows with a non-numeric rssi, snr, timestamp or ticks
    pub rows_skipped_invalid: usize,

    /// Anchor position columns that fell back to the default value
    pub defaulted_position_columns: Vec<String>,

    /// Skip reasons for debugging, one per skipped row up to
    /// [`MAX_RECORDED_ROW_ERRORS`]
    pub errors: Vec<String>,

    /// Skipped rows whose reason was not kept in `errors`
    pub errors_omitted: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skip reason, keeping only the first messages
    pub fn record_error(&mut self, message: String) {
        if self.errors.len() < MAX_RECORDED_ROW_ERRORS {
            self.errors.push(message);
        } else {
            self.errors_omitted += 1;
        }
    }

    /// Total rows skipped for any reason
    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped_short + self.rows_skipped_invalid
    }

    /// Calculate success rate as a percentage of data rows
    pub fn success_rate(&self) -> f64 {
        if self.data_rows == 0 {
            0.0
        } else {
            (self.rows_accepted as f64 / self.data_rows as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}
