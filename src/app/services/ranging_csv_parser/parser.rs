//! Core ranging log parser implementation
//!
//! This module provides the main parser orchestration: row loading, header
//! location, position extraction and observation aggregation, run in order.

use csv::StringRecord;
use std::collections::btree_map::Entry;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, trace};

use super::block_locator::{locate_data_header, locate_positions_block};
use super::position_block::extract_positions;
use super::record_parser::{DataColumns, RowRejection, parse_observation_record};
use super::row_loader::{load_rows, read_rows};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{PacketGroups, RangingLog};
use crate::config::ParserConfig;
use crate::{Error, FormatError, Result};

/// Path reported in errors for input that did not come from a file
const IN_MEMORY_SOURCE: &str = "<memory>";

/// Parser for ranging log CSV files
///
/// Holds only its configuration; every call returns freshly owned results, so
/// one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RangingLogParser {
    config: ParserConfig,
}

impl RangingLogParser {
    /// Create a parser with a validated configuration
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a ranging log file
    pub fn parse_file(&self, file_path: &Path) -> Result<RangingLog> {
        Ok(self.parse_file_with_stats(file_path)?.log)
    }

    /// Parse a ranging log file and return parse statistics alongside the log
    pub fn parse_file_with_stats(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing ranging log: {}", file_path.display());

        let rows = load_rows(file_path)?;
        self.parse_rows(&rows)
    }

    /// Parse ranging log content from any reader
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParseResult> {
        let rows = read_rows(reader).map_err(|e| Error::csv_read(IN_MEMORY_SOURCE, e))?;
        self.parse_rows(&rows)
    }

    /// Parse ranging log content held in a string
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        self.parse_reader(content.as_bytes())
    }

    /// Parse already loaded, blank-filtered rows
    pub fn parse_rows(&self, rows: &[StringRecord]) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        stats.rows_loaded = rows.len();

        let positions = locate_positions_block(rows, self.config.position_header_window)?;
        stats.positions_header_row = positions.header.row_index;
        stats.positions_value_row = positions.value_row;

        let position_values = extract_positions(
            &positions.header.mapping,
            &rows[positions.value_row],
            self.config.anchor_coordinate_default,
        );
        stats.defaulted_position_columns = position_values
            .defaulted_columns
            .iter()
            .map(|column| column.to_string())
            .collect();

        let data_header =
            locate_data_header(rows, positions.value_row, self.config.data_header_window)?;
        stats.data_header_row = data_header.row_index;

        // The locator only accepts rows holding every required column.
        let columns =
            DataColumns::resolve(&data_header.mapping).ok_or(FormatError::DataHeaderNotFound {
                start: data_header.row_index,
                end: data_header.row_index + 1,
            })?;

        let packets = aggregate_observations(
            &rows[data_header.row_index + 1..],
            data_header.row_index + 1,
            &columns,
            &mut stats,
        );
        stats.observations_stored = packets.values().map(|nodes| nodes.len()).sum();

        info!(
            "Parsed {} observations across {} packets from {} data rows ({} skipped)",
            stats.observations_stored,
            packets.len(),
            stats.data_rows,
            stats.rows_skipped()
        );

        let log = RangingLog {
            anchors: position_values.anchors,
            ground_truth: position_values.ground_truth,
            packets,
        };

        Ok(ParseResult { log, stats })
    }
}

/// Group data rows by packet id and node id
///
/// `first_row` is the filtered row index of `data_rows[0]`, used in skip
/// messages. A later row for the same (packet, node) pair replaces the earlier
/// observation.
fn aggregate_observations(
    data_rows: &[StringRecord],
    first_row: usize,
    columns: &DataColumns,
    stats: &mut ParseStats,
) -> PacketGroups {
    let mut packets = PacketGroups::new();

    for (offset, record) in data_rows.iter().enumerate() {
        let row_index = first_row + offset;
        stats.data_rows += 1;

        let parsed = match parse_observation_record(record, columns) {
            Ok(parsed) => parsed,
            Err(rejection) => {
                match rejection {
                    RowRejection::ShortRow { .. } => stats.rows_skipped_short += 1,
                    RowRejection::InvalidNumber { .. } => stats.rows_skipped_invalid += 1,
                }
                debug!("Skipped row {}: {}", row_index, rejection);
                stats.record_error(format!("Row {}: {}", row_index, rejection));
                continue;
            }
        };

        stats.rows_accepted += 1;
        trace!(
            "Row {}: packet '{}' node '{}' {:?}",
            row_index, parsed.packet_id, parsed.node_id, parsed.observation
        );

        let nodes = packets.entry(parsed.packet_id).or_default();
        match nodes.entry(parsed.node_id) {
            Entry::Occupied(mut existing) => {
                stats.observations_overwritten += 1;
                existing.insert(parsed.observation);
            }
            Entry::Vacant(slot) => {
                slot.insert(parsed.observation);
            }
        }
    }

    packets
}
