//! Ranging Log Library
//!
//! A Rust library for reading CSV exports of radio-ranging / localization
//! experiments into typed in-memory structures.
//!
//! This library provides tools for:
//! - Loading CSV rows with blank separator rows removed
//! - Locating the anchor positions block and the observation data block by
//!   header name within bounded search windows
//! - Extracting anchor coordinates and an optional ground-truth position
//! - Grouping per-node radio observations (RSSI, SNR, timestamp, ticks) by packet
//! - Absorbing malformed data rows without failing the whole file
//!
//! ```no_run
//! use ranging_log::{AnchorId, parse_csv};
//!
//! # fn example() -> ranging_log::Result<()> {
//! let log = parse_csv("experiment.csv")?;
//! let gateway = log.anchor(AnchorId::Gw0);
//! println!("GW0 at ({}, {}), {} packets", gateway.x, gateway.y, log.packet_count());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod ranging_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    Anchor, AnchorId, NodeObservations, Observation, PacketGroups, Position, RangingLog,
};
pub use app::services::ranging_csv_parser::{ParseResult, ParseStats, RangingLogParser};
pub use config::ParserConfig;

/// Result type alias for the ranging log parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ranging log parsing operations
///
/// A parse either returns a complete log or one of these; no partial result
/// exists. Problems confined to a single data row never appear here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input file could not be opened for reading
    #[error("Cannot open '{}' for reading: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input (invalid UTF-8, broken quoting, I/O)
    #[error("CSV read error in '{}': {source}", path.display())]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required header block could not be located
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Name that is not one of the fixed anchors
    #[error("Unknown anchor '{name}' (expected GW0, AN0 or AN1)")]
    UnknownAnchor { name: String },
}

/// Structural problems with the layout of a ranging log
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error(
        "Positions header not found in the first {searched} rows (expected gw0_x,gw0_y,an0_x,an0_y,an1_x,an1_y,...)"
    )]
    PositionsHeaderNotFound { searched: usize },

    #[error("Positions value row missing after positions header at row {header_row}")]
    PositionsValueRowMissing { header_row: usize },

    #[error(
        "Data header not found in rows {start}..{end} (expected node_id,packet_id,rssi,snr,timestamp,ticks,...)"
    )]
    DataHeaderNotFound { start: usize, end: usize },
}

impl Error {
    /// Create a file access error for the given path
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV read error for the given path
    pub fn csv_read(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::CsvRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error comes from the layout of the file rather than access to it
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Parse a ranging log CSV file with the default configuration
pub fn parse_csv(path: impl AsRef<Path>) -> Result<RangingLog> {
    RangingLogParser::default().parse_file(path.as_ref())
}
