//! Application constants for the ranging log parser
//!
//! This module contains the column names, search window sizes and default
//! values used throughout the parser.

// =============================================================================
// Header Search Windows
// =============================================================================

/// Number of leading (non-blank) rows searched for the positions header
pub const DEFAULT_POSITION_HEADER_WINDOW: usize = 10;

/// Number of rows after the positions value row searched for the data header
pub const DEFAULT_DATA_HEADER_WINDOW: usize = 10;

// =============================================================================
// Default Values
// =============================================================================

/// Coordinate substituted for a missing or unparsable anchor position value
pub const DEFAULT_ANCHOR_COORDINATE: f64 = 0.0;

/// Skip messages kept in `ParseStats::errors`; later skips are only counted
pub const MAX_RECORDED_ROW_ERRORS: usize = 100;

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names of the positions block (matched lower-cased and trimmed)
pub mod position_columns {
    pub const GW0_X: &str = "gw0_x";
    pub const GW0_Y: &str = "gw0_y";
    pub const AN0_X: &str = "an0_x";
    pub const AN0_Y: &str = "an0_y";
    pub const AN1_X: &str = "an1_x";
    pub const AN1_Y: &str = "an1_y";

    /// Ground-truth transmitter position (optional)
    pub const EN0_X: &str = "en0_x";
    pub const EN0_Y: &str = "en0_y";

    /// Names that must all appear in a row for it to count as the positions header
    pub const REQUIRED: &[&str] = &[GW0_X, GW0_Y, AN0_X, AN0_Y, AN1_X, AN1_Y];
}

/// Column names of the observation data block (matched lower-cased and trimmed)
pub mod data_columns {
    pub const NODE_ID: &str = "node_id";
    pub const PACKET_ID: &str = "packet_id";
    pub const RSSI: &str = "rssi";
    pub const SNR: &str = "snr";
    pub const TIMESTAMP: &str = "timestamp";
    pub const TICKS: &str = "ticks";

    /// Names that must all appear in a row for it to count as the data header
    pub const REQUIRED: &[&str] = &[NODE_ID, PACKET_ID, RSSI, SNR, TIMESTAMP, TICKS];
}

/// Default log filter target used by the CLI
pub const LOG_TARGET: &str = "ranging_log";
