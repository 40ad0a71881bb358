//! Configuration management and validation.
//!
//! Provides the parser configuration: header search window sizes and the
//! default substituted for missing anchor coordinates.

use crate::constants::{
    DEFAULT_ANCHOR_COORDINATE, DEFAULT_DATA_HEADER_WINDOW, DEFAULT_POSITION_HEADER_WINDOW,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for a ranging log parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Number of leading rows searched for the positions header
    pub position_header_window: usize,

    /// Number of rows after the positions value row searched for the data header
    pub data_header_window: usize,

    /// Value used for an anchor coordinate that is missing or not numeric
    pub anchor_coordinate_default: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            position_header_window: DEFAULT_POSITION_HEADER_WINDOW,
            data_header_window: DEFAULT_DATA_HEADER_WINDOW,
            anchor_coordinate_default: DEFAULT_ANCHOR_COORDINATE,
        }
    }
}

impl ParserConfig {
    /// Set the positions header search window
    pub fn with_position_header_window(mut self, rows: usize) -> Self {
        self.position_header_window = rows;
        self
    }

    /// Set the data header search window
    pub fn with_data_header_window(mut self, rows: usize) -> Self {
        self.data_header_window = rows;
        self
    }

    /// Set the default anchor coordinate
    pub fn with_anchor_coordinate_default(mut self, value: f64) -> Self {
        self.anchor_coordinate_default = value;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.position_header_window == 0 {
            return Err(Error::configuration(
                "position_header_window must be at least 1 row",
            ));
        }

        if self.data_header_window == 0 {
            return Err(Error::configuration(
                "data_header_window must be at least 1 row",
            ));
        }

        if !self.anchor_coordinate_default.is_finite() {
            return Err(Error::configuration(format!(
                "anchor_coordinate_default must be finite, got {}",
                self.anchor_coordinate_default
            )));
        }

        debug!("Parser configuration validated: {:?}", self);
        Ok(())
    }
}
