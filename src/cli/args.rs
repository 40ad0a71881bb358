//! Command-line argument definitions for the ranging log inspector
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use crate::constants::{DEFAULT_DATA_HEADER_WINDOW, DEFAULT_POSITION_HEADER_WINDOW};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ranging log inspector
///
/// Parses CSV exports of radio-ranging experiments and reports the anchor
/// positions, ground truth and per-packet observations they contain.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ranging-log",
    version,
    about = "Inspect radio-ranging experiment CSV logs",
    long_about = "Parses a ranging experiment CSV export: locates the anchor positions block and \
                  the observation data block by header name, then reports anchor coordinates, \
                  the optional ground-truth position and the observations grouped by packet."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print anchors, ground truth, packet counts and parse statistics
    Summary(SummaryArgs),
    /// Print every parsed observation
    Dump(DumpArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, clap::Args)]
pub struct ParseOptions {
    /// Ranging log CSV file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rows searched for the positions header
    #[arg(
        long = "position-window",
        value_name = "ROWS",
        default_value_t = DEFAULT_POSITION_HEADER_WINDOW,
        help = "Number of leading rows searched for the positions header"
    )]
    pub position_window: usize,

    /// Rows searched for the data header
    #[arg(
        long = "data-window",
        value_name = "ROWS",
        default_value_t = DEFAULT_DATA_HEADER_WINDOW,
        help = "Number of rows after the positions values searched for the data header"
    )]
    pub data_window: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub options: ParseOptions,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the dump command
#[derive(Debug, Clone, Parser)]
pub struct DumpArgs {
    #[command(flatten)]
    pub options: ParseOptions,

    /// Restrict output to one packet id
    #[arg(long = "packet", value_name = "ID", help = "Only print this packet")]
    pub packet: Option<String>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "json",
        help = "Output format for the observations"
    )]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl ParseOptions {
    /// Get log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the parser configuration from the window options
    pub fn parser_config(&self) -> Result<ParserConfig> {
        let config = ParserConfig::default()
            .with_position_header_window(self.position_window)
            .with_data_header_window(self.data_window);
        config.validate()?;
        Ok(config)
    }

    /// Validate the arguments before parsing
    pub fn validate(&self) -> Result<()> {
        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.file.display()
            )));
        }
        Ok(())
    }
}
