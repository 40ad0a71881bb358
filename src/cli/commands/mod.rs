//! Command implementations for the ranging log CLI
//!
//! Each command is implemented in its own module:
//! - `summary`: anchor, ground truth and parse statistics report
//! - `dump`: full observation listing

pub mod dump;
pub mod shared;
pub mod summary;

use anyhow::Result;

use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Returns `Ok(false)` when no subcommand was given.
pub fn run(args: Args) -> Result<bool> {
    match args.command {
        Some(Commands::Summary(summary_args)) => summary::run_summary(&summary_args)?,
        Some(Commands::Dump(dump_args)) => dump::run_dump(&dump_args)?,
        None => return Ok(false),
    }
    Ok(true)
}
