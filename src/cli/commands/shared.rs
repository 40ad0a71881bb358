//! Shared components for CLI commands
//!
//! Logging setup and the parse step used by every command.

use crate::app::services::ranging_csv_parser::{ParseResult, RangingLogParser};
use crate::cli::args::ParseOptions;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(options: &ParseOptions) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = options.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Validate the options and parse the input file
pub fn parse_input(options: &ParseOptions) -> Result<ParseResult> {
    options.validate()?;

    let parser = RangingLogParser::new(options.parser_config()?)?;
    debug!(
        "Searching {} rows for the positions header, {} rows for the data header",
        parser.config().position_header_window,
        parser.config().data_header_window
    );
    let result = parser.parse_file_with_stats(&options.file)?;

    info!(
        "{}: {} packets, {} observations",
        options.file.display(),
        result.log.packet_count(),
        result.log.observation_count()
    );

    Ok(result)
}
