//! Dump command implementation
//!
//! Prints the full parsed log, or a single packet, as JSON or as a table.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::fmt::{self, Write};

use super::shared::{parse_input, setup_logging};
use crate::app::models::{PacketGroups, RangingLog};
use crate::cli::args::{DumpArgs, OutputFormat};

/// Dump command runner
pub fn run_dump(args: &DumpArgs) -> Result<()> {
    setup_logging(&args.options)?;

    let result = parse_input(&args.options)
        .with_context(|| format!("Failed to parse {}", args.options.file.display()))?;

    let log = match &args.packet {
        Some(packet_id) => select_packet(result.log, packet_id)?,
        None => result.log,
    };

    let output = match args.output_format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&log).context("Failed to serialize observations")?
        }
        OutputFormat::Human => {
            render_human_packets(&log.packets).context("Failed to render observations")?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Keep only one packet in the log
pub fn select_packet(mut log: RangingLog, packet_id: &str) -> Result<RangingLog> {
    let key = packet_id.trim();
    let Some(nodes) = log.packets.remove(key) else {
        bail!("Packet '{}' not found in log", key);
    };

    log.packets = PacketGroups::from([(key.to_string(), nodes)]);
    Ok(log)
}

/// Render packets as an aligned table
pub fn render_human_packets(packets: &PacketGroups) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let heading = format!(
        "{:<16} {:<8} {:>10} {:>8} {:>14} {:>10}",
        "packet_id", "node_id", "rssi", "snr", "timestamp", "ticks"
    );
    writeln!(out, "{}", heading.bold())?;

    for (packet_id, nodes) in packets {
        for (node_id, observation) in nodes {
            writeln!(
                out,
                "{:<16} {:<8} {:>10.2} {:>8.2} {:>14} {:>10}",
                packet_id,
                node_id,
                observation.rssi,
                observation.snr,
                observation.timestamp,
                observation.ticks
            )?;
        }
    }

    Ok(out)
}
