//! Summary command implementation
//!
//! Reports anchor positions, ground truth, packet and node counts, and the
//! parse statistics of one ranging log.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};

use super::shared::{parse_input, setup_logging};
use crate::app::models::{Anchor, AnchorId, Position};
use crate::app::services::ranging_csv_parser::{ParseResult, ParseStats};
use crate::cli::args::{OutputFormat, SummaryArgs};

/// Machine-readable summary
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub file: String,
    pub anchors: &'a BTreeMap<AnchorId, Anchor>,
    pub ground_truth: Option<Position>,
    pub packets: usize,
    pub observations: usize,
    pub nodes: BTreeMap<&'a str, usize>,
    pub stats: &'a ParseStats,
}

impl<'a> Summary<'a> {
    pub fn new(file: &str, result: &'a ParseResult) -> Self {
        let mut nodes: BTreeMap<&str, usize> = BTreeMap::new();
        for packet in result.log.packets.values() {
            for node_id in packet.keys() {
                *nodes.entry(node_id.as_str()).or_default() += 1;
            }
        }

        Summary {
            file: file.to_string(),
            anchors: &result.log.anchors,
            ground_truth: result.log.ground_truth,
            packets: result.log.packet_count(),
            observations: result.log.observation_count(),
            nodes,
            stats: &result.stats,
        }
    }
}

/// Summary command runner
pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    setup_logging(&args.options)?;

    let result = parse_input(&args.options)
        .with_context(|| format!("Failed to parse {}", args.options.file.display()))?;
    let summary = Summary::new(&args.options.file.display().to_string(), &result);

    let output = match args.output_format {
        OutputFormat::Human => {
            render_human_summary(&summary).context("Failed to render summary")?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Render the summary as human-readable text
pub fn render_human_summary(summary: &Summary<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let stats = summary.stats;

    writeln!(out, "{} {}", "Ranging log:".bold(), summary.file)?;

    writeln!(out, "\n{}", "Anchors".bold().underline())?;
    for (id, anchor) in summary.anchors {
        writeln!(out, "  {:<4} x = {:>10.3}  y = {:>10.3}", id, anchor.x, anchor.y)?;
    }

    match summary.ground_truth {
        Some(position) => writeln!(
            out,
            "  {:<4} x = {:>10.3}  y = {:>10.3}  {}",
            "EN0",
            position.x,
            position.y,
            "(ground truth)".green()
        )?,
        None => writeln!(out, "  {}", "No ground-truth position".yellow())?,
    }

    writeln!(out, "\n{}", "Observations".bold().underline())?;
    writeln!(out, "  Packets:       {}", summary.packets)?;
    writeln!(out, "  Observations:  {}", summary.observations)?;
    for (node_id, count) in &summary.nodes {
        writeln!(out, "  {:<14} {} packets", format!("{}:", node_id), count)?;
    }

    writeln!(out, "\n{}", "Parse statistics".bold().underline())?;
    writeln!(
        out,
        "  Rows loaded:   {} (positions header row {}, data header row {})",
        stats.rows_loaded, stats.positions_header_row, stats.data_header_row
    )?;

    let accepted = format!("{:.1}% accepted", stats.success_rate());
    if stats.is_successful() {
        writeln!(out, "  Data rows:     {} ({})", stats.data_rows, accepted)?;
    } else {
        writeln!(
            out,
            "  Data rows:     {} ({})",
            stats.data_rows,
            accepted.yellow()
        )?;
    }

    if stats.observations_overwritten > 0 {
        writeln!(out, "  Overwritten:   {}", stats.observations_overwritten)?;
    }

    let skipped = stats.rows_skipped();
    if skipped > 0 {
        writeln!(
            out,
            "  {} {} ({} short, {} non-numeric)",
            "Skipped:".yellow(),
            skipped,
            stats.rows_skipped_short,
            stats.rows_skipped_invalid
        )?;
    }

    if !stats.defaulted_position_columns.is_empty() {
        writeln!(
            out,
            "  {} {}",
            "Defaulted position columns:".yellow(),
            stats.defaulted_position_columns.join(", ")
        )?;
    }

    Ok(out)
}
