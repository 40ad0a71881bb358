use clap::Parser;
use ranging_log::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(true) => process::exit(0),
        Ok(false) => {
            show_help_and_commands();
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Ranging Log - radio-ranging experiment CSV inspector");
    println!("====================================================");
    println!();
    println!("Reads a ranging experiment CSV export and reports the anchor positions,");
    println!("ground-truth position and per-packet node observations it contains.");
    println!();
    println!("USAGE:");
    println!("    ranging-log <COMMAND> <FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Print anchors, ground truth, packet counts and parse statistics");
    println!("    dump        Print every parsed observation (JSON or table)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    ranging-log summary run_07.csv");
    println!("    ranging-log summary run_07.csv --format json");
    println!("    ranging-log dump run_07.csv --packet p42 --format human");
    println!("    ranging-log dump run_07.csv --data-window 20 -vv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ranging-log <COMMAND> --help");
}
