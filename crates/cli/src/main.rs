/// Entry point for the scriptlens CLI, a static analyser for transaction output scripts.
///
/// This module parses command-line arguments and dispatches to subcommands for decoding,
/// counting signature operations, classifying, or summarising a script. It initializes logging
/// and handles the main execution flow.
use clap::Parser;
use scriptlens_cli::commands::{Cmd, Command};
use tracing_subscriber::EnvFilter;

/// Command-line interface for scriptlens.
#[derive(Parser)]
#[command(name = "scriptlens")]
#[command(about = "scriptlens: static analysis of transaction scripts")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Log decoding details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()
}
