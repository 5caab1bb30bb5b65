//! Excerptor command-line entry point

use anyhow::Result;
use clap::Parser;
use excerptor_cli::commands::Commands;

/// Cut long texts into readable excerpts at sentence and paragraph breaks
#[derive(Debug, Parser)]
#[command(name = "excerptor", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
