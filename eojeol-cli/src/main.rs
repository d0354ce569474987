//! eojeol command-line entry point

use anyhow::Result;
use clap::Parser;
use eojeol_cli::commands::Commands;

/// Korean eojeol tokenizers and POS pattern matching
#[derive(Debug, Parser)]
#[command(name = "eojeol", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
