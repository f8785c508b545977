//! casebench command-line entry point

use anyhow::Result;
use casebench_cli::commands::Commands;
use clap::Parser;

/// Benchmark classic algorithms across best/worst/average input shapes
#[derive(Debug, Parser)]
#[command(name = "casebench", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => args.execute(),
        Commands::Curves(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
