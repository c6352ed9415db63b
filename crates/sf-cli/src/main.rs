//! Sqlferry CLI - apply a SQL migration to a hosted database and verify it

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{apply, split, verify};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Apply(args) => apply::execute(args, &cli.global).await,
        cli::Commands::Verify(args) => verify::execute(args, &cli.global).await,
        cli::Commands::Split(args) => split::execute(args, &cli.global).await,
    }
}
