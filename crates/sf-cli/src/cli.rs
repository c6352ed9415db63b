//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Sqlferry - apply a SQL migration file to a hosted database over its REST API
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hosted database URL (overrides SUPABASE_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Service-role key (overrides SUPABASE_SERVICE_ROLE_KEY)
    #[arg(long, global = true)]
    pub service_key: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a migration file statement by statement, then verify the tables
    Apply(ApplyArgs),

    /// Check which of the expected tables exist
    Verify(VerifyArgs),

    /// Preview how a migration file splits into statements (no remote calls)
    Split(SplitArgs),
}

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path to the migration SQL file
    pub file: String,

    /// Tables expected after the migration (comma-separated, default: drill tables)
    #[arg(short, long)]
    pub tables: Option<String>,

    /// Skip the post-apply verification pass
    #[arg(long)]
    pub no_verify: bool,

    /// Write a JSON results summary to this path
    #[arg(long)]
    pub results_path: Option<String>,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Tables expected to exist (comma-separated, default: drill tables)
    #[arg(short, long)]
    pub tables: Option<String>,
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Path to the migration SQL file
    pub file: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
