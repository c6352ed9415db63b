//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use serde::Serialize;
use sf_core::report::{TableStatus, VerifyReport};
use sf_core::{CoreError, RemoteConfig, DEFAULT_EXPECTED_TABLES};
use sf_remote::SupabaseBackend;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Resolve connection settings from CLI flags and the environment.
///
/// Fails before any remote call when a required setting is missing.
pub(crate) fn load_remote_config(global: &GlobalArgs) -> Result<RemoteConfig> {
    let config = RemoteConfig::resolve(global.url.as_deref(), global.service_key.as_deref())?;
    Ok(config)
}

/// Create the Supabase backend from resolved settings.
pub(crate) fn create_backend(config: &RemoteConfig) -> Result<SupabaseBackend> {
    SupabaseBackend::new(config).context("Failed to create remote client")
}

/// Expected table list: the comma-separated override when given, the
/// drill-system defaults otherwise.
pub(crate) fn resolve_expected_tables(tables_arg: &Option<String>) -> Vec<String> {
    match tables_arg {
        Some(arg) => arg
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        None => DEFAULT_EXPECTED_TABLES.iter().map(|t| t.to_string()).collect(),
    }
}

/// Read the migration file into memory. Read once; the content is discarded
/// after splitting.
pub(crate) fn read_migration_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        CoreError::MigrationRead {
            path: path.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Print per-table status lines and the aggregate migration state.
pub(crate) fn print_verify_report(report: &VerifyReport) {
    for table in &report.tables {
        let mark = match table.status {
            TableStatus::Exists { .. } => "\u{2713}",
            TableStatus::Missing => "\u{2717}",
        };
        println!("  {} {}: {}", mark, table.name, table.status);
    }
    println!(
        "\nMigration state: {} ({}/{} tables exist)",
        report.state(),
        report.existing_count(),
        report.tables.len()
    );
}

/// Print manual application options when the migration has not fully landed.
pub(crate) fn print_manual_fallback(config: &RemoteConfig, migration_file: Option<&str>) {
    println!("\nTo finish the migration manually:");
    println!("  1. Dashboard SQL editor: {}/project/_/sql", config.url);
    if let Some(project_ref) = config.project_ref() {
        println!(
            "  2. CLI: supabase link --project-ref {} && supabase db push",
            project_ref
        );
    }
    let file = migration_file.unwrap_or("<migration file>");
    println!("  3. psql: psql \"$DATABASE_URL\" -f {}", file);
}

/// Serialize `data` as pretty-printed JSON and write it to `path`.
///
/// Creates any missing parent directories before writing.
pub(crate) fn write_json_results<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create results directory")?;
    }
    let json = serde_json::to_string_pretty(data).context("Failed to serialize results")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
