//! Verify command: probe the expected tables and report migration state.

use anyhow::Result;
use sf_core::report::MigrationState;
use sf_remote::verify_tables;

use crate::cli::{GlobalArgs, VerifyArgs};
use crate::commands::common::{
    create_backend, load_remote_config, print_manual_fallback, print_verify_report,
    resolve_expected_tables,
};

pub(crate) async fn execute(args: &VerifyArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_remote_config(global)?;
    match config.project_ref() {
        Some(project_ref) => println!("Connecting to project: {}", project_ref),
        None => println!("Connecting to {}", config.url),
    }

    let tables = resolve_expected_tables(&args.tables);
    if global.verbose {
        eprintln!("[verbose] Checking {} expected tables", tables.len());
    }

    let backend = create_backend(&config)?;
    let report = verify_tables(&tables, &backend).await;
    print_verify_report(&report);

    if report.state() != MigrationState::Complete {
        print_manual_fallback(&config, None);
    }

    // A verification gap is surfaced in the report, never as a hard failure.
    Ok(())
}
