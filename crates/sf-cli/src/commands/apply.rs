//! Apply command: split the migration file, submit every statement, verify.

use anyhow::Result;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use sf_core::report::{ApplySummary, MigrationState, VerifyReport};
use sf_core::split::split_statements;
use sf_remote::{apply_statements, verify_tables, StatementOutcome};
use std::path::Path;
use std::time::Instant;

use crate::cli::{ApplyArgs, GlobalArgs};
use crate::commands::common::{
    create_backend, load_remote_config, print_manual_fallback, print_verify_report,
    read_migration_file, resolve_expected_tables, write_json_results,
};

/// JSON results envelope for an apply run.
#[derive(Debug, Serialize)]
struct ApplyResults<'a> {
    timestamp: DateTime<Utc>,
    elapsed_secs: f64,
    summary: &'a ApplySummary,
    verification: Option<&'a VerifyReport>,
}

pub(crate) async fn execute(args: &ApplyArgs, global: &GlobalArgs) -> Result<()> {
    let start = Instant::now();

    // Configuration problems are the only fatal errors; everything past this
    // point is best-effort and reported in the summary.
    let config = load_remote_config(global)?;
    match config.project_ref() {
        Some(project_ref) => println!("Connecting to project: {}", project_ref),
        None => println!("Connecting to {}", config.url),
    }
    if global.verbose {
        eprintln!("[verbose] URL: {}", config.url);
    }

    let raw_sql = read_migration_file(&args.file)?;
    if global.verbose {
        eprintln!(
            "[verbose] Migration file size: {} characters",
            raw_sql.len()
        );
    }

    let statements = split_statements(&raw_sql);
    if statements.is_empty() {
        println!("No executable statements in {}", args.file);
        return Ok(());
    }
    println!("Executing {} SQL statements...", statements.len());

    let backend = create_backend(&config)?;

    let progress = if !args.quiet {
        let pb = ProgressBar::new(statements.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let summary = apply_statements(&statements, &backend, |index, outcome| {
        if let StatementOutcome::Failed(error) = outcome {
            let line = format!("  \u{2717} statement {}: {}", index + 1, error);
            match &progress {
                Some(pb) => pb.println(line),
                None => println!("{}", line),
            }
        }
        if let Some(pb) = &progress {
            pb.set_position((index + 1) as u64);
        }
    })
    .await;

    if let Some(pb) = &progress {
        pb.finish_with_message("Complete");
    }

    println!(
        "Applied {}/{} statements ({} already present, {} failed)",
        summary.applied, summary.total, summary.skipped, summary.failed
    );
    for failure in &summary.failures {
        println!("  \u{2717} {}", failure.statement);
        println!("    {}", failure.error);
    }

    let verification = if args.no_verify {
        None
    } else {
        println!("\nVerifying tables...");
        let tables = resolve_expected_tables(&args.tables);
        let report = verify_tables(&tables, &backend).await;
        print_verify_report(&report);
        if report.state() != MigrationState::Complete {
            print_manual_fallback(&config, Some(&args.file));
        }
        Some(report)
    };

    if let Some(path) = &args.results_path {
        let results = ApplyResults {
            timestamp: Utc::now(),
            elapsed_secs: start.elapsed().as_secs_f64(),
            summary: &summary,
            verification: verification.as_ref(),
        };
        write_json_results(Path::new(path), &results)?;
        if global.verbose {
            eprintln!("[verbose] Results written to {}", path);
        }
    }

    // Best-effort policy: statement failures are reported above but the
    // process still ends normally.
    Ok(())
}
