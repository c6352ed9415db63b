//! Best-effort sequential statement application

use crate::traits::SqlExecutor;
use sf_core::report::ApplySummary;
use sf_core::split::Statement;

/// Outcome of submitting one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    /// The remote service accepted the statement
    Applied,
    /// The statement failed only because its effect already exists
    SkippedIdempotent,
    /// The statement failed for a reportable reason
    Failed(String),
}

/// Submit each statement to the executor, strictly in order.
///
/// Later statements (indexes, constraints) may depend on earlier ones, so
/// there is no batching, reordering, or parallelism. Failures whose message
/// indicates the target already exists are counted as skipped; any other
/// failure is recorded (statement preview plus error) and the run continues
/// to the end — best-effort, no rollback. The caller decides what the
/// summary means.
///
/// `on_statement` is invoked after each statement with its index and
/// outcome, for progress reporting.
pub async fn apply_statements<F>(
    statements: &[Statement],
    executor: &dyn SqlExecutor,
    mut on_statement: F,
) -> ApplySummary
where
    F: FnMut(usize, &StatementOutcome),
{
    let mut summary = ApplySummary::new(statements.len());

    for (index, statement) in statements.iter().enumerate() {
        let outcome = match executor.exec(statement.as_str()).await {
            Ok(()) => {
                summary.record_applied();
                StatementOutcome::Applied
            }
            Err(err) if err.is_idempotent_conflict() => {
                log::debug!("statement {index} skipped: {err}");
                summary.record_skipped();
                StatementOutcome::SkippedIdempotent
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("statement {index} failed: {message}");
                summary.record_failure(statement.preview(), message.clone());
                StatementOutcome::Failed(message)
            }
        };
        on_statement(index, &outcome);
    }

    summary
}

#[cfg(test)]
#[path = "apply_test.rs"]
mod tests;
