use super::*;
use crate::error::{RemoteError, RemoteResult};
use async_trait::async_trait;
use sf_core::split::split_statements;
use std::sync::Mutex;

/// Executor that pops a scripted response per call and records what it saw.
struct ScriptedExecutor {
    responses: Mutex<Vec<RemoteResult<()>>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    fn new(responses: Vec<RemoteResult<()>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlExecutor for ScriptedExecutor {
    async fn exec(&self, sql: &str) -> RemoteResult<()> {
        self.seen.lock().unwrap().push(sql.to_string());
        self.responses.lock().unwrap().remove(0)
    }

    fn backend_type(&self) -> &'static str {
        "scripted"
    }
}

fn exists_err() -> RemoteResult<()> {
    Err(RemoteError::Execution(
        r#"relation "drill_runs" already exists"#.to_string(),
    ))
}

#[tokio::test]
async fn test_all_statements_applied() {
    let statements = split_statements("CREATE TABLE a (id int); CREATE TABLE b (id int);");
    let executor = ScriptedExecutor::new(vec![Ok(()), Ok(())]);

    let summary = apply_statements(&statements, &executor, |_, _| {}).await;

    assert_eq!(summary.total, 2);
    assert_eq!(summary.applied, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn test_statements_submitted_in_order() {
    let statements = split_statements("CREATE TABLE t (id int); CREATE INDEX i ON t (id);");
    let executor = ScriptedExecutor::new(vec![Ok(()), Ok(())]);

    apply_statements(&statements, &executor, |_, _| {}).await;

    assert_eq!(
        executor.seen(),
        vec!["CREATE TABLE t (id int)", "CREATE INDEX i ON t (id)"]
    );
}

#[tokio::test]
async fn test_already_exists_counts_as_skipped_not_failed() {
    let statements = split_statements("CREATE TABLE t (id int);");
    let executor = ScriptedExecutor::new(vec![exists_err()]);

    let summary = apply_statements(&statements, &executor, |_, _| {}).await;

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);
    assert!(summary.failures.is_empty());
}

#[tokio::test]
async fn test_failure_does_not_abort_remaining_statements() {
    let statements = split_statements("A; B; C;");
    let executor = ScriptedExecutor::new(vec![
        Ok(()),
        Err(RemoteError::Execution("syntax error".to_string())),
        Ok(()),
    ]);

    let summary = apply_statements(&statements, &executor, |_, _| {}).await;

    assert_eq!(executor.seen().len(), 3);
    assert_eq!(summary.applied, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(
        summary.applied + summary.skipped + summary.failed,
        summary.total
    );
}

#[tokio::test]
async fn test_failure_records_preview_and_error() {
    let long = format!("CREATE TABLE t ({})", "x int, ".repeat(40));
    let statements = split_statements(&format!("{long};"));
    let executor = ScriptedExecutor::new(vec![Err(RemoteError::Execution(
        "permission denied".to_string(),
    ))]);

    let summary = apply_statements(&statements, &executor, |_, _| {}).await;

    let failure = &summary.failures[0];
    assert!(failure.statement.chars().count() <= 103);
    assert!(failure.statement.ends_with("..."));
    assert!(failure.error.contains("permission denied"));
}

#[tokio::test]
async fn test_observer_sees_every_statement_once() {
    let statements = split_statements("A; B; C;");
    let executor = ScriptedExecutor::new(vec![Ok(()), exists_err(), Ok(())]);

    let mut observed = Vec::new();
    apply_statements(&statements, &executor, |index, outcome| {
        observed.push((index, outcome.clone()));
    })
    .await;

    assert_eq!(
        observed,
        vec![
            (0, StatementOutcome::Applied),
            (1, StatementOutcome::SkippedIdempotent),
            (2, StatementOutcome::Applied),
        ]
    );
}

#[tokio::test]
async fn test_rerun_of_idempotent_script_is_all_skips() {
    // Second run of a create-if-missing style script: every statement now
    // trips the already-exists classification.
    let statements = split_statements("A; B; C; D;");
    let executor =
        ScriptedExecutor::new(vec![exists_err(), exists_err(), exists_err(), exists_err()]);

    let summary = apply_statements(&statements, &executor, |_, _| {}).await;

    assert_eq!(summary.applied, 0);
    assert_eq!(summary.skipped, 4);
    assert!(summary.is_clean());
}

#[tokio::test]
async fn test_empty_statement_list() {
    let executor = ScriptedExecutor::new(vec![]);
    let summary = apply_statements(&[], &executor, |_, _| {}).await;
    assert_eq!(summary.total, 0);
    assert!(summary.is_clean());
}
