use super::*;

fn report(statuses: &[(&str, TableStatus)]) -> VerifyReport {
    VerifyReport {
        tables: statuses
            .iter()
            .map(|(name, status)| TableReport {
                name: name.to_string(),
                status: *status,
            })
            .collect(),
    }
}

#[test]
fn test_summary_counts_sum_to_total() {
    let mut summary = ApplySummary::new(3);
    summary.record_applied();
    summary.record_skipped();
    summary.record_failure("BAD SQL".to_string(), "syntax error".to_string());

    assert_eq!(summary.applied + summary.skipped + summary.failed, summary.total);
    assert_eq!(summary.failures.len(), 1);
    assert!(!summary.is_clean());
}

#[test]
fn test_summary_clean_without_failures() {
    let mut summary = ApplySummary::new(2);
    summary.record_applied();
    summary.record_skipped();
    assert!(summary.is_clean());
    assert!(summary.failures.is_empty());
}

#[test]
fn test_state_complete() {
    let report = report(&[
        ("t1", TableStatus::Exists { rows: 0 }),
        ("t2", TableStatus::Exists { rows: 7 }),
    ]);
    assert_eq!(report.state(), MigrationState::Complete);
    assert_eq!(report.existing_count(), 2);
}

#[test]
fn test_state_partial() {
    let report = report(&[
        ("t1", TableStatus::Exists { rows: 5 }),
        ("t2", TableStatus::Missing),
    ]);
    assert_eq!(report.state(), MigrationState::Partial);
}

#[test]
fn test_state_not_started() {
    let report = report(&[("t1", TableStatus::Missing), ("t2", TableStatus::Missing)]);
    assert_eq!(report.state(), MigrationState::NotStarted);
}

#[test]
fn test_state_empty_set_is_not_started() {
    let report = report(&[]);
    assert_eq!(report.state(), MigrationState::NotStarted);
}

#[test]
fn test_table_status_display() {
    assert_eq!(TableStatus::Exists { rows: 5 }.to_string(), "exists (rows: 5)");
    assert_eq!(TableStatus::Missing.to_string(), "missing");
}

#[test]
fn test_report_serializes_in_supplied_order() {
    let report = report(&[
        ("drill_runs", TableStatus::Missing),
        ("drill_scenarios", TableStatus::Exists { rows: 1 }),
    ]);
    let json = serde_json::to_string(&report).unwrap();
    let runs_pos = json.find("drill_runs").unwrap();
    let scenarios_pos = json.find("drill_scenarios").unwrap();
    assert!(runs_pos < scenarios_pos);
}
