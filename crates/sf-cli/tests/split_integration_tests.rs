//! Integration tests for splitting a realistic migration file

use sf_core::split::split_statements;

const FIXTURE: &str = include_str!("fixtures/drill_system.sql");

#[test]
fn test_fixture_splits_into_expected_statement_count() {
    let statements = split_statements(FIXTURE);
    // Four tables plus three indexes.
    assert_eq!(statements.len(), 7);
}

#[test]
fn test_tables_come_before_their_indexes() {
    let statements = split_statements(FIXTURE);
    let runs_table = statements
        .iter()
        .position(|s| s.as_str().contains("CREATE TABLE IF NOT EXISTS drill_runs"))
        .unwrap();
    let runs_index = statements
        .iter()
        .position(|s| s.as_str().contains("idx_drill_runs_scenario"))
        .unwrap();
    assert!(runs_table < runs_index);
}

#[test]
fn test_no_fragment_is_a_comment_or_empty() {
    for statement in split_statements(FIXTURE) {
        assert!(!statement.as_str().is_empty());
        assert!(!statement.as_str().starts_with("--"));
    }
}

#[test]
fn test_every_expected_table_is_created() {
    let statements = split_statements(FIXTURE);
    for table in sf_core::DEFAULT_EXPECTED_TABLES {
        assert!(
            statements
                .iter()
                .any(|s| s.as_str().contains(&format!("CREATE TABLE IF NOT EXISTS {table}"))),
            "no CREATE statement for {table}"
        );
    }
}
