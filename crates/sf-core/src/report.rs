//! Summary types for migration application and verification

use serde::Serialize;

/// Detail recorded for a statement that failed for a non-idempotent reason.
#[derive(Debug, Clone, Serialize)]
pub struct StatementFailure {
    /// The statement, truncated to its first 100 characters
    pub statement: String,
    /// Error message reported by the remote service
    pub error: String,
}

/// Aggregated outcome of a best-effort apply pass.
///
/// Invariant: `applied + skipped + failed == total` once every statement has
/// been processed — a failure never stops the remaining sequence.
#[derive(Debug, Clone, Serialize)]
pub struct ApplySummary {
    /// Number of statements submitted
    pub total: usize,
    /// Statements the remote service accepted
    pub applied: usize,
    /// Statements rejected only because their effect already exists
    pub skipped: usize,
    /// Statements rejected for any other reason
    pub failed: usize,
    /// Details for each failed statement, in submission order
    pub failures: Vec<StatementFailure>,
}

impl ApplySummary {
    /// Create an empty summary for a run over `total` statements.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            applied: 0,
            skipped: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }

    /// Record a statement the remote service accepted.
    pub fn record_applied(&mut self) {
        self.applied += 1;
    }

    /// Record a statement skipped because its effect already exists.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Record a statement that failed for a reportable reason.
    pub fn record_failure(&mut self, statement_preview: String, error: String) {
        self.failed += 1;
        self.failures.push(StatementFailure {
            statement: statement_preview,
            error,
        });
    }

    /// True when no reportable failures were recorded.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Status of one expected table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum TableStatus {
    /// The table answered a zero-row count query
    Exists {
        /// Row count reported by the remote service
        rows: u64,
    },
    /// The count query errored; the remote service does not distinguish
    /// "table does not exist" from other query failures
    Missing,
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableStatus::Exists { rows } => write!(f, "exists (rows: {})", rows),
            TableStatus::Missing => write!(f, "missing"),
        }
    }
}

/// Overall migration state derived from per-table statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationState {
    /// Every expected table exists
    Complete,
    /// Some but not all expected tables exist
    Partial,
    /// No expected table exists
    NotStarted,
}

impl std::fmt::Display for MigrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MigrationState::Complete => write!(f, "complete"),
            MigrationState::Partial => write!(f, "partial"),
            MigrationState::NotStarted => write!(f, "not started"),
        }
    }
}

/// Status of a single expected table, by name.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    /// Table name as supplied by the caller
    pub name: String,
    /// Whether the table answered the count query
    pub status: TableStatus,
}

/// Result of a verification pass over the expected table set.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Per-table statuses, in the order the tables were supplied
    pub tables: Vec<TableReport>,
}

impl VerifyReport {
    /// Number of expected tables confirmed to exist.
    pub fn existing_count(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| matches!(t.status, TableStatus::Exists { .. }))
            .count()
    }

    /// Aggregate state: all exist → Complete, none → NotStarted, otherwise
    /// Partial. An empty table set counts as NotStarted.
    pub fn state(&self) -> MigrationState {
        let existing = self.existing_count();
        if existing == 0 {
            MigrationState::NotStarted
        } else if existing == self.tables.len() {
            MigrationState::Complete
        } else {
            MigrationState::Partial
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
