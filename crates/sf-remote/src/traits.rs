//! Remote endpoint trait definitions

use crate::error::RemoteResult;
use async_trait::async_trait;

/// Remote SQL execution endpoint.
///
/// Accepts one statement at a time; implementations must be Send + Sync for
/// async operation. Passed explicitly into the apply driver so tests can
/// substitute a scripted fake.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Submit a single SQL statement for execution
    async fn exec(&self, sql: &str) -> RemoteResult<()>;

    /// Backend identifier for logging
    fn backend_type(&self) -> &'static str;
}

/// Remote row-count query endpoint.
///
/// Used by verification to probe table existence with a read-only, zero-row
/// fetch. Must never mutate data.
#[async_trait]
pub trait RowCounter: Send + Sync {
    /// Count rows in a table without fetching any
    async fn count_rows(&self, table: &str) -> RemoteResult<u64>;
}
