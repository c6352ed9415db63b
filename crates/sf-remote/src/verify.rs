//! Table existence verification

use crate::traits::RowCounter;
use sf_core::report::{TableReport, TableStatus, VerifyReport};

/// Probe each expected table with a zero-row count query.
///
/// A successful count maps to `Exists(rows)`; any error maps to `Missing`.
/// The remote service conflates "table does not exist" with other query
/// errors, so no finer distinction is attempted. Read-only: the probe never
/// mutates data. One blocking call per table, no retries.
pub async fn verify_tables(table_names: &[String], querier: &dyn RowCounter) -> VerifyReport {
    let mut tables = Vec::with_capacity(table_names.len());

    for name in table_names {
        let status = match querier.count_rows(name).await {
            Ok(rows) => TableStatus::Exists { rows },
            Err(err) => {
                log::debug!("count query for {name} failed: {err}");
                TableStatus::Missing
            }
        };
        tables.push(TableReport {
            name: name.clone(),
            status,
        });
    }

    VerifyReport { tables }
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
