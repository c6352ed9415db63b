//! sf-core - Core library for Sqlferry
//!
//! This crate provides the shared building blocks used across all Sqlferry
//! components: naive SQL statement splitting, apply/verify summary types,
//! and connection configuration resolved from flags and the environment.

pub mod config;
pub mod error;
pub mod report;
pub mod split;

pub use config::{RemoteConfig, DEFAULT_EXPECTED_TABLES};
pub use error::{CoreError, CoreResult};
pub use report::{
    ApplySummary, MigrationState, StatementFailure, TableReport, TableStatus, VerifyReport,
};
pub use split::{split_statements, Statement};
