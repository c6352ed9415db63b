//! sf-remote - Remote database layer for Sqlferry
//!
//! This crate provides the `SqlExecutor` and `RowCounter` traits, the
//! Supabase REST backend that implements them, and the sequential
//! apply/verify drivers built on top of the traits.

pub mod apply;
pub mod error;
pub mod supabase;
pub mod traits;
pub mod verify;

pub use apply::{apply_statements, StatementOutcome};
pub use error::{RemoteError, RemoteResult};
pub use supabase::SupabaseBackend;
pub use traits::{RowCounter, SqlExecutor};
pub use verify::verify_tables;
