//! Error types for sf-core

use thiserror::Error;

/// Core error type for Sqlferry
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Required connection setting absent from both flags and environment
    #[error("[E001] Missing connection setting: set {var} or pass {flag}")]
    ConfigMissing { var: String, flag: String },

    /// E002: Connection setting present but unusable
    #[error("[E002] Invalid connection setting: {message}")]
    ConfigInvalid { message: String },

    /// E003: Migration file could not be read
    #[error("[E003] Failed to read migration file {path}: {message}")]
    MigrationRead { path: String, message: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
