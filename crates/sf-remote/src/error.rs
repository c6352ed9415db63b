//! Error types for sf-remote

use thiserror::Error;

/// Remote database operation errors
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport failure (R001)
    #[error("[R001] Request to remote database failed: {0}")]
    Transport(String),

    /// SQL execution rejected by the remote service (R002)
    #[error("[R002] SQL execution failed: {0}")]
    Execution(String),

    /// Response was not in the expected shape (R003)
    #[error("[R003] Malformed response from remote service: {0}")]
    MalformedResponse(String),
}

/// Result type alias for RemoteError
pub type RemoteResult<T> = Result<T, RemoteError>;

impl RemoteError {
    /// True when the failure only says the target already exists.
    ///
    /// The remote service does not expose structured error codes, so this
    /// inspects the lowercased message for "already exists" / "duplicate".
    /// Re-applying an idempotent migration trips these constantly; the
    /// applier counts them as skipped rather than failed. Kept as the single
    /// classification point so the matched strings can be updated in one
    /// place if the service's wording changes.
    pub fn is_idempotent_conflict(&self) -> bool {
        let message = self.to_string().to_lowercase();
        message.contains("already exists") || message.contains("duplicate")
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Transport(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
