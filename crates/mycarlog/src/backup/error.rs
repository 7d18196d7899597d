//! Error types for backup and restore operations.

use std::io;

use thiserror::Error;

/// Errors that can occur during backup and restore operations.
///
/// Every public entry point of the backup engine returns these as
/// values; the UI layer inspects the variant and renders a message, it
/// never has to catch anything.
#[derive(Debug, Error)]
pub enum BackupError {
    /// An I/O error occurred while reading or writing a backup file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The user dismissed the file picker. Non-fatal; no retry.
    #[error("file selection cancelled")]
    Cancelled,

    /// The file is not valid JSON.
    #[error("backup file is corrupted: {0}")]
    Malformed(String),

    /// The JSON parsed but is not a backup document (missing required
    /// fields or arrays).
    #[error("invalid backup file format: {0}")]
    InvalidFormat(String),

    /// The backup was written by an incompatible format version.
    #[error("unsupported backup version: {0}")]
    UnsupportedVersion(String),

    /// A referenced record does not exist (e.g. the vehicle to back up).
    #[error("not found: {0}")]
    NotFound(String),

    /// A record failed to serialize into the snapshot document.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A transaction error occurred; the whole restore was rolled back.
    #[error("transaction error: {0}")]
    Transaction(#[from] mycarlog_core::TransactionError),

    /// A storage error occurred; the whole restore was rolled back.
    #[error("storage error: {0}")]
    Storage(#[from] mycarlog_storage::StorageError),

    /// The platform could not present a share sheet. The backup file
    /// itself was written and remains on disk.
    #[error("sharing unavailable: {0}")]
    ShareUnavailable(String),

    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BackupError {
    /// Create an invalid format error.
    #[must_use]
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a serialization error from a serde_json error.
    #[must_use]
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for backup operations.
pub type BackupResult<T> = Result<T, BackupError>;

impl From<crate::Error> for BackupError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Storage(e) => Self::Storage(e),
            crate::Error::Transaction(e) => Self::Transaction(e),
            crate::Error::NotFound(msg) => Self::NotFound(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}
