//! Error types for the `MyCarLog` store.

use thiserror::Error;

/// Errors that can occur when using the logbook store.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Config(String),

    /// A storage error occurred.
    #[error("storage error: {0}")]
    Storage(#[from] mycarlog_storage::StorageError),

    /// A transaction error occurred.
    #[error("transaction error: {0}")]
    Transaction(#[from] mycarlog_core::TransactionError),

    /// The store could not be opened.
    #[error("failed to open store: {0}")]
    Open(String),

    /// A record required by the operation does not exist.
    #[error("record not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a config error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// A specialized `Result` type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
