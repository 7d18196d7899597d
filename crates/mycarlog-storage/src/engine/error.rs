//! Error types for storage operations.

use std::io;

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backend reported an error opening or accessing the database.
    #[error("backend error: {0}")]
    Backend(String),

    /// The transaction could not be started or is in an invalid state.
    #[error("transaction error: {0}")]
    Transaction(String),

    /// The commit failed; no changes from this transaction are visible.
    #[error("commit error: {0}")]
    Commit(String),

    /// The logical table does not exist yet.
    ///
    /// Read paths treat this as an empty table; it is an error only for
    /// operations that require the table to be present.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// A write was attempted on a read-only transaction.
    #[error("transaction is read-only")]
    ReadOnly,
}

/// A specialized `Result` type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
