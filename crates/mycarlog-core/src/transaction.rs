//! Transaction error types shared between the store and its callers.

use thiserror::Error;

/// Errors that can occur inside a store transaction.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The transaction was already committed or rolled back.
    #[error("transaction already completed")]
    AlreadyCompleted,

    /// A write was attempted on a read-only transaction.
    #[error("transaction is read-only")]
    ReadOnly,

    /// A record failed to encode or decode.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A record required by the operation does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The underlying storage engine failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized `Result` type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
