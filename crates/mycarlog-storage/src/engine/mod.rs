//! Storage engine traits and abstractions.
//!
//! - [`StorageEngine`] - Entry point for creating transactions
//! - [`Transaction`] - Atomic operations over logical tables
//! - [`Cursor`] - Forward iteration over key-value pairs
//!
//! All operations return [`StorageResult<T>`], an alias for
//! `Result<T, StorageError>`.

mod error;
mod traits;

pub use error::{StorageError, StorageResult};
pub use traits::{Cursor, CursorResult, KeyValue, StorageEngine, Transaction};
