//! Core storage engine traits.
//!
//! This module defines the traits storage backends implement:
//!
//! - [`StorageEngine`] - The entry point for storage operations
//! - [`Transaction`] - Atomic read/write operations over logical tables
//! - [`Cursor`] - Forward iteration over key-value pairs in key order

use super::StorageError;

/// A key-value pair returned by cursor operations.
pub type KeyValue = (Vec<u8>, Vec<u8>);

/// Result type for cursor operations that return a key-value pair.
pub type CursorResult = Result<Option<KeyValue>, StorageError>;

/// A storage engine that provides transactional key-value operations
/// over logical tables.
///
/// Implementations must be thread-safe (`Send + Sync`). Write
/// transactions are serialized; read transactions see a consistent
/// snapshot.
pub trait StorageEngine: Send + Sync {
    /// The transaction type for this engine.
    type Transaction<'a>: Transaction
    where
        Self: 'a;

    /// Begin a read-only transaction.
    fn begin_read(&self) -> Result<Self::Transaction<'_>, StorageError>;

    /// Begin a read-write transaction.
    fn begin_write(&self) -> Result<Self::Transaction<'_>, StorageError>;
}

/// A transaction providing atomic key-value operations.
///
/// Write transactions must be explicitly committed; dropping one without
/// committing rolls back every change made inside it.
pub trait Transaction {
    /// The cursor type for iteration.
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Get a value by key from a table.
    ///
    /// Returns `Ok(None)` if the key (or the whole table) does not exist.
    fn get(&self, table: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Put a key-value pair into a table, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadOnly`] on a read-only transaction.
    fn put(&mut self, table: &str, key: &[u8], value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key from a table.
    ///
    /// Returns `Ok(true)` if the key existed and was deleted.
    fn delete(&mut self, table: &str, key: &[u8]) -> Result<bool, StorageError>;

    /// Create a cursor over all key-value pairs of a table, in key order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::TableNotFound`] if the table has never
    /// been written.
    fn scan(&self, table: &str) -> Result<Self::Cursor<'_>, StorageError>;

    /// Delete every key in a table, returning how many were removed.
    fn clear_table(&mut self, table: &str) -> Result<usize, StorageError>;

    /// Commit the transaction, making all changes durable.
    fn commit(self) -> Result<(), StorageError>;

    /// Roll back the transaction, discarding all changes.
    ///
    /// Implicit when a write transaction is dropped without committing.
    fn rollback(self) -> Result<(), StorageError>;

    /// Whether this is a read-only transaction.
    fn is_read_only(&self) -> bool;
}

/// A cursor for forward iteration over key-value pairs.
pub trait Cursor {
    /// Move to the next key-value pair, or `None` at the end.
    fn next(&mut self) -> CursorResult;
}
