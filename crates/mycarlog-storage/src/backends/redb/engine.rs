//! The redb storage engine.

use std::path::Path;

use redb::backends::InMemoryBackend;
use redb::Database;

use super::transaction::RedbTransaction;
use crate::engine::{StorageEngine, StorageError, StorageResult};

/// A storage engine backed by a redb database.
pub struct RedbEngine {
    db: Database,
}

impl RedbEngine {
    /// Open or create a database file at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    ///
    /// Nothing is persisted; all data is lost when the engine is
    /// dropped. Intended for tests.
    pub fn in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(InMemoryBackend::new())?;
        Ok(Self { db })
    }
}

impl StorageEngine for RedbEngine {
    type Transaction<'a> = RedbTransaction;

    fn begin_read(&self) -> StorageResult<Self::Transaction<'_>> {
        Ok(RedbTransaction::Read(self.db.begin_read()?))
    }

    fn begin_write(&self) -> StorageResult<Self::Transaction<'_>> {
        Ok(RedbTransaction::Write(self.db.begin_write()?))
    }
}

impl From<redb::DatabaseError> for StorageError {
    fn from(err: redb::DatabaseError) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<redb::TransactionError> for StorageError {
    fn from(err: redb::TransactionError) -> Self {
        Self::Transaction(err.to_string())
    }
}

impl From<redb::TableError> for StorageError {
    fn from(err: redb::TableError) -> Self {
        match err {
            redb::TableError::TableDoesNotExist(name) => Self::TableNotFound(name),
            other => Self::Backend(other.to_string()),
        }
    }
}

impl From<redb::StorageError> for StorageError {
    fn from(err: redb::StorageError) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<redb::CommitError> for StorageError {
    fn from(err: redb::CommitError) -> Self {
        Self::Commit(err.to_string())
    }
}
