//! Store transaction handle with typed record operations.

use mycarlog_core::{EntityId, Record, TransactionError};
use mycarlog_storage::{Cursor, StorageError, Transaction};

/// Table holding id counters and other bookkeeping.
mod tables {
    pub const METADATA: &str = "metadata";
}

/// Metadata key for a collection's id counter: `next_id:<table>`.
fn next_id_key(table: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(8 + table.len());
    key.extend_from_slice(b"next_id:");
    key.extend_from_slice(table.as_bytes());
    key
}

/// A transaction handle with typed operations over the logbook
/// collections.
///
/// `StoreTransaction` wraps a storage transaction and provides generic
/// CRUD for any [`Record`] type. All operations issued through one
/// handle are atomic: they become visible together on [`commit`] or not
/// at all.
///
/// Dropping a handle without committing rolls back its changes.
///
/// [`commit`]: Self::commit
pub struct StoreTransaction<T: Transaction> {
    /// `None` after commit/rollback so `Drop` knows not to touch it.
    storage: Option<T>,
}

impl<T: Transaction> StoreTransaction<T> {
    pub(crate) fn new(storage: T) -> Self {
        Self { storage: Some(storage) }
    }

    fn storage(&self) -> Result<&T, TransactionError> {
        self.storage.as_ref().ok_or(TransactionError::AlreadyCompleted)
    }

    fn storage_mut(&mut self) -> Result<&mut T, TransactionError> {
        self.storage.as_mut().ok_or(TransactionError::AlreadyCompleted)
    }

    // ========================================================================
    // Record Operations
    // ========================================================================

    /// Get a record by its id. Returns `Ok(None)` if it does not exist.
    pub fn get<R: Record>(&self, id: EntityId) -> Result<Option<R>, TransactionError> {
        let storage = self.storage()?;
        let key = id.as_u64().to_be_bytes();

        match storage.get(R::table(), &key) {
            Ok(Some(bytes)) => decode(&bytes).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(storage_error_to_tx_error(e)),
        }
    }

    /// Insert a record, assigning it the next id of its collection.
    ///
    /// Returns the record with its assigned id stamped in.
    pub fn insert<R: Record>(&mut self, mut record: R) -> Result<R, TransactionError> {
        let id = self.next_id(R::table())?;
        record.set_id(id);
        self.put(&record)?;
        Ok(record)
    }

    /// Write a record under its existing id, replacing any prior value.
    pub fn put<R: Record>(&mut self, record: &R) -> Result<(), TransactionError> {
        if !record.id().is_assigned() {
            return Err(TransactionError::Internal(
                "record has no assigned id; use insert".to_owned(),
            ));
        }

        let bytes = encode(record)?;
        let key = record.id().as_u64().to_be_bytes();
        self.storage_mut()?
            .put(R::table(), &key, &bytes)
            .map_err(storage_error_to_tx_error)
    }

    /// Delete a record by id. Returns `true` if it existed.
    pub fn delete<R: Record>(&mut self, id: EntityId) -> Result<bool, TransactionError> {
        let key = id.as_u64().to_be_bytes();
        self.storage_mut()?.delete(R::table(), &key).map_err(storage_error_to_tx_error)
    }

    /// List all records of a collection in id order.
    ///
    /// A collection that has never been written reads as empty.
    pub fn list<R: Record>(&self) -> Result<Vec<R>, TransactionError> {
        let storage = self.storage()?;

        let mut cursor = match storage.scan(R::table()) {
            Ok(cursor) => cursor,
            Err(StorageError::TableNotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(storage_error_to_tx_error(e)),
        };

        let mut records = Vec::new();
        while let Some((_key, value)) = cursor.next().map_err(storage_error_to_tx_error)? {
            records.push(decode(&value)?);
        }
        Ok(records)
    }

    /// Count the records of a collection.
    pub fn count<R: Record>(&self) -> Result<usize, TransactionError> {
        Ok(self.list::<R>()?.len())
    }

    /// Delete every record of a collection, returning how many were
    /// removed. The id counter is left in place so later inserts never
    /// reuse an id.
    pub fn clear<R: Record>(&mut self) -> Result<usize, TransactionError> {
        match self.storage_mut()?.clear_table(R::table()) {
            Ok(count) => Ok(count),
            Err(StorageError::TableNotFound(_)) => Ok(0),
            Err(e) => Err(storage_error_to_tx_error(e)),
        }
    }

    /// Get the next id for a collection and increment the counter.
    fn next_id(&mut self, table: &str) -> Result<EntityId, TransactionError> {
        let storage = self.storage_mut()?;
        let key = next_id_key(table);

        let current = match storage.get(tables::METADATA, &key) {
            Ok(Some(bytes)) if bytes.len() == 8 => {
                let arr: [u8; 8] = bytes
                    .try_into()
                    .map_err(|_| TransactionError::Internal("invalid id counter".to_owned()))?;
                u64::from_be_bytes(arr)
            }
            Ok(_) => 1, // Ids start at 1; zero marks "unassigned".
            Err(e) => return Err(storage_error_to_tx_error(e)),
        };

        storage
            .put(tables::METADATA, &key, &(current + 1).to_be_bytes())
            .map_err(storage_error_to_tx_error)?;

        Ok(EntityId::new(current))
    }

    // ========================================================================
    // Transaction Lifecycle
    // ========================================================================

    /// Commit the transaction, making all changes durable.
    pub fn commit(mut self) -> Result<(), TransactionError> {
        let storage = self.storage.take().ok_or(TransactionError::AlreadyCompleted)?;
        storage.commit().map_err(storage_error_to_tx_error)
    }

    /// Roll back the transaction, discarding all changes.
    pub fn rollback(mut self) -> Result<(), TransactionError> {
        let storage = self.storage.take().ok_or(TransactionError::AlreadyCompleted)?;
        storage.rollback().map_err(storage_error_to_tx_error)
    }
}

impl<T: Transaction> Drop for StoreTransaction<T> {
    fn drop(&mut self) {
        // Not committed or rolled back: best-effort rollback, since Drop
        // cannot propagate errors.
        if let Some(storage) = self.storage.take() {
            let _ = storage.rollback();
        }
    }
}

fn encode<R: Record>(record: &R) -> Result<Vec<u8>, TransactionError> {
    bincode::serde::encode_to_vec(record, bincode::config::standard())
        .map_err(|e| TransactionError::Serialization(e.to_string()))
}

fn decode<R: Record>(bytes: &[u8]) -> Result<R, TransactionError> {
    bincode::serde::decode_from_slice(bytes, bincode::config::standard())
        .map(|(record, _)| record)
        .map_err(|e| TransactionError::Serialization(e.to_string()))
}

/// Convert a storage error to a transaction error.
fn storage_error_to_tx_error(err: StorageError) -> TransactionError {
    match err {
        StorageError::ReadOnly => TransactionError::ReadOnly,
        other => TransactionError::Storage(other.to_string()),
    }
}
