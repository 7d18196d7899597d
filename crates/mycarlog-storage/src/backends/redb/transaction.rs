//! Redb transaction and cursor implementations.

use std::ops::Bound;

use redb::ReadableTable;

use super::tables::{self, DATA_TABLE};
use crate::engine::{Cursor, CursorResult, KeyValue, StorageError, Transaction};

/// A transaction over the redb backend.
///
/// Read and write transactions share one type so the engine trait's
/// associated transaction type covers both. Write operations on the read
/// variant fail with [`StorageError::ReadOnly`].
pub enum RedbTransaction {
    /// A snapshot read transaction.
    Read(redb::ReadTransaction),
    /// A serialized write transaction.
    Write(redb::WriteTransaction),
}

impl RedbTransaction {
    /// Collect every pair of one logical table, in key order, with the
    /// table prefix stripped.
    ///
    /// Ranges are materialized up front: logbook tables hold at most a
    /// few thousand rows, and collecting sidesteps the borrow of the
    /// underlying redb table.
    fn collect_table(&self, table: &str) -> Result<Vec<KeyValue>, StorageError> {
        let (start, end) = tables::table_range(table);
        let bounds = (Bound::Included(start.as_slice()), Bound::Excluded(end.as_slice()));

        let mut entries = Vec::new();
        match self {
            Self::Read(tx) => {
                let data = tx.open_table(DATA_TABLE)?;
                for item in data.range::<&[u8]>(bounds)? {
                    let (key, value) = item?;
                    if let Some((_, raw)) = tables::decode_key(key.value()) {
                        entries.push((raw.to_vec(), value.value().to_vec()));
                    }
                }
            }
            Self::Write(tx) => {
                let data = tx.open_table(DATA_TABLE)?;
                for item in data.range::<&[u8]>(bounds)? {
                    let (key, value) = item?;
                    if let Some((_, raw)) = tables::decode_key(key.value()) {
                        entries.push((raw.to_vec(), value.value().to_vec()));
                    }
                }
            }
        }
        Ok(entries)
    }
}

impl Transaction for RedbTransaction {
    type Cursor<'a> = RedbCursor;

    fn get(&self, table: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        let encoded = tables::encode_key(table, key);
        match self {
            Self::Read(tx) => {
                let data = match tx.open_table(DATA_TABLE) {
                    Ok(data) => data,
                    // No write has ever happened: everything reads as absent.
                    Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
                    Err(err) => return Err(err.into()),
                };
                Ok(data.get(encoded.as_slice())?.map(|guard| guard.value().to_vec()))
            }
            Self::Write(tx) => {
                let data = tx.open_table(DATA_TABLE)?;
                let result = data.get(encoded.as_slice())?.map(|guard| guard.value().to_vec());
                Ok(result)
            }
        }
    }

    fn put(&mut self, table: &str, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        let encoded = tables::encode_key(table, key);
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut data = tx.open_table(DATA_TABLE)?;
                data.insert(encoded.as_slice(), value)?;
                Ok(())
            }
        }
    }

    fn delete(&mut self, table: &str, key: &[u8]) -> Result<bool, StorageError> {
        let encoded = tables::encode_key(table, key);
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut data = tx.open_table(DATA_TABLE)?;
                let removed = data.remove(encoded.as_slice())?.is_some();
                Ok(removed)
            }
        }
    }

    fn scan(&self, table: &str) -> Result<Self::Cursor<'_>, StorageError> {
        match self {
            Self::Read(tx) => {
                if let Err(redb::TableError::TableDoesNotExist(_)) = tx.open_table(DATA_TABLE) {
                    return Err(StorageError::TableNotFound(table.to_owned()));
                }
            }
            Self::Write(_) => {}
        }
        Ok(RedbCursor::new(self.collect_table(table)?))
    }

    fn clear_table(&mut self, table: &str) -> Result<usize, StorageError> {
        if self.is_read_only() {
            return Err(StorageError::ReadOnly);
        }
        let keys: Vec<Vec<u8>> =
            self.collect_table(table)?.into_iter().map(|(key, _)| key).collect();

        let Self::Write(tx) = self else {
            return Err(StorageError::ReadOnly);
        };
        let mut data = tx.open_table(DATA_TABLE)?;
        for key in &keys {
            let encoded = tables::encode_key(table, key);
            data.remove(encoded.as_slice())?;
        }
        Ok(keys.len())
    }

    fn commit(self) -> Result<(), StorageError> {
        match self {
            // Read snapshots have nothing to make durable.
            Self::Read(_) => Ok(()),
            Self::Write(tx) => Ok(tx.commit()?),
        }
    }

    fn rollback(self) -> Result<(), StorageError> {
        match self {
            Self::Read(_) => Ok(()),
            Self::Write(tx) => Ok(tx.abort()?),
        }
    }

    fn is_read_only(&self) -> bool {
        matches!(self, Self::Read(_))
    }
}

/// A cursor over one logical table's pairs, materialized at creation.
pub struct RedbCursor {
    entries: std::vec::IntoIter<KeyValue>,
}

impl RedbCursor {
    fn new(entries: Vec<KeyValue>) -> Self {
        Self { entries: entries.into_iter() }
    }
}

impl Cursor for RedbCursor {
    fn next(&mut self) -> CursorResult {
        Ok(self.entries.next())
    }
}
