//! Main store interface.
//!
//! This module provides the [`Store`] struct, the entry point for
//! working with a `MyCarLog` logbook.
//!
//! # Examples
//!
//! ```
//! use mycarlog::Store;
//! use mycarlog_core::{EntityId, Shop};
//!
//! # fn main() -> mycarlog::Result<()> {
//! let store = Store::in_memory()?;
//!
//! // Atomic write through the closure wrapper
//! let shop = store.write(|tx| {
//!     Ok(tx.insert(Shop {
//!         id: EntityId::default(),
//!         name: "Main St Garage".to_owned(),
//!         created_at: 1_700_000_000_000,
//!     })?)
//! })?;
//!
//! let tx = store.begin_read()?;
//! assert!(tx.get::<Shop>(shop.id)?.is_some());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use mycarlog_storage::backends::redb::RedbTransaction;
use mycarlog_storage::backends::RedbEngine;
use mycarlog_storage::StorageEngine;

use crate::config::{Config, StoreBuilder};
use crate::error::{Error, Result};
use crate::transaction::StoreTransaction;

/// The main logbook store handle.
///
/// `Store` owns the storage engine and hands out transactions. Write
/// transactions are serialized by the engine; read transactions see a
/// consistent snapshot.
///
/// # Thread Safety
///
/// `Store` is `Send + Sync` and can be shared across threads.
pub struct Store {
    engine: RedbEngine,
}

impl Store {
    /// Open or create a store file at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        StoreBuilder::new().path(path.as_ref()).open()
    }

    /// Open an in-memory store.
    ///
    /// All data is lost when the store is dropped. Useful for tests.
    pub fn in_memory() -> Result<Self> {
        StoreBuilder::in_memory().open()
    }

    /// Start building a store with explicit options.
    #[must_use]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Open a store with the given configuration.
    ///
    /// This is typically called through [`StoreBuilder::open`].
    pub(crate) fn open_with_config(config: Config) -> Result<Self> {
        let engine = if config.in_memory {
            RedbEngine::in_memory().map_err(|e| Error::Open(e.to_string()))?
        } else {
            RedbEngine::open(&config.path).map_err(|e| Error::Open(e.to_string()))?
        };
        Ok(Self { engine })
    }

    /// Begin a write transaction.
    pub fn begin(&self) -> Result<StoreTransaction<RedbTransaction>> {
        Ok(StoreTransaction::new(self.engine.begin_write()?))
    }

    /// Begin a read-only transaction.
    pub fn begin_read(&self) -> Result<StoreTransaction<RedbTransaction>> {
        Ok(StoreTransaction::new(self.engine.begin_read()?))
    }

    /// Run `f` inside one write transaction and commit.
    ///
    /// Every mutation issued inside `f` becomes durable together; if `f`
    /// returns an error the transaction is rolled back and nothing is
    /// committed.
    pub fn write<T>(
        &self,
        f: impl FnOnce(&mut StoreTransaction<RedbTransaction>) -> Result<T>,
    ) -> Result<T> {
        let mut tx = self.begin()?;
        let out = f(&mut tx)?;
        tx.commit()?;
        Ok(out)
    }
}
