//! Redb storage backend.
//!
//! This backend stores all logical tables inside a single redb database.
//! Redb is a pure-Rust embedded store with ACID transactions, which
//! matches the logbook's needs: one local file, serialized writers,
//! snapshot reads, no external server.
//!
//! Logical tables are multiplexed over one physical redb table by
//! prefixing every key with the logical table name (see [`tables`]).
//!
//! # Example
//!
//! ```
//! use mycarlog_storage::backends::RedbEngine;
//! use mycarlog_storage::{StorageEngine, Transaction};
//!
//! # fn main() -> Result<(), mycarlog_storage::StorageError> {
//! let engine = RedbEngine::in_memory()?;
//!
//! let mut tx = engine.begin_write()?;
//! tx.put("shops", b"1", b"Garage")?;
//! tx.commit()?;
//! # Ok(())
//! # }
//! ```
//!
//! For persistent storage, open a file instead:
//!
//! ```ignore
//! let engine = RedbEngine::open("logbook.carlog")?;
//! ```

mod engine;
pub mod tables;
mod transaction;

pub use engine::RedbEngine;
pub use transaction::{RedbCursor, RedbTransaction};
