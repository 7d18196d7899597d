//! `MyCarLog` Storage
//!
//! This crate provides the storage engine abstraction and the backend
//! implementation used by the `MyCarLog` logbook store.
//!
//! # Overview
//!
//! The storage layer exposes a transactional key-value interface with
//! logical tables. The facade crate builds its typed record collections
//! on top of this interface, which keeps the record layer independent of
//! the concrete backend.
//!
//! # Core Traits
//!
//! - [`StorageEngine`] - The entry point for creating transactions
//! - [`Transaction`] - Atomic get/put/delete/scan over logical tables
//! - [`Cursor`] - Forward iteration over key-value pairs
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
//! tx.put("vehicles", b"1", b"payload")?;
//! tx.commit()?;
//!
//! let tx = engine.begin_read()?;
//! assert_eq!(tx.get("vehicles", b"1")?, Some(b"payload".to_vec()));
//! # Ok(())
//! # }
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod backends;
pub mod engine;

pub use engine::{
    Cursor, CursorResult, KeyValue, StorageEngine, StorageError, StorageResult, Transaction,
};
