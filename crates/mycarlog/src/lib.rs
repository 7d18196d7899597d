//! `MyCarLog` - An Embedded Vehicle Logbook Store
//!
//! MyCarLog keeps a vehicle logbook (fuel fill-ups, maintenance
//! records and plans, and the reference data they point at) in a
//! local, transactional, embedded store, and moves it between devices
//! through portable JSON snapshots with id-remapping merge restore.
//!
//! # Quick Start
//!
//! ## Opening a Store
//!
//! ```
//! use mycarlog::Store;
//!
//! # fn main() -> mycarlog::Result<()> {
//! // Open or create a store file
//! # let dir = tempfile::tempdir().map_err(|e| mycarlog::Error::Open(e.to_string()))?;
//! # let path = dir.path().join("logbook.carlog");
//! let store = Store::open(&path)?;
//!
//! // Or an in-memory store for tests
//! let store = Store::in_memory()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing Records
//!
//! ```
//! use mycarlog::Store;
//! use mycarlog_core::{EntityId, Vehicle, VehicleKind};
//!
//! # fn main() -> mycarlog::Result<()> {
//! let store = Store::in_memory()?;
//!
//! let vehicle = store.write(|tx| {
//!     Ok(tx.insert(Vehicle {
//!         id: EntityId::default(),
//!         kind: VehicleKind::Ice,
//!         nickname: "Family car".to_owned(),
//!         manufacturer: "Hyundai".to_owned(),
//!         model: "i30".to_owned(),
//!         is_default: true,
//!         odometer: 42_000.0,
//!         created_at: 1_700_000_000_000,
//!     })?)
//! })?;
//! assert!(vehicle.id.is_assigned());
//! # Ok(())
//! # }
//! ```
//!
//! ## Backup and Restore
//!
//! ```
//! use mycarlog::backup::{self, MergeStrategy};
//! use mycarlog::Store;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::in_memory()?;
//! # let dir = tempfile::tempdir()?;
//!
//! let file = backup::create_backup(&store, dir.path())?;
//! let snapshot = backup::validate_backup_file(&file.path)?;
//! backup::restore_from_backup(&store, &snapshot, MergeStrategy::Smart)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`backup`] - Snapshot export, validation, and merge restore
//! - [`config`] - Store configuration and builder
//! - [`platform`] - File picker and share sheet ports
//! - [`store`] - Main store interface
//! - [`transaction`] - Typed transaction handle

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

// Re-export core types
pub use mycarlog_core::{
    EntityId, EntityKind, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord,
    PaymentMethod, Record, Shop, Station, StationKind, TransactionError, TransactionResult,
    Vehicle, VehicleKind,
};

// Re-export storage types
pub use mycarlog_storage::{StorageEngine, StorageError, Transaction};

// Modules
pub mod backup;
pub mod config;
pub mod error;
pub mod platform;
pub mod store;
pub mod transaction;

// Public API re-exports
pub use config::{Config, StoreBuilder};
pub use error::{Error, Result};
pub use store::Store;
pub use transaction::StoreTransaction;
