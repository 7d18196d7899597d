//! Backup, restore, and id-remapping merge.
//!
//! This module exports the logbook to a portable snapshot and imports
//! such a snapshot into a possibly non-empty logbook while keeping
//! every reference intact.
//!
//! # Format
//!
//! A backup is one pretty-printed JSON document: a format version, a
//! creation timestamp, the writing app's version, and one array per
//! collection (see [`Snapshot`]). A vehicle backup carries a single
//! vehicle's records plus enough denormalized data to recreate the
//! vehicle (see [`VehicleSnapshot`]).
//!
//! # Restoring into existing data
//!
//! Restored records never keep their snapshot ids. Collections are
//! walked in dependency order; each record is matched against existing
//! data by its natural key, the selected [`MergeStrategy`] decides
//! whether duplicates are skipped or overwritten, and an [`IdMap`]
//! rewrites the foreign keys of later collections accordingly. The
//! whole restore is one atomic store transaction.
//!
//! # Example
//!
//! ```
//! use mycarlog::backup::{self, MergeStrategy};
//! use mycarlog::Store;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::in_memory()?;
//! let dir = tempfile::tempdir()?;
//!
//! let file = backup::create_backup(&store, dir.path())?;
//! let snapshot = backup::validate_backup_file(&file.path)?;
//! let report = backup::restore_from_backup(&store, &snapshot, MergeStrategy::Smart)?;
//! println!("restored {} records", report.total_added());
//! # Ok(())
//! # }
//! ```

mod error;
mod export;
mod import;
mod merge;
mod remap;
mod service;
mod snapshot;

pub use error::{BackupError, BackupResult};
pub use export::{create_backup, create_vehicle_backup, BackupFile};
pub use import::{
    parse_snapshot, parse_vehicle_snapshot, restore_from_backup, restore_vehicle_backup,
    validate_backup_file, validate_vehicle_backup_file, VehicleRestore,
};
pub use merge::{MergeReport, MergeStrategy, Mergeable, TypeCounts};
pub use remap::IdMap;
pub use service::BackupService;
pub use snapshot::{
    NamedMaintenancePlan, NamedMaintenanceRecord, Snapshot, SnapshotData, VehicleInfo,
    VehicleSnapshot, VehicleSnapshotData, SNAPSHOT_VERSION,
};
