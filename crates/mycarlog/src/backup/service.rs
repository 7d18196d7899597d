//! The UI-facing backup surface.
//!
//! [`BackupService`] bundles the store, the backup directory and the
//! platform ports behind one object, so screens call a single
//! collaborator and never juggle the pieces themselves. Every method
//! returns a [`BackupResult`]: errors are values for the caller to
//! render, nothing is thrown past this boundary.

use std::path::{Path, PathBuf};

use mycarlog_core::EntityId;

use super::error::{BackupError, BackupResult};
use super::export::{self, BackupFile};
use super::import::{self, VehicleRestore};
use super::merge::{MergeReport, MergeStrategy};
use super::snapshot::{Snapshot, VehicleSnapshot};
use crate::platform::{FilePicker, ShareSheet};
use crate::store::Store;

/// Backup and restore operations bound to one store and platform.
///
/// The store is an explicit dependency rather than a global, so every
/// test (and every embedder) can hand the service its own instance.
pub struct BackupService<'a> {
    store: &'a Store,
    backup_dir: PathBuf,
    picker: Box<dyn FilePicker>,
    share: Box<dyn ShareSheet>,
}

impl<'a> BackupService<'a> {
    /// Create a service writing backups into `backup_dir`.
    pub fn new(
        store: &'a Store,
        backup_dir: impl Into<PathBuf>,
        picker: Box<dyn FilePicker>,
        share: Box<dyn ShareSheet>,
    ) -> Self {
        Self { store, backup_dir: backup_dir.into(), picker, share }
    }

    /// Export the whole dataset to a new backup file.
    pub fn create_backup(&self) -> BackupResult<BackupFile> {
        export::create_backup(self.store, &self.backup_dir)
    }

    /// Export one vehicle's records to a new backup file.
    pub fn create_vehicle_backup(&self, vehicle_id: EntityId) -> BackupResult<BackupFile> {
        export::create_vehicle_backup(self.store, vehicle_id, &self.backup_dir)
    }

    /// Offer a backup file through the platform share sheet.
    ///
    /// A failure here does not undo the backup: the file stays on disk
    /// and the caller reports "backup succeeded, share failed".
    pub fn share_backup(&self, path: &Path) -> BackupResult<()> {
        self.share
            .share_file(path)
            .map_err(|e| BackupError::ShareUnavailable(e.to_string()))
    }

    /// Let the user pick a backup file to restore from.
    pub fn select_backup_file(&self) -> BackupResult<PathBuf> {
        self.picker.pick_backup_file().ok_or(BackupError::Cancelled)
    }

    /// Read and validate a full-backup file without writing anything.
    pub fn validate_backup_file(&self, path: &Path) -> BackupResult<Snapshot> {
        import::validate_backup_file(path)
    }

    /// Read and validate a vehicle-backup file without writing anything.
    pub fn validate_vehicle_backup_file(&self, path: &Path) -> BackupResult<VehicleSnapshot> {
        import::validate_vehicle_backup_file(path)
    }

    /// Restore a validated full snapshot with the given strategy.
    pub fn restore_from_backup(
        &self,
        snapshot: &Snapshot,
        strategy: MergeStrategy,
    ) -> BackupResult<MergeReport> {
        import::restore_from_backup(self.store, snapshot, strategy)
    }

    /// Restore a validated vehicle snapshot into a new vehicle.
    pub fn restore_vehicle_backup(
        &self,
        snapshot: &VehicleSnapshot,
        strategy: MergeStrategy,
    ) -> BackupResult<VehicleRestore> {
        import::restore_vehicle_backup(self.store, snapshot, strategy)
    }
}
