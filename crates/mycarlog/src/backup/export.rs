//! Backup creation.
//!
//! A backup reads every collection (or one vehicle's subgraph) inside a
//! single read transaction, serializes it into a snapshot document, and
//! writes the document as pretty-printed JSON to a date-stamped file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use mycarlog_core::{
    EntityId, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord, Vehicle,
};

use super::error::{BackupError, BackupResult};
use super::snapshot::{
    NamedMaintenancePlan, NamedMaintenanceRecord, Snapshot, SnapshotData, VehicleSnapshot,
    VehicleSnapshotData,
};
use crate::store::Store;

/// File name prefix of full backups.
const FULL_BACKUP_PREFIX: &str = "mycarlog_backup";

/// File name prefix of vehicle backups.
const VEHICLE_BACKUP_PREFIX: &str = "vehicle_backup";

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A backup file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    /// Where the snapshot document was written.
    pub path: PathBuf,
    /// Total number of records in the snapshot.
    pub record_count: usize,
}

/// Export the whole dataset to a snapshot file in `dir`.
///
/// The file is named `mycarlog_backup_<yyyy-MM-dd>_<epoch-ms>.json`;
/// the millisecond suffix keeps repeated backups on one day unique.
pub fn create_backup(store: &Store, dir: &Path) -> BackupResult<BackupFile> {
    let tx = store.begin_read()?;

    let data = SnapshotData {
        vehicles: tx.list()?,
        fuel_records: tx.list()?,
        maintenance_records: tx.list()?,
        maintenance_items: tx.list()?,
        maintenance_plans: tx.list()?,
        payment_methods: tx.list()?,
        stations: tx.list()?,
        shops: tx.list()?,
    };

    let snapshot = Snapshot::new(data);
    let record_count = snapshot.record_count();
    let name =
        format!("{FULL_BACKUP_PREFIX}_{}_{}.json", format_date(snapshot.created_at), snapshot.created_at);
    let path = dir.join(name);

    write_document(&path, &snapshot)?;
    tracing::info!(path = %path.display(), records = record_count, "backup written");

    Ok(BackupFile { path, record_count })
}

/// Export one vehicle's records to a snapshot file in `dir`.
///
/// The snapshot carries the vehicle's fuel records, maintenance records
/// and plans, plus every maintenance item they reference; shops,
/// stations and payment methods travel as the denormalized name strings
/// already present on the records.
pub fn create_vehicle_backup(
    store: &Store,
    vehicle_id: EntityId,
    dir: &Path,
) -> BackupResult<BackupFile> {
    let tx = store.begin_read()?;

    let vehicle = tx
        .get::<Vehicle>(vehicle_id)?
        .ok_or_else(|| BackupError::not_found(format!("vehicle {vehicle_id}")))?;

    let fuel_records: Vec<FuelRecord> =
        tx.list()?.into_iter().filter(|r: &FuelRecord| r.vehicle_id == vehicle_id).collect();
    let maintenance_records: Vec<MaintenanceRecord> = tx
        .list()?
        .into_iter()
        .filter(|r: &MaintenanceRecord| r.vehicle_id == vehicle_id)
        .collect();
    let maintenance_plans: Vec<MaintenancePlan> = tx
        .list()?
        .into_iter()
        .filter(|p: &MaintenancePlan| p.vehicle_id == vehicle_id)
        .collect();

    // Transitive closure of referenced maintenance items.
    let referenced: HashSet<EntityId> = maintenance_records
        .iter()
        .map(|r| r.maintenance_item_id)
        .chain(maintenance_plans.iter().map(|p| p.item_id))
        .collect();
    let maintenance_items: Vec<MaintenanceItem> = tx
        .list()?
        .into_iter()
        .filter(|i: &MaintenanceItem| referenced.contains(&i.id))
        .collect();

    let item_name = |id: EntityId| -> Option<String> {
        maintenance_items.iter().find(|i| i.id == id).map(|i| i.name.clone())
    };

    let data = VehicleSnapshotData {
        fuel_records,
        maintenance_records: maintenance_records
            .into_iter()
            .map(|record| NamedMaintenanceRecord {
                maintenance_item_name: item_name(record.maintenance_item_id),
                record,
            })
            .collect(),
        maintenance_plans: maintenance_plans
            .into_iter()
            .map(|plan| NamedMaintenancePlan { item_name: item_name(plan.item_id), plan })
            .collect(),
        maintenance_items,
    };

    let snapshot = VehicleSnapshot::new(&vehicle, data);
    let name = format!(
        "{VEHICLE_BACKUP_PREFIX}_{}_{}.json",
        file_name_component(&vehicle.nickname),
        format_date(snapshot.created_at)
    );
    let path = dir.join(name);

    write_document(&path, &snapshot)?;
    tracing::info!(
        path = %path.display(),
        vehicle = %vehicle.nickname,
        "vehicle backup written"
    );

    let record_count = snapshot.data.fuel_records.len()
        + snapshot.data.maintenance_records.len()
        + snapshot.data.maintenance_plans.len()
        + snapshot.data.maintenance_items.len();
    Ok(BackupFile { path, record_count })
}

fn write_document<T: serde::Serialize>(path: &Path, document: &T) -> BackupResult<()> {
    let json = serde_json::to_string_pretty(document).map_err(BackupError::serialization)?;
    fs::write(path, json)?;
    Ok(())
}

/// The `yyyy-MM-dd` date of an epoch-millisecond timestamp, UTC.
fn format_date(epoch_ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp(epoch_ms.div_euclid(1000))
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
        .format(DATE_FORMAT)
        .unwrap_or_else(|_| "1970-01-01".to_owned())
}

/// Reduce a nickname to a safe file name component.
fn file_name_component(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "vehicle".to_owned()
    } else {
        cleaned
    }
}
