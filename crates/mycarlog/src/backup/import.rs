//! Backup validation and restore.
//!
//! Restoring runs in two phases. Validation parses the file and checks
//! its structure without touching the store, so the UI can show the
//! snapshot's contents and ask for confirmation first. The restore
//! itself then walks the collections in dependency order inside one
//! write transaction: either every record of every collection commits,
//! or none do.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use mycarlog_core::{
    EntityId, EntityKind, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord,
    PaymentMethod, Shop, Station, Vehicle,
};
use mycarlog_storage::Transaction;

use super::error::{BackupError, BackupResult};
use super::merge::{merge_records, merge_records_where, MergeReport, MergeStrategy, TypeCounts};
use super::remap::IdMap;
use super::snapshot::{
    current_timestamp_ms, Snapshot, VehicleSnapshot, SUPPORTED_MAJOR,
};
use crate::store::Store;
use crate::transaction::StoreTransaction;

/// Outcome of a single-vehicle restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRestore {
    /// Id of the vehicle created by this restore.
    pub vehicle_id: EntityId,
    /// Nickname of the created vehicle.
    pub vehicle_name: String,
    /// Per-collection counts, including the created vehicle itself.
    pub report: MergeReport,
}

// ============================================================================
// Validation
// ============================================================================

/// Read and validate a full-backup file.
///
/// Nothing is written; a successful return means the document can be
/// handed to [`restore_from_backup`].
pub fn validate_backup_file(path: &Path) -> BackupResult<Snapshot> {
    parse_snapshot(&fs::read_to_string(path)?)
}

/// Validate full-backup document text.
pub fn parse_snapshot(text: &str) -> BackupResult<Snapshot> {
    let value = parse_document(text)?;

    let data = value
        .get("data")
        .filter(|d| d.is_object())
        .ok_or_else(|| BackupError::invalid_format("missing data object"))?;
    for kind in EntityKind::RESTORE_ORDER {
        let key = kind.snapshot_key();
        if !data.get(key).is_some_and(Value::is_array) {
            return Err(BackupError::invalid_format(format!(
                "missing or invalid array: data.{key}"
            )));
        }
    }

    serde_json::from_value(value).map_err(|e| BackupError::InvalidFormat(e.to_string()))
}

/// Read and validate a vehicle-backup file.
pub fn validate_vehicle_backup_file(path: &Path) -> BackupResult<VehicleSnapshot> {
    parse_vehicle_snapshot(&fs::read_to_string(path)?)
}

/// Validate vehicle-backup document text.
pub fn parse_vehicle_snapshot(text: &str) -> BackupResult<VehicleSnapshot> {
    let value = parse_document(text)?;

    if value.get("vehicleId").is_none() {
        return Err(BackupError::invalid_format("missing vehicleId"));
    }
    if !value.get("data").is_some_and(Value::is_object) {
        return Err(BackupError::invalid_format("missing data object"));
    }

    serde_json::from_value(value).map_err(|e| BackupError::InvalidFormat(e.to_string()))
}

/// Parse text as JSON and check the document version.
fn parse_document(text: &str) -> BackupResult<Value> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| BackupError::Malformed(e.to_string()))?;

    let version = value
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| BackupError::invalid_format("missing version"))?;
    let major = version.split('.').next().unwrap_or_default();
    if major != SUPPORTED_MAJOR {
        return Err(BackupError::UnsupportedVersion(version.to_owned()));
    }

    Ok(value)
}

// ============================================================================
// Whole-database restore
// ============================================================================

/// Restore a full snapshot into the store.
///
/// Collections are processed in dependency order so every foreign key
/// resolves to a record that already exists. The whole walk runs inside
/// one write transaction; any error rolls everything back.
pub fn restore_from_backup(
    store: &Store,
    snapshot: &Snapshot,
    strategy: MergeStrategy,
) -> BackupResult<MergeReport> {
    tracing::info!(?strategy, records = snapshot.record_count(), "restore started");

    let mut tx = store.begin()?;
    let mut ids = IdMap::new();
    let mut report = MergeReport::new();
    let data = &snapshot.data;

    if strategy == MergeStrategy::ReplaceAll {
        wipe_all(&mut tx)?;
    }

    report.fold(EntityKind::Vehicle, merge_records(&mut tx, &data.vehicles, strategy, &mut ids)?);
    report.fold(
        EntityKind::PaymentMethod,
        merge_records(&mut tx, &data.payment_methods, strategy, &mut ids)?,
    );
    report.fold(EntityKind::Station, merge_records(&mut tx, &data.stations, strategy, &mut ids)?);
    report.fold(EntityKind::Shop, merge_records(&mut tx, &data.shops, strategy, &mut ids)?);
    report.fold(
        EntityKind::MaintenanceItem,
        merge_records(&mut tx, &data.maintenance_items, strategy, &mut ids)?,
    );
    report.fold(
        EntityKind::FuelRecord,
        merge_records(&mut tx, &data.fuel_records, strategy, &mut ids)?,
    );
    report.fold(
        EntityKind::MaintenanceRecord,
        merge_records(&mut tx, &data.maintenance_records, strategy, &mut ids)?,
    );
    report.fold(
        EntityKind::MaintenancePlan,
        merge_records(&mut tx, &data.maintenance_plans, strategy, &mut ids)?,
    );

    tx.commit()?;
    tracing::info!(
        added = report.total_added(),
        updated = report.total_updated(),
        skipped = report.total_skipped(),
        "restore committed"
    );

    Ok(report)
}

/// Permanently delete every record of every collection.
fn wipe_all<T: Transaction>(tx: &mut StoreTransaction<T>) -> BackupResult<()> {
    tx.clear::<Vehicle>()?;
    tx.clear::<PaymentMethod>()?;
    tx.clear::<Station>()?;
    tx.clear::<Shop>()?;
    tx.clear::<MaintenanceItem>()?;
    tx.clear::<FuelRecord>()?;
    tx.clear::<MaintenanceRecord>()?;
    tx.clear::<MaintenancePlan>()?;
    Ok(())
}

// ============================================================================
// Single-vehicle restore
// ============================================================================

/// Restore a vehicle snapshot as a brand-new vehicle.
///
/// The target vehicle is always created fresh from the snapshot's
/// `vehicleInfo`, never matched against existing vehicles, and is not
/// the default. Record matching is scoped to the new vehicle's rows, so
/// on a first restore every record inserts. Shop references resolve by
/// name against existing shops; unresolved references keep the
/// snapshot's raw id and name. Station and payment-method references are
/// carried over as-is.
pub fn restore_vehicle_backup(
    store: &Store,
    snapshot: &VehicleSnapshot,
    strategy: MergeStrategy,
) -> BackupResult<VehicleRestore> {
    tracing::info!(?strategy, vehicle = %snapshot.vehicle_name, "vehicle restore started");

    let mut tx = store.begin()?;
    let mut ids = IdMap::new();
    let mut report = MergeReport::new();
    let data = &snapshot.data;

    let vehicle =
        tx.insert(snapshot.vehicle_info.clone().into_vehicle(current_timestamp_ms()))?;
    ids.record(EntityKind::Vehicle, snapshot.vehicle_id, vehicle.id);
    report.fold(EntityKind::Vehicle, TypeCounts { added: 1, updated: 0, skipped: 0 });

    // Maintenance items are shared reference data: merge by name across
    // the whole store. Wiping them from inside a single-vehicle restore
    // would break other vehicles, so replace_all degrades to smart here.
    let item_strategy = if strategy == MergeStrategy::ReplaceAll {
        MergeStrategy::Smart
    } else {
        strategy
    };
    report.fold(
        EntityKind::MaintenanceItem,
        merge_records(&mut tx, &data.maintenance_items, item_strategy, &mut ids)?,
    );

    // Resolve shop references by name; a miss keeps the snapshot value.
    let shops_by_name: HashMap<String, EntityId> =
        tx.list::<Shop>()?.into_iter().map(|shop| (shop.name.clone(), shop.id)).collect();
    for named in &data.maintenance_records {
        let record = &named.record;
        if let (Some(old_shop_id), false) = (record.shop_id, record.shop_name.is_empty()) {
            if let Some(shop_id) = shops_by_name.get(&record.shop_name) {
                ids.record(EntityKind::Shop, old_shop_id, *shop_id);
            }
        }
    }

    let target = vehicle.id;
    let fuel_rows = data.fuel_records.clone();
    report.fold(
        EntityKind::FuelRecord,
        merge_records_where(&mut tx, &fuel_rows, strategy, &mut ids, |r: &FuelRecord| {
            r.vehicle_id == target
        })?,
    );

    let maintenance_rows: Vec<MaintenanceRecord> =
        data.maintenance_records.iter().map(|named| named.record.clone()).collect();
    report.fold(
        EntityKind::MaintenanceRecord,
        merge_records_where(
            &mut tx,
            &maintenance_rows,
            strategy,
            &mut ids,
            |r: &MaintenanceRecord| r.vehicle_id == target,
        )?,
    );

    let plan_rows: Vec<MaintenancePlan> =
        data.maintenance_plans.iter().map(|named| named.plan.clone()).collect();
    report.fold(
        EntityKind::MaintenancePlan,
        merge_records_where(&mut tx, &plan_rows, strategy, &mut ids, |p: &MaintenancePlan| {
            p.vehicle_id == target
        })?,
    );

    tx.commit()?;
    tracing::info!(
        vehicle_id = %vehicle.id,
        added = report.total_added(),
        "vehicle restore committed"
    );

    Ok(VehicleRestore { vehicle_id: vehicle.id, vehicle_name: vehicle.nickname, report })
}
