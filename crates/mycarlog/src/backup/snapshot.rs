//! Snapshot document types.
//!
//! A snapshot is the portable JSON document produced by a backup and
//! consumed by a restore. There are two shapes: the full-database
//! [`Snapshot`] carrying every collection, and the [`VehicleSnapshot`]
//! carrying one vehicle's records plus enough denormalized information
//! to reconstruct the vehicle without its original row.

use serde::{Deserialize, Serialize};

use mycarlog_core::{
    EntityId, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord, PaymentMethod,
    Shop, Station, Vehicle, VehicleKind,
};

/// The current snapshot format version.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// The supported major version of incoming snapshots.
pub(crate) const SUPPORTED_MAJOR: &str = "1";

/// A full-database snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Snapshot format version.
    pub version: String,
    /// When the snapshot was created, epoch milliseconds.
    pub created_at: i64,
    /// Version of the application that wrote the snapshot.
    pub app_version: String,
    /// Every collection, keyed by entity-type name.
    pub data: SnapshotData,
}

impl Snapshot {
    /// Create a snapshot of the given data, stamped with the current
    /// time and the crate version.
    #[must_use]
    pub fn new(data: SnapshotData) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_owned(),
            created_at: current_timestamp_ms(),
            app_version: env!("CARGO_PKG_VERSION").to_owned(),
            data,
        }
    }

    /// Total number of records across all collections.
    #[must_use]
    pub fn record_count(&self) -> usize {
        let d = &self.data;
        d.vehicles.len()
            + d.payment_methods.len()
            + d.stations.len()
            + d.shops.len()
            + d.maintenance_items.len()
            + d.fuel_records.len()
            + d.maintenance_records.len()
            + d.maintenance_plans.len()
    }
}

/// The eight collections of a full snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    pub vehicles: Vec<Vehicle>,
    pub fuel_records: Vec<FuelRecord>,
    pub maintenance_records: Vec<MaintenanceRecord>,
    pub maintenance_items: Vec<MaintenanceItem>,
    pub maintenance_plans: Vec<MaintenancePlan>,
    pub payment_methods: Vec<PaymentMethod>,
    pub stations: Vec<Station>,
    pub shops: Vec<Shop>,
}

/// A single-vehicle snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSnapshot {
    pub version: String,
    pub created_at: i64,
    pub app_version: String,
    /// The vehicle's id in the source dataset. Restores never reuse it;
    /// it only keys the id remapping.
    pub vehicle_id: EntityId,
    /// Display name of the vehicle at export time.
    pub vehicle_name: String,
    /// Enough of the vehicle to recreate it on restore.
    pub vehicle_info: VehicleInfo,
    pub data: VehicleSnapshotData,
}

impl VehicleSnapshot {
    /// Create a snapshot of one vehicle's data.
    #[must_use]
    pub fn new(vehicle: &Vehicle, data: VehicleSnapshotData) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_owned(),
            created_at: current_timestamp_ms(),
            app_version: env!("CARGO_PKG_VERSION").to_owned(),
            vehicle_id: vehicle.id,
            vehicle_name: vehicle.nickname.clone(),
            vehicle_info: VehicleInfo::from_vehicle(vehicle),
            data,
        }
    }
}

/// Denormalized vehicle attributes carried by a vehicle snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    pub nickname: String,
    pub manufacturer: String,
    pub model: String,
    pub odometer: f64,
}

impl VehicleInfo {
    /// Capture the restorable attributes of a vehicle.
    #[must_use]
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            kind: vehicle.kind,
            nickname: vehicle.nickname.clone(),
            manufacturer: vehicle.manufacturer.clone(),
            model: vehicle.model.clone(),
            odometer: vehicle.odometer,
        }
    }

    /// Build a fresh vehicle from the snapshot attributes.
    ///
    /// The restored vehicle is never the default; the target dataset
    /// already has its own.
    #[must_use]
    pub fn into_vehicle(self, created_at: i64) -> Vehicle {
        Vehicle {
            id: EntityId::default(),
            kind: self.kind,
            nickname: self.nickname,
            manufacturer: self.manufacturer,
            model: self.model,
            is_default: false,
            odometer: self.odometer,
            created_at,
        }
    }
}

/// The collections of a vehicle snapshot.
///
/// Payment methods, stations and shops are not carried as collections;
/// the dated records keep their denormalized name strings instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSnapshotData {
    pub fuel_records: Vec<FuelRecord>,
    pub maintenance_records: Vec<NamedMaintenanceRecord>,
    pub maintenance_plans: Vec<NamedMaintenancePlan>,
    pub maintenance_items: Vec<MaintenanceItem>,
}

/// A maintenance record with the referenced item's name alongside, so
/// the snapshot stays readable without the items array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedMaintenanceRecord {
    #[serde(flatten)]
    pub record: MaintenanceRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_item_name: Option<String>,
}

/// A maintenance plan with the referenced item's name alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedMaintenancePlan {
    #[serde(flatten)]
    pub plan: MaintenancePlan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
}

/// Current time as epoch milliseconds.
pub(crate) fn current_timestamp_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
