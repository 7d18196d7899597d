//! Entity kind tags and the restore dependency order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed tag for each of the eight logbook collections.
///
/// The backup engine iterates collections through this tag rather than
/// through string table names, so adding a collection is a one-place
/// change: a new variant here plus its entries in the tables below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Vehicle,
    PaymentMethod,
    Station,
    Shop,
    MaintenanceItem,
    FuelRecord,
    MaintenanceRecord,
    MaintenancePlan,
}

impl EntityKind {
    /// All kinds in restore dependency order.
    ///
    /// Referencing kinds come strictly after every kind they reference,
    /// so by the time a foreign key is rewritten its target id has
    /// already been inserted or matched.
    pub const RESTORE_ORDER: [Self; 8] = [
        Self::Vehicle,
        Self::PaymentMethod,
        Self::Station,
        Self::Shop,
        Self::MaintenanceItem,
        Self::FuelRecord,
        Self::MaintenanceRecord,
        Self::MaintenancePlan,
    ];

    /// The logical store table holding records of this kind.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicles",
            Self::PaymentMethod => "payment_methods",
            Self::Station => "stations",
            Self::Shop => "shops",
            Self::MaintenanceItem => "maintenance_items",
            Self::FuelRecord => "fuel_records",
            Self::MaintenanceRecord => "maintenance_records",
            Self::MaintenancePlan => "maintenance_plans",
        }
    }

    /// The key of this kind's array in the snapshot `data` object.
    #[must_use]
    pub const fn snapshot_key(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicles",
            Self::PaymentMethod => "paymentMethods",
            Self::Station => "stations",
            Self::Shop => "shops",
            Self::MaintenanceItem => "maintenanceItems",
            Self::FuelRecord => "fuelRecords",
            Self::MaintenanceRecord => "maintenanceRecords",
            Self::MaintenancePlan => "maintenancePlans",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.snapshot_key())
    }
}
