//! The [`Record`] trait connecting record types to their collections.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::{
    EntityId, EntityKind, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord,
    PaymentMethod, Shop, Station, Vehicle,
};

/// A record stored in one of the logbook collections.
///
/// The store's typed CRUD operations are generic over this trait, so
/// every collection gets the same insert/get/list/delete surface without
/// a per-type method family.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// The collection this record type belongs to.
    const KIND: EntityKind;

    /// The store-assigned identifier, or an unassigned id before insert.
    fn id(&self) -> EntityId;

    /// Stamp the store-assigned identifier. Called once, by insert.
    fn set_id(&mut self, id: EntityId);

    /// Creation time, epoch milliseconds. Never changed after creation.
    fn created_at(&self) -> i64;

    /// The logical table name for this record type.
    #[must_use]
    fn table() -> &'static str {
        Self::KIND.table()
    }
}

macro_rules! impl_record {
    ($ty:ty, $kind:expr) => {
        impl Record for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> EntityId {
                self.id
            }

            fn set_id(&mut self, id: EntityId) {
                self.id = id;
            }

            fn created_at(&self) -> i64 {
                self.created_at
            }
        }
    };
}

impl_record!(Vehicle, EntityKind::Vehicle);
impl_record!(PaymentMethod, EntityKind::PaymentMethod);
impl_record!(Station, EntityKind::Station);
impl_record!(Shop, EntityKind::Shop);
impl_record!(MaintenanceItem, EntityKind::MaintenanceItem);
impl_record!(FuelRecord, EntityKind::FuelRecord);
impl_record!(MaintenanceRecord, EntityKind::MaintenanceRecord);
impl_record!(MaintenancePlan, EntityKind::MaintenancePlan);
