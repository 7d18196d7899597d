//! Dated log records: fuel fill-ups, maintenance work, and planned
//! maintenance.
//!
//! These are the records that reference other collections. Reference
//! fields hold store-assigned ids; the optional ones are `None` when the
//! user did not pick a payment method, station or shop. Next to each
//! optional reference sits a denormalized display string, kept so a log
//! entry stays readable even if the referenced row is later deleted.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A fuel fill-up or charging session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    #[serde(default)]
    pub id: EntityId,
    pub vehicle_id: EntityId,
    /// When the fill-up happened, epoch milliseconds.
    pub date: i64,
    pub total_cost: f64,
    pub unit_price: f64,
    /// Litres or kilowatt-hours, depending on the vehicle kind.
    pub amount: f64,
    #[serde(default)]
    pub payment_method_id: Option<EntityId>,
    #[serde(default)]
    pub payment_name: String,
    #[serde(default, rename = "paymentType")]
    pub payment_kind: String,
    #[serde(default)]
    pub station_id: Option<EntityId>,
    #[serde(default)]
    pub station_name: String,
    #[serde(default)]
    pub memo: String,
    pub odometer: f64,
    pub created_at: i64,
}

/// A completed piece of maintenance work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    #[serde(default)]
    pub id: EntityId,
    pub vehicle_id: EntityId,
    pub date: i64,
    pub odometer: f64,
    pub maintenance_item_id: EntityId,
    pub cost: f64,
    pub is_diy: bool,
    #[serde(default)]
    pub shop_id: Option<EntityId>,
    #[serde(default)]
    pub shop_name: String,
    #[serde(default)]
    pub memo: String,
    pub created_at: i64,
}

/// Maintenance scheduled for a future date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePlan {
    #[serde(default)]
    pub id: EntityId,
    pub vehicle_id: EntityId,
    pub planned_date: i64,
    pub item_id: EntityId,
    #[serde(default)]
    pub memo: String,
    pub created_at: i64,
}
