//! Name-keyed reference records: payment methods, stations, shops and
//! maintenance items.
//!
//! These collections are small lookup tables the dated records point at.
//! Each is deduplicated by name during a restore.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A way of paying for fuel or maintenance.
///
/// The payment kind is an open set ("credit", "cash", "giftcard", ...),
/// so it stays a free string rather than an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: i64,
}

/// Whether a station dispenses fuel or electrons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationKind {
    Gas,
    Ev,
}

/// A fuel or charging station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StationKind,
    pub created_at: i64,
}

/// A repair shop. Name is the only attribute, so a name match during a
/// restore is a full duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub created_at: i64,
}

/// A maintenance item (oil change, tire rotation, ...), optionally with
/// a recommended service interval in kilometres and/or months.
///
/// Note: optional fields are always serialized (no `skip_serializing_if`)
/// because bincode requires fields to be present during deserialization.
/// Snapshot documents carry them as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceItem {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub maintenance_km: Option<f64>,
    #[serde(default)]
    pub maintenance_month: Option<u32>,
    pub created_at: i64,
}
