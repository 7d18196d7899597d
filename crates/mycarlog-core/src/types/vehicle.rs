//! Vehicle records.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// The drivetrain of a vehicle, which decides whether it logs fuel
/// fill-ups or charging sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// Internal combustion engine.
    Ice,
    /// Electric vehicle.
    Ev,
}

/// A vehicle tracked by the logbook.
///
/// At most one vehicle is the default at any time; that invariant is
/// owned by the vehicle CRUD layer, not enforced here. The backup engine
/// only reads and writes the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    pub nickname: String,
    pub manufacturer: String,
    pub model: String,
    pub is_default: bool,
    /// Last known odometer reading, in kilometres.
    pub odometer: f64,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
}
