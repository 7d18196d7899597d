//! `MyCarLog` Core
//!
//! This crate provides the shared domain types of the `MyCarLog` logbook
//! engine: the eight record types that make up a logbook, their
//! identifiers, and the traits the store and the backup engine dispatch
//! on.
//!
//! # Overview
//!
//! - **Identifiers**: [`EntityId`] for referencing any stored record
//! - **Entity kinds**: [`EntityKind`], the typed tag for each of the
//!   eight collections, including the fixed restore order
//! - **Records**: [`Vehicle`], [`PaymentMethod`], [`Station`], [`Shop`],
//!   [`MaintenanceItem`], [`FuelRecord`], [`MaintenanceRecord`],
//!   [`MaintenancePlan`]
//! - **Traits**: [`Record`], the seam the typed store operations use
//!
//! Records serialize with the camelCase field names of the portable
//! snapshot format, so the same structs are used at rest and on the wire.
//!
//! # Example
//!
//! ```
//! use mycarlog_core::{EntityId, Vehicle, VehicleKind};
//!
//! let vehicle = Vehicle {
//!     id: EntityId::new(0),
//!     kind: VehicleKind::Ice,
//!     nickname: "Family car".to_owned(),
//!     manufacturer: "Hyundai".to_owned(),
//!     model: "i30".to_owned(),
//!     is_default: true,
//!     odometer: 42_000.0,
//!     created_at: 1_700_000_000_000,
//! };
//! assert!(vehicle.is_default);
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod record;
pub mod transaction;
pub mod types;

pub use record::Record;
pub use transaction::{TransactionError, TransactionResult};
pub use types::{
    EntityId, EntityKind, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord,
    PaymentMethod, Shop, Station, StationKind, Vehicle, VehicleKind,
};
