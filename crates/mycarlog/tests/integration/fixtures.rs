//! Shared fixtures: record constructors and a seeded example store.

use mycarlog::{
    EntityId, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord, PaymentMethod,
    Shop, Station, StationKind, Store, Vehicle, VehicleKind,
};

pub fn vehicle(nickname: &str, is_default: bool) -> Vehicle {
    Vehicle {
        id: EntityId::default(),
        kind: VehicleKind::Ice,
        nickname: nickname.to_owned(),
        manufacturer: "Hyundai".to_owned(),
        model: "i30".to_owned(),
        is_default,
        odometer: 42_000.0,
        created_at: 1_700_000_000_000,
    }
}

pub fn payment(name: &str) -> PaymentMethod {
    PaymentMethod {
        id: EntityId::default(),
        name: name.to_owned(),
        kind: "credit".to_owned(),
        created_at: 1_700_000_000_000,
    }
}

pub fn station(name: &str) -> Station {
    Station {
        id: EntityId::default(),
        name: name.to_owned(),
        kind: StationKind::Gas,
        created_at: 1_700_000_000_000,
    }
}

pub fn shop(name: &str) -> Shop {
    Shop { id: EntityId::default(), name: name.to_owned(), created_at: 1_700_000_000_000 }
}

pub fn item(name: &str) -> MaintenanceItem {
    MaintenanceItem {
        id: EntityId::default(),
        name: name.to_owned(),
        maintenance_km: Some(10_000.0),
        maintenance_month: Some(12),
        created_at: 1_700_000_000_000,
    }
}

pub fn fuel(
    vehicle_id: EntityId,
    payment_method_id: Option<EntityId>,
    station_id: Option<EntityId>,
    date: i64,
    odometer: f64,
) -> FuelRecord {
    FuelRecord {
        id: EntityId::default(),
        vehicle_id,
        date,
        total_cost: 65.40,
        unit_price: 1.81,
        amount: 36.1,
        payment_method_id,
        payment_name: "Visa".to_owned(),
        payment_kind: "credit".to_owned(),
        station_id,
        station_name: "Shell on 5th".to_owned(),
        memo: String::new(),
        odometer,
        created_at: date,
    }
}

pub fn maintenance(
    vehicle_id: EntityId,
    maintenance_item_id: EntityId,
    shop_id: Option<EntityId>,
    shop_name: &str,
    date: i64,
) -> MaintenanceRecord {
    MaintenanceRecord {
        id: EntityId::default(),
        vehicle_id,
        date,
        odometer: 45_000.0,
        maintenance_item_id,
        cost: 120.0,
        is_diy: shop_id.is_none(),
        shop_id,
        shop_name: shop_name.to_owned(),
        memo: String::new(),
        created_at: date,
    }
}

pub fn plan(vehicle_id: EntityId, item_id: EntityId, planned_date: i64) -> MaintenancePlan {
    MaintenancePlan {
        id: EntityId::default(),
        vehicle_id,
        planned_date,
        item_id,
        memo: "before winter".to_owned(),
        created_at: 1_700_000_000_000,
    }
}

/// Ids of the records seeded by [`seeded_store`].
pub struct Seeded {
    pub vehicle: EntityId,
    pub payment: EntityId,
    pub station: EntityId,
    pub shop: EntityId,
    pub item: EntityId,
}

/// A store with one vehicle and one record in every collection.
pub fn seeded_store() -> (Store, Seeded) {
    let store = Store::in_memory().expect("in-memory store");

    let seeded = store
        .write(|tx| {
            let vehicle = tx.insert(vehicle("Family car", true))?;
            let payment = tx.insert(payment("Visa"))?;
            let station = tx.insert(station("Shell on 5th"))?;
            let shop = tx.insert(shop("Main St Garage"))?;
            let item = tx.insert(item("Oil change"))?;

            tx.insert(fuel(
                vehicle.id,
                Some(payment.id),
                Some(station.id),
                1_700_000_000_000,
                42_100.0,
            ))?;
            tx.insert(maintenance(
                vehicle.id,
                item.id,
                Some(shop.id),
                "Main St Garage",
                1_700_100_000_000,
            ))?;
            tx.insert(plan(vehicle.id, item.id, 1_710_000_000_000))?;

            Ok(Seeded {
                vehicle: vehicle.id,
                payment: payment.id,
                station: station.id,
                shop: shop.id,
                item: item.id,
            })
        })
        .expect("seed store");

    (store, seeded)
}
