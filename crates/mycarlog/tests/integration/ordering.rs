//! Dependency ordering and foreign-key closure across a restore.

use mycarlog::backup::{self, MergeStrategy, Snapshot, SnapshotData};
use mycarlog::{
    EntityId, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord, PaymentMethod,
    Shop, Station, Store, Vehicle,
};

use crate::fixtures;

/// A snapshot whose records carry snapshot-local ids unknown to the
/// target store.
fn foreign_snapshot() -> Snapshot {
    let mut vehicle = fixtures::vehicle("Imported", false);
    vehicle.id = EntityId::new(50);
    let mut payment = fixtures::payment("Imported card");
    payment.id = EntityId::new(60);
    let mut station = fixtures::station("Imported station");
    station.id = EntityId::new(70);
    let mut shop = fixtures::shop("Imported garage");
    shop.id = EntityId::new(80);
    let mut item = fixtures::item("Imported oil change");
    item.id = EntityId::new(90);

    let mut fuel = fixtures::fuel(
        vehicle.id,
        Some(payment.id),
        Some(station.id),
        1_700_000_000_000,
        42_100.0,
    );
    fuel.id = EntityId::new(100);
    let mut maintenance = fixtures::maintenance(
        vehicle.id,
        item.id,
        Some(shop.id),
        "Imported garage",
        1_700_100_000_000,
    );
    maintenance.id = EntityId::new(110);
    let mut plan = fixtures::plan(vehicle.id, item.id, 1_710_000_000_000);
    plan.id = EntityId::new(120);

    Snapshot::new(SnapshotData {
        vehicles: vec![vehicle],
        fuel_records: vec![fuel],
        maintenance_records: vec![maintenance],
        maintenance_items: vec![item],
        maintenance_plans: vec![plan],
        payment_methods: vec![payment],
        stations: vec![station],
        shops: vec![shop],
    })
}

/// A fuel record referencing a vehicle not yet in the store restores
/// against the vehicle's newly assigned id, never the snapshot-local
/// one.
#[test]
fn fuel_record_follows_the_newly_created_vehicle() {
    let store = Store::in_memory().expect("store");

    backup::restore_from_backup(&store, &foreign_snapshot(), MergeStrategy::Smart)
        .expect("restore");

    let tx = store.begin_read().expect("read");
    let vehicles = tx.list::<Vehicle>().expect("vehicles");
    assert_eq!(vehicles.len(), 1);
    assert_ne!(vehicles[0].id, EntityId::new(50));

    let fuel = tx.list::<FuelRecord>().expect("fuel records");
    assert_eq!(fuel.len(), 1);
    assert_eq!(fuel[0].vehicle_id, vehicles[0].id);
}

/// After a restore, every non-empty reference field of every dated
/// record points at a row that exists in the store.
#[test]
fn all_references_resolve_after_restore() {
    // Non-empty target: the seeded rows shift the id counters, so
    // snapshot-local ids and store ids cannot accidentally coincide.
    let (store, _) = fixtures::seeded_store();

    backup::restore_from_backup(&store, &foreign_snapshot(), MergeStrategy::Smart)
        .expect("restore");

    let tx = store.begin_read().expect("read");

    for fuel in tx.list::<FuelRecord>().expect("fuel records") {
        assert!(tx.get::<Vehicle>(fuel.vehicle_id).expect("get").is_some());
        if let Some(id) = fuel.payment_method_id {
            assert!(tx.get::<PaymentMethod>(id).expect("get").is_some());
        }
        if let Some(id) = fuel.station_id {
            assert!(tx.get::<Station>(id).expect("get").is_some());
        }
    }
    for record in tx.list::<MaintenanceRecord>().expect("maintenance records") {
        assert!(tx.get::<Vehicle>(record.vehicle_id).expect("get").is_some());
        assert!(tx.get::<MaintenanceItem>(record.maintenance_item_id).expect("get").is_some());
        if let Some(id) = record.shop_id {
            assert!(tx.get::<Shop>(id).expect("get").is_some());
        }
    }
    for plan in tx.list::<MaintenancePlan>().expect("plans") {
        assert!(tx.get::<Vehicle>(plan.vehicle_id).expect("get").is_some());
        assert!(tx.get::<MaintenanceItem>(plan.item_id).expect("get").is_some());
    }
}

/// A natural-key match maps the snapshot id onto the existing row, so
/// dependent records end up referencing the already-present target.
#[test]
fn dependents_of_matched_rows_reference_the_existing_target() {
    let (store, seeded) = fixtures::seeded_store();

    // The snapshot's payment method duplicates the seeded "Visa" under a
    // different snapshot-local id.
    let mut snapshot = foreign_snapshot();
    snapshot.data.payment_methods[0].name = "Visa".to_owned();

    backup::restore_from_backup(&store, &snapshot, MergeStrategy::ExistingFirst)
        .expect("restore");

    let tx = store.begin_read().expect("read");
    assert_eq!(tx.count::<PaymentMethod>().expect("count"), 1);

    let restored: Vec<FuelRecord> = tx
        .list::<FuelRecord>()
        .expect("fuel records")
        .into_iter()
        .filter(|r| r.payment_name == "Visa" && r.station_name == "Shell on 5th")
        .collect();
    assert!(restored.iter().all(|r| r.payment_method_id == Some(seeded.payment)));
}
