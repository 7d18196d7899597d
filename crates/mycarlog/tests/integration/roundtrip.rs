//! Round-trip fidelity of backup and replace-all restore.

use mycarlog::backup::{self, MergeStrategy};
use mycarlog::{
    FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord, PaymentMethod, Shop,
    Station, Vehicle,
};

use crate::fixtures::seeded_store;

/// Backing up, then restoring with `replace_all`, reproduces every
/// record's natural-key and mutable fields. Identifiers may differ.
#[test]
fn replace_all_round_trip_preserves_fields() {
    let (store, _) = seeded_store();
    let dir = tempfile::tempdir().expect("tempdir");

    let file = backup::create_backup(&store, dir.path()).expect("backup");
    let snapshot = backup::validate_backup_file(&file.path).expect("validate");

    let report =
        backup::restore_from_backup(&store, &snapshot, MergeStrategy::ReplaceAll).expect("restore");
    assert_eq!(report.total_added(), 8);
    assert_eq!(report.total_updated(), 0);
    assert_eq!(report.total_skipped(), 0);

    let tx = store.begin_read().expect("read");

    let vehicles = tx.list::<Vehicle>().expect("vehicles");
    assert_eq!(vehicles.len(), 1);
    let vehicle = &vehicles[0];
    assert_eq!(vehicle.nickname, "Family car");
    assert!(vehicle.is_default);
    assert_eq!(vehicle.created_at, 1_700_000_000_000);

    let payments = tx.list::<PaymentMethod>().expect("payments");
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].name, "Visa");
    assert_eq!(payments[0].kind, "credit");

    assert_eq!(tx.list::<Station>().expect("stations").len(), 1);
    assert_eq!(tx.list::<Shop>().expect("shops").len(), 1);

    let items = tx.list::<MaintenanceItem>().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].maintenance_km, Some(10_000.0));

    let fuel = tx.list::<FuelRecord>().expect("fuel records");
    assert_eq!(fuel.len(), 1);
    assert_eq!(fuel[0].total_cost, 65.40);
    assert_eq!(fuel[0].odometer, 42_100.0);
    assert_eq!(fuel[0].payment_name, "Visa");

    let maintenance = tx.list::<MaintenanceRecord>().expect("maintenance records");
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0].cost, 120.0);
    assert_eq!(maintenance[0].shop_name, "Main St Garage");

    let plans = tx.list::<MaintenancePlan>().expect("plans");
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].memo, "before winter");
}

/// `replace_all` wipes records the snapshot does not contain.
#[test]
fn replace_all_drops_records_missing_from_the_snapshot() {
    let (store, _) = seeded_store();
    let dir = tempfile::tempdir().expect("tempdir");

    let file = backup::create_backup(&store, dir.path()).expect("backup");
    let snapshot = backup::validate_backup_file(&file.path).expect("validate");

    // A shop added after the backup must not survive a replace-all.
    store
        .write(|tx| Ok(tx.insert(crate::fixtures::shop("Added later")).map(|_| ())?))
        .expect("insert");

    backup::restore_from_backup(&store, &snapshot, MergeStrategy::ReplaceAll).expect("restore");

    let tx = store.begin_read().expect("read");
    let shops = tx.list::<Shop>().expect("shops");
    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0].name, "Main St Garage");
}

/// Restored records get fresh identifiers, never the snapshot-local
/// ones.
#[test]
fn restored_records_get_fresh_ids() {
    let (store, seeded) = seeded_store();
    let dir = tempfile::tempdir().expect("tempdir");

    let file = backup::create_backup(&store, dir.path()).expect("backup");
    let snapshot = backup::validate_backup_file(&file.path).expect("validate");

    backup::restore_from_backup(&store, &snapshot, MergeStrategy::ReplaceAll).expect("restore");

    let tx = store.begin_read().expect("read");
    let vehicles = tx.list::<Vehicle>().expect("vehicles");
    assert_ne!(vehicles[0].id, seeded.vehicle);
}
