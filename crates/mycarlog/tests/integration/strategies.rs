//! Merge strategy behavior across whole restores.

use mycarlog::backup::{self, MergeStrategy, Snapshot, SnapshotData};
use mycarlog::{EntityId, EntityKind, PaymentMethod, Store};

use crate::fixtures::{self, seeded_store};

/// Restoring the same snapshot twice with `smart` adds everything once
/// and then recognizes every record as a duplicate.
#[test]
fn smart_restore_is_idempotent() {
    let (source, _) = seeded_store();
    let dir = tempfile::tempdir().expect("tempdir");

    let file = backup::create_backup(&source, dir.path()).expect("backup");
    let snapshot = backup::validate_backup_file(&file.path).expect("validate");

    let target = Store::in_memory().expect("store");

    let first =
        backup::restore_from_backup(&target, &snapshot, MergeStrategy::Smart).expect("restore");
    assert_eq!(first.total_added(), 8);
    assert_eq!(first.total_skipped(), 0);

    let second =
        backup::restore_from_backup(&target, &snapshot, MergeStrategy::Smart).expect("restore");
    assert_eq!(second.total_added(), 0);
    assert_eq!(second.total_updated(), 0);
    assert_eq!(second.total_skipped(), 8);

    for kind in EntityKind::RESTORE_ORDER {
        let counts = second.counts(kind);
        assert_eq!(counts.added, 0, "{kind}");
        assert_eq!(counts.skipped, 1, "{kind}");
    }
}

/// The four strategies diverge on one duplicate payment method where
/// the existing row is newer than the snapshot's.
#[test]
fn strategies_diverge_on_an_older_snapshot_duplicate() {
    let snapshot = Snapshot::new(SnapshotData {
        payment_methods: vec![PaymentMethod {
            id: EntityId::new(1),
            name: "Card A".to_owned(),
            kind: "cash".to_owned(),
            created_at: 50,
        }],
        ..SnapshotData::default()
    });

    let seed = |store: &Store| {
        store
            .write(|tx| {
                Ok(tx
                    .insert(PaymentMethod {
                        id: EntityId::default(),
                        name: "Card A".to_owned(),
                        kind: "credit".to_owned(),
                        created_at: 100,
                    })
                    .map(|_| ())?)
            })
            .expect("seed");
    };
    let kind_of_only_payment = |store: &Store| {
        let tx = store.begin_read().expect("read");
        let payments = tx.list::<PaymentMethod>().expect("list");
        assert_eq!(payments.len(), 1);
        payments[0].kind.clone()
    };

    // smart: the existing row is newer, snapshot is skipped.
    let store = Store::in_memory().expect("store");
    seed(&store);
    let report =
        backup::restore_from_backup(&store, &snapshot, MergeStrategy::Smart).expect("restore");
    assert_eq!(report.counts(EntityKind::PaymentMethod).skipped, 1);
    assert_eq!(kind_of_only_payment(&store), "credit");

    // backup_first: the snapshot always wins on a match.
    let store = Store::in_memory().expect("store");
    seed(&store);
    let report = backup::restore_from_backup(&store, &snapshot, MergeStrategy::BackupFirst)
        .expect("restore");
    assert_eq!(report.counts(EntityKind::PaymentMethod).updated, 1);
    assert_eq!(kind_of_only_payment(&store), "cash");

    // existing_first: the existing row always wins.
    let store = Store::in_memory().expect("store");
    seed(&store);
    let report = backup::restore_from_backup(&store, &snapshot, MergeStrategy::ExistingFirst)
        .expect("restore");
    assert_eq!(report.counts(EntityKind::PaymentMethod).skipped, 1);
    assert_eq!(kind_of_only_payment(&store), "credit");

    // replace_all: the existing row is wiped, the snapshot inserts fresh.
    let store = Store::in_memory().expect("store");
    seed(&store);
    let report = backup::restore_from_backup(&store, &snapshot, MergeStrategy::ReplaceAll)
        .expect("restore");
    assert_eq!(report.counts(EntityKind::PaymentMethod).added, 1);
    assert_eq!(kind_of_only_payment(&store), "cash");
}

/// An overwrite touches only mutable fields; creation time and the
/// natural key survive.
#[test]
fn backup_first_overwrite_keeps_identity_fields() {
    let (store, seeded) = seeded_store();

    let snapshot = Snapshot::new(SnapshotData {
        maintenance_items: vec![mycarlog::MaintenanceItem {
            id: EntityId::new(1),
            name: "Oil change".to_owned(),
            maintenance_km: Some(15_000.0),
            maintenance_month: None,
            created_at: 999,
        }],
        ..SnapshotData::default()
    });

    backup::restore_from_backup(&store, &snapshot, MergeStrategy::BackupFirst).expect("restore");

    let tx = store.begin_read().expect("read");
    let item = tx
        .get::<mycarlog::MaintenanceItem>(seeded.item)
        .expect("get")
        .expect("item still under its old id");
    assert_eq!(item.maintenance_km, Some(15_000.0));
    assert_eq!(item.maintenance_month, None);
    assert_eq!(item.name, "Oil change");
    assert_eq!(item.created_at, 1_700_000_000_000);
}

/// A shop duplicate is never overwritten, whatever the strategy says.
#[test]
fn shop_duplicates_always_skip() {
    for strategy in
        [MergeStrategy::Smart, MergeStrategy::BackupFirst, MergeStrategy::ExistingFirst]
    {
        let (store, seeded) = seeded_store();

        let mut incoming = fixtures::shop("Main St Garage");
        incoming.id = EntityId::new(1);
        incoming.created_at = 1_999_999_999_999;
        let snapshot =
            Snapshot::new(SnapshotData { shops: vec![incoming], ..SnapshotData::default() });

        let report = backup::restore_from_backup(&store, &snapshot, strategy).expect("restore");
        assert_eq!(report.counts(EntityKind::Shop).skipped, 1, "{strategy:?}");

        let tx = store.begin_read().expect("read");
        let kept = tx.get::<mycarlog::Shop>(seeded.shop).expect("get").expect("shop kept");
        assert_eq!(kept.created_at, 1_700_000_000_000, "{strategy:?}");
    }
}
