//! Merge policies and per-type natural-key matching.
//!
//! Restoring into a non-empty dataset means deciding, per record,
//! whether it is new, a duplicate to skip, or a duplicate to overwrite.
//! The decision combines a restore-wide [`MergeStrategy`] with a
//! per-type natural key, both implemented here.
//!
//! Per-type behavior lives in the [`Mergeable`] trait rather than in a
//! switch over table names: the orchestrator runs one generic routine
//! per collection, and adding a collection means adding one impl.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mycarlog_core::{
    EntityId, EntityKind, FuelRecord, MaintenanceItem, MaintenancePlan, MaintenanceRecord,
    PaymentMethod, Record, Shop, Station, TransactionError, Vehicle,
};
use mycarlog_storage::Transaction;

use super::remap::IdMap;
use crate::transaction::StoreTransaction;

/// How natural-key duplicates are resolved during a restore.
///
/// Selected once per restore and applied uniformly across all
/// collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Wipe every collection first, then insert everything as new.
    ReplaceAll,
    /// On a duplicate, the newer record (by creation time) wins.
    #[default]
    Smart,
    /// On a duplicate, the snapshot record always wins.
    BackupFirst,
    /// On a duplicate, the existing record always wins.
    ExistingFirst,
}

/// Per-collection outcome counts of one restore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    /// Records inserted as new.
    pub added: usize,
    /// Existing records overwritten by their snapshot duplicate.
    pub updated: usize,
    /// Snapshot records dropped in favor of the existing duplicate.
    pub skipped: usize,
}

impl TypeCounts {
    fn accumulate(&mut self, other: Self) {
        self.added += other.added;
        self.updated += other.updated;
        self.skipped += other.skipped;
    }
}

/// Added/updated/skipped counts per collection, for display.
///
/// Built by folding each collection's [`TypeCounts`] delta; the counts
/// carry no semantics beyond reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    counts: BTreeMap<EntityKind, TypeCounts>,
}

impl MergeReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one collection's delta into the report.
    pub(crate) fn fold(&mut self, kind: EntityKind, delta: TypeCounts) {
        self.counts.entry(kind).or_default().accumulate(delta);
    }

    /// The counts for one collection (zero if it was not touched).
    #[must_use]
    pub fn counts(&self, kind: EntityKind) -> TypeCounts {
        self.counts.get(&kind).copied().unwrap_or_default()
    }

    /// Iterate over per-collection counts in restore order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, TypeCounts)> + '_ {
        self.counts.iter().map(|(kind, counts)| (*kind, *counts))
    }

    /// Total records inserted as new.
    #[must_use]
    pub fn total_added(&self) -> usize {
        self.counts.values().map(|c| c.added).sum()
    }

    /// Total existing records overwritten.
    #[must_use]
    pub fn total_updated(&self) -> usize {
        self.counts.values().map(|c| c.updated).sum()
    }

    /// Total snapshot records skipped.
    #[must_use]
    pub fn total_skipped(&self) -> usize {
        self.counts.values().map(|c| c.skipped).sum()
    }
}

/// Per-type merge behavior: natural key, reference rewrite, and which
/// fields an overwrite touches.
///
/// The natural key is computed after [`rewrite_refs`], so records whose
/// references were remapped match against existing rows under the new
/// ids, never the snapshot-local ones. Overwrites go through
/// [`absorb`], which copies only the mutable fields: natural-key fields
/// and `created_at` never change on an overwrite.
///
/// [`rewrite_refs`]: Mergeable::rewrite_refs
/// [`absorb`]: Mergeable::absorb
pub trait Mergeable: Record {
    /// The natural-key type used to detect duplicates.
    type Key: Eq + std::hash::Hash;

    /// Whether a strategy may overwrite an existing record on a match.
    /// Shops are the one collection where a match is always a skip.
    const OVERWRITABLE: bool = true;

    /// The natural key of this record.
    fn natural_key(&self) -> Self::Key;

    /// Resolve every reference field through the id map.
    fn rewrite_refs(&mut self, ids: &IdMap);

    /// Copy the mutable fields of `incoming` into `self`.
    fn absorb(&mut self, incoming: &Self);
}

impl Mergeable for Vehicle {
    type Key = (String, String, String);

    fn natural_key(&self) -> Self::Key {
        (self.nickname.clone(), self.manufacturer.clone(), self.model.clone())
    }

    fn rewrite_refs(&mut self, _ids: &IdMap) {}

    fn absorb(&mut self, incoming: &Self) {
        self.kind = incoming.kind;
        self.is_default = incoming.is_default;
        self.odometer = incoming.odometer;
    }
}

impl Mergeable for PaymentMethod {
    type Key = String;

    fn natural_key(&self) -> Self::Key {
        self.name.clone()
    }

    fn rewrite_refs(&mut self, _ids: &IdMap) {}

    fn absorb(&mut self, incoming: &Self) {
        self.kind = incoming.kind.clone();
    }
}

impl Mergeable for Station {
    type Key = String;

    fn natural_key(&self) -> Self::Key {
        self.name.clone()
    }

    fn rewrite_refs(&mut self, _ids: &IdMap) {}

    fn absorb(&mut self, incoming: &Self) {
        self.kind = incoming.kind;
    }
}

impl Mergeable for Shop {
    type Key = String;

    // A shop is only a name, so a name match is a full duplicate.
    const OVERWRITABLE: bool = false;

    fn natural_key(&self) -> Self::Key {
        self.name.clone()
    }

    fn rewrite_refs(&mut self, _ids: &IdMap) {}

    fn absorb(&mut self, _incoming: &Self) {}
}

impl Mergeable for MaintenanceItem {
    type Key = String;

    fn natural_key(&self) -> Self::Key {
        self.name.clone()
    }

    fn rewrite_refs(&mut self, _ids: &IdMap) {}

    fn absorb(&mut self, incoming: &Self) {
        self.maintenance_km = incoming.maintenance_km;
        self.maintenance_month = incoming.maintenance_month;
    }
}

impl Mergeable for FuelRecord {
    /// (vehicle, date, odometer bits); the odometer compares exactly.
    type Key = (EntityId, i64, u64);

    fn natural_key(&self) -> Self::Key {
        (self.vehicle_id, self.date, self.odometer.to_bits())
    }

    fn rewrite_refs(&mut self, ids: &IdMap) {
        self.vehicle_id = ids.resolve(EntityKind::Vehicle, self.vehicle_id);
        self.payment_method_id = ids.resolve_opt(EntityKind::PaymentMethod, self.payment_method_id);
        self.station_id = ids.resolve_opt(EntityKind::Station, self.station_id);
    }

    fn absorb(&mut self, incoming: &Self) {
        self.total_cost = incoming.total_cost;
        self.unit_price = incoming.unit_price;
        self.amount = incoming.amount;
        self.payment_method_id = incoming.payment_method_id;
        self.payment_name = incoming.payment_name.clone();
        self.payment_kind = incoming.payment_kind.clone();
        self.station_id = incoming.station_id;
        self.station_name = incoming.station_name.clone();
        self.memo = incoming.memo.clone();
    }
}

impl Mergeable for MaintenanceRecord {
    type Key = (EntityId, i64, EntityId);

    fn natural_key(&self) -> Self::Key {
        (self.vehicle_id, self.date, self.maintenance_item_id)
    }

    fn rewrite_refs(&mut self, ids: &IdMap) {
        self.vehicle_id = ids.resolve(EntityKind::Vehicle, self.vehicle_id);
        self.maintenance_item_id = ids.resolve(EntityKind::MaintenanceItem, self.maintenance_item_id);
        self.shop_id = ids.resolve_opt(EntityKind::Shop, self.shop_id);
    }

    fn absorb(&mut self, incoming: &Self) {
        self.cost = incoming.cost;
        self.is_diy = incoming.is_diy;
        self.shop_id = incoming.shop_id;
        self.shop_name = incoming.shop_name.clone();
        self.memo = incoming.memo.clone();
    }
}

impl Mergeable for MaintenancePlan {
    type Key = (EntityId, EntityId, i64);

    fn natural_key(&self) -> Self::Key {
        (self.vehicle_id, self.item_id, self.planned_date)
    }

    fn rewrite_refs(&mut self, ids: &IdMap) {
        self.vehicle_id = ids.resolve(EntityKind::Vehicle, self.vehicle_id);
        self.item_id = ids.resolve(EntityKind::MaintenanceItem, self.item_id);
    }

    fn absorb(&mut self, incoming: &Self) {
        self.memo = incoming.memo.clone();
    }
}

/// Merge one collection's snapshot rows into the store.
///
/// Returns this collection's counts delta; every snapshot id is
/// registered in `ids` against the surviving record's id.
pub(crate) fn merge_records<R, T>(
    tx: &mut StoreTransaction<T>,
    rows: &[R],
    strategy: MergeStrategy,
    ids: &mut IdMap,
) -> Result<TypeCounts, TransactionError>
where
    R: Mergeable,
    T: Transaction,
{
    merge_records_where(tx, rows, strategy, ids, |_| true)
}

/// Merge one collection, with natural-key matching restricted to
/// existing records that pass `scope`.
///
/// The vehicle-scoped restore uses this to match only against rows of
/// the target vehicle.
pub(crate) fn merge_records_where<R, T>(
    tx: &mut StoreTransaction<T>,
    rows: &[R],
    strategy: MergeStrategy,
    ids: &mut IdMap,
    scope: impl Fn(&R) -> bool,
) -> Result<TypeCounts, TransactionError>
where
    R: Mergeable,
    T: Transaction,
{
    let mut counts = TypeCounts::default();

    // Existing rows indexed by natural key. Kept current as new rows
    // are inserted so duplicates within one snapshot match each other.
    // Under replace_all the collection was just wiped and every row is
    // an insert, so no index is built.
    let mut existing: HashMap<R::Key, R> = HashMap::new();
    if strategy != MergeStrategy::ReplaceAll {
        for record in tx.list::<R>()? {
            if scope(&record) {
                existing.insert(record.natural_key(), record);
            }
        }
    }

    for row in rows {
        let snapshot_id = row.id();
        let mut incoming = row.clone();
        incoming.rewrite_refs(ids);
        let key = incoming.natural_key();

        let Some(current) = existing.get(&key).cloned() else {
            let stored = tx.insert(incoming)?;
            ids.record(R::KIND, snapshot_id, stored.id());
            counts.added += 1;
            existing.insert(key, stored);
            continue;
        };

        // A match always binds the snapshot id to the existing record,
        // so dependents resolve correctly no matter who wins.
        ids.record(R::KIND, snapshot_id, current.id());

        let overwrite = match strategy {
            MergeStrategy::ReplaceAll | MergeStrategy::ExistingFirst => false,
            MergeStrategy::Smart => {
                R::OVERWRITABLE && incoming.created_at() > current.created_at()
            }
            MergeStrategy::BackupFirst => R::OVERWRITABLE,
        };

        if overwrite {
            let mut updated = current.clone();
            updated.absorb(&incoming);
            tx.put(&updated)?;
            counts.updated += 1;
            existing.insert(key, updated);
        } else {
            counts.skipped += 1;
        }
    }

    Ok(counts)
}
