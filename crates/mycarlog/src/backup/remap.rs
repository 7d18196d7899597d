//! Identifier remapping across a restore.
//!
//! Restored records never keep their snapshot-local identifiers: every
//! inserted record gets a fresh store id, and every natural-key match
//! binds the snapshot id to the already-present record's id. [`IdMap`]
//! tracks those bindings per entity kind so later collections can
//! rewrite their foreign keys against the right targets.

use std::collections::HashMap;

use mycarlog_core::{EntityId, EntityKind};

/// Mapping from snapshot-local ids to store ids, per entity kind.
///
/// State is local to one restore invocation and discarded with it.
#[derive(Debug, Default)]
pub struct IdMap {
    maps: HashMap<EntityKind, HashMap<EntityId, EntityId>>,
}

impl IdMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register that a snapshot id now corresponds to a store id.
    ///
    /// Re-registering the same snapshot id overwrites the prior binding
    /// (last write wins); in practice each id is registered once per
    /// restore.
    pub fn record(&mut self, kind: EntityKind, old: EntityId, new: EntityId) {
        self.maps.entry(kind).or_default().insert(old, new);
    }

    /// Resolve a snapshot id to its store id.
    ///
    /// Unknown ids resolve to themselves, so references into data that
    /// was not part of the restore degrade to their original value
    /// instead of failing.
    #[must_use]
    pub fn resolve(&self, kind: EntityKind, old: EntityId) -> EntityId {
        self.maps.get(&kind).and_then(|m| m.get(&old)).copied().unwrap_or(old)
    }

    /// Resolve an optional reference; `None` stays `None`.
    #[must_use]
    pub fn resolve_opt(&self, kind: EntityKind, old: Option<EntityId>) -> Option<EntityId> {
        old.map(|id| self.resolve(kind, id))
    }
}
