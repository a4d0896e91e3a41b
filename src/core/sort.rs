// ClientDesk - core/sort.rs
//
// Multi-key sort engine for client records.
// Holds the ordered criteria list, persists it through a KeyValueStore after
// every mutation, and produces a stable ordering of records.
// Core layer: pure logic; the store is injected.

use crate::core::model::{Client, SortCriterion, SortDirection, SortField};
use crate::core::store::KeyValueStore;
use crate::util::constants::SORT_CONFIG_KEY;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Ordered sort configuration plus its persistence slot.
///
/// The first criterion is the primary key; later criteria only break ties.
/// At most one criterion exists per field.
#[derive(Debug)]
pub struct SortEngine {
    criteria: Vec<SortCriterion>,
    store: Box<dyn KeyValueStore>,
}

impl SortEngine {
    /// Create an engine, restoring any criteria saved in `store`.
    ///
    /// A missing or unreadable slot yields an empty criteria list.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let criteria = load_criteria(store.as_ref());
        Self { criteria, store }
    }

    /// The active criteria in priority order.
    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    /// Returns true if `field` already has a criterion.
    pub fn is_active(&self, field: SortField) -> bool {
        self.criteria.iter().any(|c| c.field == field)
    }

    /// Fields that can still be added, in selector order.
    pub fn available_fields(&self) -> Vec<SortField> {
        SortField::all()
            .iter()
            .copied()
            .filter(|f| !self.is_active(*f))
            .collect()
    }

    /// Append an ascending criterion for `field` with a fresh id.
    ///
    /// No-op when the field is already sorted on. Returns whether a
    /// criterion was added.
    pub fn add_criterion(&mut self, field: SortField) -> bool {
        if self.is_active(field) {
            tracing::debug!(field = ?field, "Sort field already active; ignoring add");
            return false;
        }
        let criterion = SortCriterion {
            id: uuid::Uuid::new_v4().to_string(),
            field,
            direction: SortDirection::Asc,
        };
        tracing::debug!(id = %criterion.id, field = ?field, "Sort criterion added");
        self.criteria.push(criterion);
        self.persist();
        true
    }

    /// Remove the criterion with `id`. Unknown ids are ignored.
    pub fn remove_criterion(&mut self, id: &str) {
        let before = self.criteria.len();
        self.criteria.retain(|c| c.id != id);
        if self.criteria.len() != before {
            tracing::debug!(id, "Sort criterion removed");
            self.persist();
        }
    }

    /// Flip the direction of the criterion with `id`. Unknown ids are ignored.
    pub fn toggle_direction(&mut self, id: &str) {
        let Some(criterion) = self.criteria.iter_mut().find(|c| c.id == id) else {
            return;
        };
        criterion.direction = criterion.direction.flipped();
        tracing::debug!(id, direction = ?criterion.direction, "Sort direction toggled");
        self.persist();
    }

    /// Replace the whole sequence (used after a drag reorder).
    ///
    /// The caller must pass a permutation of the current criteria; the set
    /// of ids is not validated here.
    pub fn reorder(&mut self, new_sequence: Vec<SortCriterion>) {
        self.criteria = new_sequence;
        self.persist();
    }

    /// Remove every criterion.
    pub fn clear(&mut self) {
        if self.criteria.is_empty() {
            return;
        }
        self.criteria.clear();
        self.persist();
    }

    /// Indices into `records` in sorted order.
    ///
    /// Uses a stable sort, so records equal on every criterion keep their
    /// input order. With no criteria this is the identity permutation.
    pub fn sorted_indices(&self, records: &[Client]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        if self.criteria.is_empty() {
            return indices;
        }
        indices.sort_by(|&a, &b| compare_clients(&records[a], &records[b], &self.criteria));
        indices
    }

    /// A new, sorted copy of `records`.
    pub fn apply(&self, records: &[Client]) -> Vec<Client> {
        self.sorted_indices(records)
            .into_iter()
            .map(|i| records[i].clone())
            .collect()
    }

    /// Write the criteria to the store. Failures are logged, never returned.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.criteria) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialise sort config");
                return;
            }
        };
        match self.store.set(SORT_CONFIG_KEY, &json) {
            Ok(()) => tracing::debug!(criteria = self.criteria.len(), "Sort config saved"),
            Err(e) => tracing::warn!(error = %e, "Failed to save sort config"),
        }
    }
}

/// Compare two clients by `criteria` in priority order.
///
/// The first criterion whose values differ decides; text is compared
/// case-insensitively. Returns `Equal` when every criterion ties.
pub fn compare_clients(a: &Client, b: &Client, criteria: &[SortCriterion]) -> Ordering {
    for criterion in criteria {
        let ordering = a.field(criterion.field).compare(&b.field(criterion.field));
        if ordering != Ordering::Equal {
            return criterion.direction.orient(ordering);
        }
    }
    Ordering::Equal
}

/// The sequence after dragging `active_id` onto the position of `over_id`.
///
/// The dragged criterion is removed from its slot and re-inserted at the
/// target index. Returns `None` if either id is unknown or they are equal.
pub fn move_criterion(
    sequence: &[SortCriterion],
    active_id: &str,
    over_id: &str,
) -> Option<Vec<SortCriterion>> {
    if active_id == over_id {
        return None;
    }
    let from = sequence.iter().position(|c| c.id == active_id)?;
    let to = sequence.iter().position(|c| c.id == over_id)?;

    let mut moved = sequence.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Some(moved)
}

/// Read the persisted criteria from `store`.
///
/// Duplicate fields (possible only in a hand-edited store) keep their first
/// occurrence.
fn load_criteria(store: &dyn KeyValueStore) -> Vec<SortCriterion> {
    let Some(raw) = store.get(SORT_CONFIG_KEY) else {
        tracing::debug!("No saved sort config; starting with none");
        return Vec::new();
    };

    let parsed: Vec<SortCriterion> = match serde_json::from_str(&raw) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "Saved sort config is malformed, starting fresh");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let total = parsed.len();
    let criteria: Vec<SortCriterion> = parsed
        .into_iter()
        .filter(|c| seen.insert(c.field))
        .collect();
    if criteria.len() != total {
        tracing::warn!(
            dropped = total - criteria.len(),
            "Saved sort config had duplicate fields"
        );
    }

    tracing::info!(criteria = criteria.len(), "Sort config loaded");
    criteria
}
