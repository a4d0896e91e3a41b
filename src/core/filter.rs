// ClientDesk - core/filter.rs
//
// Category + free-text filter over client records.
// Both predicates are AND-combined; the filter never reorders.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Client, ClientType};

/// Category restriction selected by the toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only clients of this type.
    Only(ClientType),
}

impl CategoryFilter {
    /// Toolbar buttons in display order, with their short labels.
    pub fn buttons() -> &'static [(CategoryFilter, &'static str)] {
        &[
            (CategoryFilter::All, "All"),
            (CategoryFilter::Only(ClientType::Corporate), "Corporate"),
            (CategoryFilter::Only(ClientType::Government), "Govt"),
            (CategoryFilter::Only(ClientType::NonProfit), "Non-profit"),
            (CategoryFilter::Only(ClientType::Individual), "Individual"),
        ]
    }

    fn admits(&self, client_type: ClientType) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(t) => *t == client_type,
        }
    }
}

/// Complete filter state. Transient: lives for one session only.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Active category restriction.
    pub category: CategoryFilter,

    /// Substring text search (case-insensitive). Empty = no filter.
    pub query: String,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.category == CategoryFilter::All && self.query.is_empty()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Check a single client against both predicates.
    pub fn matches(&self, client: &Client) -> bool {
        matches_all(client, self, &self.query.to_lowercase())
    }

    /// The matching clients, in input order.
    pub fn apply(&self, records: &[Client]) -> Vec<Client> {
        apply_filters(records, self)
            .into_iter()
            .map(|i| records[i].clone())
            .collect()
    }
}

/// Apply filters to a slice of clients, returning indices of matches.
///
/// Returns a Vec of indices into the original slice so callers can compose
/// it with a sort permutation without copying records.
pub fn apply_filters(records: &[Client], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..records.len()).collect();
    }

    let query_lower = filter.query.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, client)| matches_all(client, filter, &query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

fn matches_all(client: &Client, filter: &FilterState, query_lower: &str) -> bool {
    if !filter.category.admits(client.client_type) {
        return false;
    }

    if query_lower.is_empty() {
        return true;
    }

    client
        .searchable_text()
        .iter()
        .any(|text| text.to_lowercase().contains(query_lower))
}
