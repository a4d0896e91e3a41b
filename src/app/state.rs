// ClientDesk - app/state.rs
//
// Application state management. Holds the client records, the sort engine,
// the filter state and the derived view, plus dialog flags.
// Owned by the eframe::App implementation.

use crate::core::export::{self, ExportFormat};
use crate::core::filter::{CategoryFilter, FilterState};
use crate::core::mock::generate_clients;
use crate::core::model::{Client, SortField};
use crate::core::sort::{move_criterion, SortEngine};
use crate::platform::config::ThemeMode;
use crate::util::constants::MIN_CLIENT_COUNT;
use crate::util::error::ExportError;
use std::path::Path;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// All client records, in source order.
    pub clients: Vec<Client>,

    /// Multi-key sort configuration (persisted).
    pub sort: SortEngine,

    /// Category + text filter (session only).
    pub filter: FilterState,

    /// Indices into `clients`: sorted, then filtered. This is what the
    /// table renders.
    pub view: Vec<usize>,

    /// Active colour theme.
    pub theme: ThemeMode,

    /// Whether the sort dialog is open.
    pub show_sort_panel: bool,

    /// Field chosen in the sort dialog's "add" selector, not yet added.
    pub pending_sort_field: Option<SortField>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal startup warnings (config problems etc.).
    pub warnings: Vec<String>,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state and compute the first view.
    pub fn new(clients: Vec<Client>, sort: SortEngine, theme: ThemeMode, debug_mode: bool) -> Self {
        let mut state = Self {
            clients,
            sort,
            filter: FilterState::default(),
            view: Vec::new(),
            theme,
            show_sort_panel: false,
            pending_sort_field: None,
            status_message: "Ready.".to_string(),
            warnings: Vec::new(),
            debug_mode,
        };
        state.refresh_view();
        state
    }

    /// Re-run the pipeline: sort all clients, then filter in sorted order.
    pub fn refresh_view(&mut self) {
        let sorted = self.sort.sorted_indices(&self.clients);
        self.view = sorted
            .into_iter()
            .filter(|&i| self.filter.matches(&self.clients[i]))
            .collect();
        tracing::trace!(
            visible = self.view.len(),
            total = self.clients.len(),
            "View refreshed"
        );
    }

    /// Replace the record set (e.g. regenerated data) and refresh.
    pub fn replace_clients(&mut self, clients: Vec<Client>) {
        self.clients = clients;
        self.refresh_view();
    }

    /// Replace the records with a freshly generated set of the same size.
    pub fn regenerate_clients(&mut self) {
        let count = self.clients.len().max(MIN_CLIENT_COUNT);
        let clients = generate_clients(count, &mut rand::rng(), chrono::Utc::now());
        self.replace_clients(clients);
        self.status_message = format!("Generated {count} new clients.");
        tracing::info!(count, "Clients regenerated");
    }

    /// Clients in display order.
    pub fn visible_clients(&self) -> impl Iterator<Item = &Client> + '_ {
        self.view.iter().filter_map(|&i| self.clients.get(i))
    }

    /// Owned copy of the visible clients, for export.
    pub fn visible_snapshot(&self) -> Vec<Client> {
        self.visible_clients().cloned().collect()
    }

    /// Write the visible view to `dest` and return the record count.
    pub fn export_visible(&self, format: ExportFormat, dest: &Path) -> Result<usize, ExportError> {
        let file = std::fs::File::create(dest).map_err(|source| ExportError::Io {
            path: dest.to_path_buf(),
            source,
        })?;
        let clients = self.visible_snapshot();
        let count = match format {
            ExportFormat::Csv => export::export_csv(&clients, file, dest),
            ExportFormat::Json => export::export_json(&clients, file, dest),
        }?;
        Ok(count)
    }

    // -------------------------------------------------------------------------
    // Sort operations
    // -------------------------------------------------------------------------

    pub fn add_sort_field(&mut self, field: SortField) {
        if self.sort.add_criterion(field) {
            self.status_message = format!("Sorting by {}.", field.label());
            self.refresh_view();
        }
    }

    pub fn remove_sort_criterion(&mut self, id: &str) {
        self.sort.remove_criterion(id);
        self.refresh_view();
    }

    pub fn toggle_sort_direction(&mut self, id: &str) {
        self.sort.toggle_direction(id);
        self.refresh_view();
    }

    /// Apply a drag of `active_id` onto `over_id` in the sort dialog.
    pub fn move_sort_criterion(&mut self, active_id: &str, over_id: &str) {
        if let Some(sequence) = move_criterion(self.sort.criteria(), active_id, over_id) {
            self.sort.reorder(sequence);
            self.refresh_view();
        }
    }

    pub fn reset_sort(&mut self) {
        self.sort.clear();
        self.status_message = "Sort cleared.".to_string();
        self.refresh_view();
    }

    // -------------------------------------------------------------------------
    // Filter operations
    // -------------------------------------------------------------------------

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
        self.refresh_view();
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
        self.refresh_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ClientStatus, ClientType, SortDirection};
    use crate::core::store::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn make_client(id: &str, name: &str, client_type: ClientType) -> Client {
        let ts = Utc.with_ymd_and_hms(2025, 5, 5, 5, 5, 5).unwrap();
        Client {
            id: id.to_string(),
            name: name.to_string(),
            client_type,
            email: format!("{}@startup.co", id.to_lowercase()),
            status: ClientStatus::Active,
            updated_by: "Wei Chen".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn state() -> AppState {
        let clients = vec![
            make_client("A", "Zed", ClientType::Corporate),
            make_client("B", "amy", ClientType::Individual),
            make_client("C", "Mia", ClientType::Corporate),
        ];
        let sort = SortEngine::new(Box::new(MemoryStore::new()));
        AppState::new(clients, sort, ThemeMode::System, false)
    }

    fn visible_ids(state: &AppState) -> Vec<&str> {
        state.visible_clients().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_initial_view_is_source_order() {
        let state = state();
        assert_eq!(visible_ids(&state), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sort_then_filter_pipeline() {
        let mut state = state();
        state.add_sort_field(SortField::Name);
        assert_eq!(visible_ids(&state), vec!["B", "C", "A"]);

        state.set_category(CategoryFilter::Only(ClientType::Corporate));
        assert_eq!(visible_ids(&state), vec!["C", "A"]);

        let id = state.sort.criteria()[0].id.clone();
        state.toggle_sort_direction(&id);
        assert_eq!(state.sort.criteria()[0].direction, SortDirection::Desc);
        assert_eq!(visible_ids(&state), vec!["A", "C"]);

        state.set_query("mia");
        assert_eq!(visible_ids(&state), vec!["C"]);
    }

    #[test]
    fn test_remove_and_reset_restore_source_order() {
        let mut state = state();
        state.add_sort_field(SortField::Name);
        let id = state.sort.criteria()[0].id.clone();
        state.remove_sort_criterion(&id);
        assert_eq!(visible_ids(&state), vec!["A", "B", "C"]);

        state.add_sort_field(SortField::Name);
        state.reset_sort();
        assert!(state.sort.criteria().is_empty());
        assert_eq!(visible_ids(&state), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_move_sort_criterion_reprioritises() {
        let mut state = state();
        state.add_sort_field(SortField::Type);
        state.add_sort_field(SortField::Name);
        assert_eq!(visible_ids(&state), vec!["C", "A", "B"]);

        let type_id = state.sort.criteria()[0].id.clone();
        let name_id = state.sort.criteria()[1].id.clone();
        state.move_sort_criterion(&name_id, &type_id);
        assert_eq!(state.sort.criteria()[0].field, SortField::Name);
        assert_eq!(visible_ids(&state), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_clearing_query_restores_view() {
        let mut state = state();
        state.add_sort_field(SortField::Name);
        state.set_query("ZED");
        assert_eq!(visible_ids(&state), vec!["A"]);
        assert_eq!(state.filter.query, "ZED");
        state.set_query("");
        assert!(state.filter.is_empty());
        assert_eq!(visible_ids(&state), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_replace_clients_keeps_configuration() {
        let mut state = state();
        state.add_sort_field(SortField::Name);
        state.set_query("be");
        state.replace_clients(vec![
            make_client("X", "Bea", ClientType::NonProfit),
            make_client("Y", "Abe", ClientType::Government),
            make_client("Z", "Quinn", ClientType::Government),
        ]);
        assert_eq!(visible_ids(&state), vec!["Y", "X"]);
        assert_eq!(state.visible_snapshot().len(), 2);
    }

    #[test]
    fn test_regenerate_keeps_count_and_sort() {
        let mut state = state();
        state.add_sort_field(SortField::Name);
        state.regenerate_clients();
        assert_eq!(state.clients.len(), 3);
        assert_eq!(state.view.len(), 3);
        assert_eq!(state.sort.criteria().len(), 1);
        let names: Vec<String> = state
            .visible_clients()
            .map(|c| c.name.to_lowercase())
            .collect();
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_export_visible_writes_view_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut state = state();
        state.add_sort_field(SortField::Name);
        state.set_category(CategoryFilter::Only(ClientType::Corporate));

        let dest = dir.path().join("view.json");
        let n = state.export_visible(ExportFormat::Json, &dest).unwrap();
        assert_eq!(n, 2);
        let written: Vec<Client> =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        let ids: Vec<_> = written.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A"]);
    }

    #[test]
    fn test_export_visible_reports_unwritable_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = state();
        let dest = dir.path().join("missing").join("view.csv");
        let err = state.export_visible(ExportFormat::Csv, &dest).unwrap_err();
        assert!(err.to_string().contains("view.csv"));
    }
}
