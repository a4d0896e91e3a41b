// ClientDesk - tests/e2e_pipeline.rs
//
// End-to-end tests for the sort -> filter pipeline.
//
// These tests use the real file-backed store on a temporary directory, the
// real mock generator and the real export writers. No UI is involved; the
// AppState methods are exactly what the panels call.

use chrono::{TimeZone, Utc};
use clientdesk::app::state::AppState;
use clientdesk::core::export::ExportFormat;
use clientdesk::core::filter::{apply_filters, CategoryFilter, FilterState};
use clientdesk::core::mock::generate_clients;
use clientdesk::core::model::{Client, ClientStatus, ClientType, SortDirection, SortField};
use clientdesk::core::sort::{move_criterion, SortEngine};
use clientdesk::core::store::{KeyValueStore, MemoryStore};
use clientdesk::platform::config::ThemeMode;
use clientdesk::platform::store::FileStore;
use clientdesk::util::constants::SORT_CONFIG_KEY;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

fn client(id: &str, name: &str) -> Client {
    let ts = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
    Client {
        id: id.to_string(),
        name: name.to_string(),
        client_type: ClientType::Individual,
        email: format!("{}@example.com", name.to_lowercase()),
        status: ClientStatus::Active,
        updated_by: "Sarah Miller".to_string(),
        created_at: ts,
        updated_at: ts,
    }
}

fn zed_and_amy() -> Vec<Client> {
    vec![client("A", "Zed"), client("B", "amy")]
}

fn ids(clients: &[Client]) -> Vec<&str> {
    clients.iter().map(|c| c.id.as_str()).collect()
}

fn file_engine(dir: &TempDir) -> SortEngine {
    SortEngine::new(Box::new(FileStore::new(dir.path().join("storage.json"))))
}

// =============================================================================
// Reference scenarios
// =============================================================================

/// Name ascending puts "amy" before "Zed" regardless of case.
#[test]
fn e2e_name_sort_is_case_insensitive() {
    let mut engine = SortEngine::new(Box::new(MemoryStore::new()));
    engine.add_criterion(SortField::Name);
    assert_eq!(ids(&engine.apply(&zed_and_amy())), vec!["B", "A"]);
}

/// No criteria and an empty filter leave the records untouched.
#[test]
fn e2e_empty_pipeline_is_identity() {
    let records = zed_and_amy();
    let engine = SortEngine::new(Box::new(MemoryStore::new()));
    let sorted = engine.apply(&records);
    let filter = FilterState::default();
    assert_eq!(filter.apply(&sorted), records);
}

/// A free-text query narrows the output to the matching record.
#[test]
fn e2e_query_selects_single_record() {
    let mut filter = FilterState::default();
    filter.set_query("amy");
    assert_eq!(ids(&filter.apply(&zed_and_amy())), vec!["B"]);
}

// =============================================================================
// Persistence
// =============================================================================

/// Criteria written through a FileStore are restored by a fresh engine,
/// in the same order and with the same ids and directions.
#[test]
fn e2e_sort_config_round_trips_through_file() {
    let dir = TempDir::new().unwrap();

    let mut engine = file_engine(&dir);
    engine.add_criterion(SortField::Status);
    engine.add_criterion(SortField::UpdatedAt);
    let updated_id = engine.criteria()[1].id.clone();
    engine.toggle_direction(&updated_id);
    let saved = engine.criteria().to_vec();
    drop(engine);

    let restored = file_engine(&dir);
    assert_eq!(restored.criteria(), saved.as_slice());
    assert_eq!(restored.criteria()[1].direction, SortDirection::Desc);
}

/// Drag reorders and removals are written through as well: a fresh engine
/// over the same file sees each intermediate sequence.
#[test]
fn e2e_reorder_and_remove_round_trip_through_file() {
    let dir = TempDir::new().unwrap();

    let mut engine = file_engine(&dir);
    engine.add_criterion(SortField::Name);
    engine.add_criterion(SortField::CreatedAt);
    let name_id = engine.criteria()[0].id.clone();
    let created_id = engine.criteria()[1].id.clone();
    engine.toggle_direction(&created_id);

    let moved = move_criterion(engine.criteria(), &created_id, &name_id).unwrap();
    engine.reorder(moved);
    assert_eq!(engine.criteria()[0].id, created_id);
    let restored = file_engine(&dir);
    assert_eq!(restored.criteria(), engine.criteria());
    assert_eq!(restored.criteria()[0].field, SortField::CreatedAt);
    assert_eq!(restored.criteria()[0].direction, SortDirection::Desc);
    assert_eq!(restored.criteria()[1].id, name_id);

    engine.remove_criterion(&created_id);
    let restored = file_engine(&dir);
    assert_eq!(restored.criteria(), engine.criteria());
    assert_eq!(restored.criteria().len(), 1);
    assert_eq!(restored.criteria()[0].id, name_id);
    assert_eq!(restored.criteria()[0].direction, SortDirection::Asc);
}

/// The persisted value is a JSON array of {id, field, direction} objects.
#[test]
fn e2e_persisted_value_shape() {
    let dir = TempDir::new().unwrap();
    let mut engine = file_engine(&dir);
    engine.add_criterion(SortField::CreatedAt);
    drop(engine);

    let store = FileStore::new(dir.path().join("storage.json"));
    let raw = store.get(SORT_CONFIG_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["field"], "createdAt");
    assert_eq!(entries[0]["direction"], "asc");
    assert!(entries[0]["id"].as_str().is_some_and(|id| !id.is_empty()));
}

/// A corrupt storage file starts the engine with no criteria, and the next
/// mutation overwrites it with a valid value.
#[test]
fn e2e_corrupt_storage_recovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut engine = file_engine(&dir);
    assert!(engine.criteria().is_empty());

    engine.add_criterion(SortField::Email);
    let restored = file_engine(&dir);
    assert_eq!(restored.criteria().len(), 1);
    assert_eq!(restored.criteria()[0].field, SortField::Email);
}

// =============================================================================
// Generated data
// =============================================================================

/// Category and query filters combine conjunctively over generated data,
/// and the result preserves the sorted order.
#[test]
fn e2e_generated_data_filter_conjunction() {
    let mut rng = StdRng::seed_from_u64(2024);
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let clients = generate_clients(200, &mut rng, now);

    let mut engine = SortEngine::new(Box::new(MemoryStore::new()));
    engine.add_criterion(SortField::Name);
    let sorted = engine.apply(&clients);

    let mut filter = FilterState::default();
    filter.set_category(CategoryFilter::Only(ClientType::Corporate));
    filter.set_query("CONTACT@");
    let view = apply_filters(&sorted, &filter);

    assert!(!view.is_empty());
    for &i in &view {
        let c = &sorted[i];
        assert_eq!(c.client_type, ClientType::Corporate);
        assert!(c.email.starts_with("contact@"));
    }
    assert!(view.windows(2).all(|w| w[0] < w[1]));
}

/// The full AppState pipeline over a file-backed engine: sort survives a
/// restart while the filter (session-only) does not.
#[test]
fn e2e_state_restart_keeps_sort_not_filter() {
    let dir = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let clients = generate_clients(40, &mut rng, now);

    let mut state = AppState::new(clients.clone(), file_engine(&dir), ThemeMode::Light, false);
    state.add_sort_field(SortField::Type);
    state.add_sort_field(SortField::Name);
    state.set_category(CategoryFilter::Only(ClientType::Individual));
    let first_view = state.visible_snapshot();
    drop(state);

    let state = AppState::new(clients, file_engine(&dir), ThemeMode::Light, false);
    assert_eq!(state.sort.criteria().len(), 2);
    assert!(state.filter.is_empty());
    assert_eq!(state.view.len(), 40);

    let individuals: Vec<Client> = state
        .visible_clients()
        .filter(|c| c.client_type == ClientType::Individual)
        .cloned()
        .collect();
    assert_eq!(individuals, first_view);
}

// =============================================================================
// Export
// =============================================================================

/// CSV export writes the visible view, in view order, with a header row.
#[test]
fn e2e_export_csv_of_visible_view() {
    let dir = TempDir::new().unwrap();
    let records = vec![client("A", "Zed"), client("B", "Kyle"), client("C", "Kim")];
    let engine = SortEngine::new(Box::new(MemoryStore::new()));
    let mut state = AppState::new(records, engine, ThemeMode::System, false);
    state.add_sort_field(SortField::Name);
    state.set_query("k");

    let dest = dir.path().join("clients.csv");
    let n = state.export_visible(ExportFormat::Csv, &dest).unwrap();
    assert_eq!(n, 2);

    let text = std::fs::read_to_string(&dest).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,name,type"));
    assert!(lines[1].starts_with("C,Kim,"));
    assert!(lines[2].starts_with("B,Kyle,"));
}
