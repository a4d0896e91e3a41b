// ClientDesk - app/startup.rs
//
// Assembles the initial AppState from resolved options: picks the key/value
// store backend, generates the client records and restores the saved sort.

use crate::app::state::AppState;
use crate::core::mock::generate_clients;
use crate::core::sort::SortEngine;
use crate::core::store::{KeyValueStore, MemoryStore};
use crate::platform::config::ThemeMode;
use crate::platform::store::FileStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Everything needed to build the initial state, after CLI and config.toml
/// have been merged.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    /// Number of mock clients to generate.
    pub client_count: usize,
    /// RNG seed; `None` = random.
    pub seed: Option<u64>,
    /// Key/value store file.
    pub storage_path: PathBuf,
    /// Keep everything in memory; nothing is written to disk.
    pub ephemeral: bool,
    pub theme: ThemeMode,
    pub debug_mode: bool,
}

/// Open the configured store backend.
pub fn open_store(options: &StartupOptions) -> Box<dyn KeyValueStore> {
    if options.ephemeral {
        tracing::info!("Ephemeral session: sort preferences will not be saved");
        Box::new(MemoryStore::new())
    } else {
        tracing::info!(path = %options.storage_path.display(), "Using storage file");
        Box::new(FileStore::new(&options.storage_path))
    }
}

/// Build the initial application state.
pub fn build_state(options: &StartupOptions) -> AppState {
    let seed = options.seed.unwrap_or_else(rand::random);
    tracing::info!(count = options.client_count, seed, "Generating clients");
    let mut rng = StdRng::seed_from_u64(seed);
    let clients = generate_clients(options.client_count, &mut rng, chrono::Utc::now());

    let sort = SortEngine::new(open_store(options));
    let mut state = AppState::new(clients, sort, options.theme, options.debug_mode);
    state.status_message = format!("Loaded {} clients.", state.clients.len());
    state
}
