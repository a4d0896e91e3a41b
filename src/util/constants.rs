// ClientDesk - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ClientDesk";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ClientDesk";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Persistence
// =============================================================================

/// Key under which the serialised sort criteria are stored.
pub const SORT_CONFIG_KEY: &str = "client-sort-config";

/// Key/value store file name (stored in the platform data directory).
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Maximum size of the key/value store file in bytes.
///
/// The store only ever holds a handful of small JSON values. Anything larger
/// is treated as corrupt rather than read into memory.
pub const MAX_STORAGE_FILE_SIZE: u64 = 1024 * 1024; // 1 MB

// =============================================================================
// Mock data
// =============================================================================

/// Number of mock clients generated when nothing else is configured.
pub const DEFAULT_CLIENT_COUNT: usize = 50;

/// Minimum configurable client count.
pub const MIN_CLIENT_COUNT: usize = 1;

/// Hard upper bound on generated clients. The table is not virtualised,
/// so this keeps frame times reasonable.
pub const MAX_CLIENT_COUNT: usize = 5_000;

/// First numeric suffix used for generated client IDs (`CL-1000`).
pub const CLIENT_ID_BASE: usize = 1000;

/// Window (days before "now") in which `created_at` timestamps fall.
pub const MOCK_HISTORY_DAYS: i64 = 365;

// =============================================================================
// UI defaults
// =============================================================================

/// Date format for the Created/Updated table columns (e.g. "Mar 4, 2025").
pub const TABLE_DATE_FORMAT: &str = "%b %-d, %Y";

/// Width of the search box in the toolbar.
pub const SEARCH_BOX_WIDTH: f32 = 250.0;

/// Minimum pointer travel (points) before a sort criterion drag begins.
pub const DRAG_ACTIVATION_DISTANCE: f32 = 8.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
