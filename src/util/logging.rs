// ClientDesk - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Client records are never logged above debug level.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive from the competing sources.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
/// Returns `None` when RUST_LOG should be used as-is.
fn filter_directive(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> Option<String> {
    if env_set {
        None
    } else if debug_flag {
        Some("debug".to_string())
    } else if let Some(level) = config_level {
        Some(level.to_string())
    } else {
        Some(super::constants::DEFAULT_LOG_LEVEL.to_string())
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_set = std::env::var("RUST_LOG").is_ok();
    let filter = match filter_directive(env_set, debug_flag, config_level) {
        None => EnvFilter::from_default_env(),
        Some(directive) => EnvFilter::new(directive),
    };

    // try_init: a second call (e.g. from tests) must not panic.
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialised; keeping existing subscriber");
        return;
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
