// ClientDesk - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Initial state assembly (mock clients + persisted sort)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use clientdesk::app;

pub use clientdesk::core;
pub use clientdesk::platform;
pub use clientdesk::ui;
pub use clientdesk::util;

use clap::Parser;
use std::path::PathBuf;
use util::constants;

/// ClientDesk - client management table with multi-key sorting.
///
/// Browse a generated client list, filter it by category and free text, and
/// sort it by any combination of columns. The sort setup is remembered
/// between launches.
#[derive(Parser, Debug)]
#[command(name = "ClientDesk", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Number of clients to generate (overrides config.toml).
    #[arg(short = 'n', long = "clients")]
    clients: Option<usize>,

    /// Seed for the client generator, for a reproducible data set.
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Key/value store file (defaults to the platform data directory).
    #[arg(long = "storage", value_name = "FILE")]
    storage: Option<PathBuf>,

    /// Keep the sort setup in memory only; nothing is written to disk.
    #[arg(long = "ephemeral")]
    ephemeral: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // configured level can take effect.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, mut warnings) = platform::config::load_config(&platform_paths.config_file());

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "ClientDesk starting"
    );

    // CLI overrides config.toml.
    let client_count = match cli.clients {
        Some(n) if (constants::MIN_CLIENT_COUNT..=constants::MAX_CLIENT_COUNT).contains(&n) => n,
        Some(n) => {
            warnings.push(format!(
                "--clients {n} is outside {}-{}. Using {}.",
                constants::MIN_CLIENT_COUNT,
                constants::MAX_CLIENT_COUNT,
                config.client_count
            ));
            config.client_count
        }
        None => config.client_count,
    };

    let options = app::startup::StartupOptions {
        client_count,
        seed: cli.seed.or(config.seed),
        storage_path: cli
            .storage
            .unwrap_or_else(|| platform_paths.storage_file()),
        ephemeral: cli.ephemeral,
        theme: config.theme,
        debug_mode: cli.debug,
    };

    let mut state = app::startup::build_state(&options);
    state.warnings = warnings;

    tracing::info!(clients = state.clients.len(), "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                constants::APP_NAME,
                constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        constants::APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::ClientDeskApp::new(cc, state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ClientDesk GUI: {e}");
        std::process::exit(1);
    }
}
