// ClientDesk - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ClientDesk data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/clientdesk/ or %APPDATA%\ClientDesk\config\)
    pub config_dir: PathBuf,

    /// Data directory holding the key/value store.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }

    /// Full path of the key/value store file.
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir.join(constants::STORAGE_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[data]` section.
    pub data: DataSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "system", "light" or "dark".
    pub theme: Option<String>,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Number of mock clients to generate.
    pub client_count: Option<usize>,
    /// Fixed RNG seed for reproducible mock data.
    pub seed: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Colour theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Follow the operating system.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// The next mode in the header toggle's cycle.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "system" => Some(ThemeMode::System),
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- UI --
    pub theme: ThemeMode,

    // -- Data --
    /// Number of mock clients to generate.
    pub client_count: usize,
    /// RNG seed; `None` = random each launch.
    pub seed: Option<u64>,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            client_count: constants::DEFAULT_CLIENT_COUNT,
            seed: None,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    validate(raw)
}

/// Validate a parsed config, accumulating all problems as warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match ThemeMode::parse(theme) {
            Some(mode) => config.theme = mode,
            None => warnings.push(format!(
                "[ui] theme = \"{theme}\" is not recognised. \
                 Expected \"system\", \"light\" or \"dark\". Using default (system).",
            )),
        }
    }

    // -- Data: client_count --
    if let Some(count) = raw.data.client_count {
        if (constants::MIN_CLIENT_COUNT..=constants::MAX_CLIENT_COUNT).contains(&count) {
            config.client_count = count;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[data] client_count".to_string(),
                value: count.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_CLIENT_COUNT,
                    constants::MAX_CLIENT_COUNT
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_CLIENT_COUNT
            ));
        }
    }

    // -- Data: seed --
    config.seed = raw.data.seed;

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}
