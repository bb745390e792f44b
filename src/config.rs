use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::routes::Route;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub data: DataConfig,
    pub display: DisplayConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
    /// Page shown on start: `"home"` or a route path such as `"/photos"`.
    pub start_view: String,
}

/// Fixture source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory with fixture JSON files overriding the bundled ones.
    pub fixtures_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of guides featured on the home page.
    pub featured_count: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse_enabled: false,
            start_view: "home".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { featured_count: 3 }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/timeless-trips/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Route of the configured start view.
    pub fn start_route(&self) -> Route {
        match self.tui.start_view.trim() {
            "" | "home" => Route::Home,
            view if view.starts_with('/') => Route::parse(view),
            view => Route::parse(&format!("/{view}")),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("timeless-trips").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
