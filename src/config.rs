use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/message_board.json";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const API_BASE_ENV: &str = "MESSAGE_BOARD_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the backend, without the `/api` prefix.
    pub api_base: String,
    pub request_timeout_secs: u64,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: 10,
            window_title: "Message board".to_string(),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Apply the `--api-base` / `MESSAGE_BOARD_API_BASE` override, if any.
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(api_base) = api_base.filter(|value| !value.trim().is_empty()) {
            self.api_base = api_base;
        }
        self
    }
}

/// Read the config file, falling back to defaults when it is missing or
/// malformed. This is the lowest layer: `MESSAGE_BOARD_API_BASE` and then
/// `--api-base` are applied on top via [`AppConfig::with_api_base`].
pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Failed to parse board config {}: {err}; using defaults",
                    path.display()
                );
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Board config {} not readable ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

/// Write the effective config (overrides included), as `config init` does.
pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
