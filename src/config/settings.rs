//! Service settings
//!
//! Listen address, static front-end directory, HTTP layer tuning and display
//! preferences. Stored in `config.json`; every field has a default so a
//! missing or partial file is fine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::write_json_atomic;

/// Environment variable overriding `listen_addr`
pub const LISTEN_ADDR_ENV: &str = "EXPENSE_TRACKER_LISTEN_ADDR";

/// Environment variable overriding `static_dir`
pub const STATIC_DIR_ENV: &str = "EXPENSE_TRACKER_STATIC_DIR";

/// Settings for the expense tracker service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Socket address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory of static front-end files served for non-API paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Origins allowed by CORS; `"*"` allows any
    #[serde(default = "default_cors_allow_origins")]
    pub cors_allow_origins: Vec<String>,

    /// Currency symbol for the CLI summary tables
    ///
    /// API payloads and tip text are always in dollars.
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_cors_allow_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            static_dir: None,
            request_timeout_secs: default_request_timeout_secs(),
            cors_allow_origins: default_cors_allow_origins(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Apply `EXPENSE_TRACKER_LISTEN_ADDR` and `EXPENSE_TRACKER_STATIC_DIR`
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(addr) = std::env::var(LISTEN_ADDR_ENV) {
            if !addr.trim().is_empty() {
                self.listen_addr = addr.trim().to_string();
            }
        }
        if let Ok(dir) = std::env::var(STATIC_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.static_dir = Some(PathBuf::from(dir.trim()));
            }
        }
        self
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }

    /// True when CORS should allow every origin
    pub fn cors_allows_any(&self) -> bool {
        self.cors_allow_origins.iter().any(|o| o == "*")
    }
}
