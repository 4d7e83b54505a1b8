//! Configuration types

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Holding storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Holding storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the portfolio
    #[serde(default = "default_holdings_path")]
    pub holdings_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            holdings_path: default_holdings_path(),
        }
    }
}

fn default_holdings_path() -> String {
    "holdings.json".to_string()
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
