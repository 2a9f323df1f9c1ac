//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Timing of the check-off countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// How long the user has to take back a check-off.
    #[serde(default = "default_cancel_timeout")]
    pub cancel_timeout_ms: u64,
    /// Progress bar refresh interval.
    #[serde(default = "default_progress_interval")]
    pub progress_interval_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            cancel_timeout_ms: default_cancel_timeout(),
            progress_interval_ms: default_progress_interval(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_notifications: default_max_notifications(),
        }
    }
}

/// Where and whether the list is saved between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Overrides the platform data directory. A leading `~/` is expanded.
    #[serde(default)]
    pub list_path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            list_path: None,
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs only go
/// to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Shown in the status bar.
    #[serde(default)]
    pub name: Option<String>,
}

fn default_true() -> bool {
    true
}
fn default_cancel_timeout() -> u64 {
    2000
}
fn default_progress_interval() -> u64 {
    10
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_max_notifications() -> usize {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/shoplist/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
