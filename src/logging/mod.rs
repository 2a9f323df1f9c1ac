//! Diagnostic logging.
//!
//! The UI owns the terminal, so `tracing` output goes to a file in the
//! configured log directory (default: `~/.local/share/shoplist/logs/`), one
//! file per day named `shoplist_<date>.log`. `RUST_LOG` takes precedence over
//! the configured level.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    let log_path = log_file_path(&log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter(&config.level))
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %log_path.display(), "logging initialized");
    Ok(Some(log_path))
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("shoplist={}", level)))
}

fn log_file_path(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    log_dir.join(format!("shoplist_{}.log", date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_log_file_name() {
        let path = log_file_path(Path::new("/var/log/shoplist"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("shoplist_"));
        assert!(name.ends_with(".log"));
        assert_eq!(path.parent(), Some(Path::new("/var/log/shoplist")));
    }
}
