pub mod model;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig, StorageConfig};

const APP_DIR: &str = "shoplist";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    check_timestamp_format(&config.ui.timestamp_format)
        .with_context(|| format!("Invalid [ui] section in {}", path.display()))?;
    Ok(config)
}

/// Reject strftime strings chrono cannot render. Formatting with one panics.
fn check_timestamp_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("timestamp_format {:?} is not a valid strftime format", format);
    }
    Ok(())
}

/// Where the list is kept unless `storage.list_path` says otherwise.
pub fn default_list_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("list.toml")
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.countdown.cancel_timeout_ms, 2000);
        assert_eq!(config.countdown.progress_interval_ms, 10);
        assert!(config.storage.enabled);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[countdown]\ncancel_timeout_ms = 3000\n\n[profile]\nname = \"sam\"").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.countdown.cancel_timeout_ms, 3000);
        assert_eq!(config.countdown.progress_interval_ms, 10);
        assert_eq!(config.profile.name.as_deref(), Some("sam"));
        assert_eq!(config.ui.timestamp_format, "%H:%M");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[countdown\n").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_bad_timestamp_format_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntimestamp_format = \"%Q\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("%Q"));

        std::fs::write(&path, "[ui]\ntimestamp_format = \"%d.%m %H:%M:%S\"\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.ui.timestamp_format, "%d.%m %H:%M:%S");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/list.toml"), PathBuf::from("/tmp/list.toml"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/lists/a.toml"), home.join("lists/a.toml"));
        }
    }
}
