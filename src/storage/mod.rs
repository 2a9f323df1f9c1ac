//! List persistence.
//!
//! The list is stored as TOML:
//!
//! ```toml
//! [[items]]
//! id = 1
//! label = "milk"
//! ```
//!
//! Only ids and labels are written. Whether an item is checked off is UI
//! state and every item loads active.

use crate::config::{default_list_path, expand_home, StorageConfig};
use crate::store::{ItemId, ListState};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{} lists item id {id} more than once", .path.display())]
    DuplicateId { path: PathBuf, id: ItemId },
    #[error("failed to serialize list: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct ListFile {
    path: PathBuf,
}

impl ListFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `None` when saving is switched off.
    pub fn from_config(config: &StorageConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let path = match &config.list_path {
            Some(p) => expand_home(p),
            None => default_list_path(),
        };
        Some(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list. A missing file is an empty list. A file that repeats an
    /// id is rejected.
    pub fn load(&self) -> Result<ListState, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ListState::default()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let list: ListState = toml::from_str(&contents).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        if let Some(id) = list.duplicate_id() {
            return Err(StorageError::DuplicateId {
                path: self.path.clone(),
                id,
            });
        }
        debug!(path = %self.path.display(), items = list.len(), "list loaded");
        Ok(list)
    }

    /// Write the list next to its final location, then move it into place so
    /// a failed write never leaves a truncated file behind.
    pub fn save(&self, list: &ListState) -> Result<(), StorageError> {
        let contents = toml::to_string_pretty(list)?;
        let write_err = |source: io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, contents).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)?;

        debug!(path = %self.path.display(), items = list.len(), "list saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Item;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = ListFile::new(dir.path().join("nested").join("list.toml"));

        let mut checked = Item::new(2, "eggs");
        checked.active = false;
        let list = ListState {
            items: vec![Item::new(1, "milk"), checked, Item::new(5, "crème fraîche")],
        };
        file.save(&list).unwrap();

        let loaded = file.load().unwrap();
        let labels: Vec<_> = loaded.items.iter().map(|i| (i.id, i.label.as_str())).collect();
        assert_eq!(labels, [(1, "milk"), (2, "eggs"), (5, "crème fraîche")]);
        // Check-offs are not persisted
        assert!(loaded.items.iter().all(|i| i.active));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = ListFile::new(dir.path().join("list.toml"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.toml");
        std::fs::write(&path, "[[items]]\nid = \"one\"\n").unwrap();

        let err = ListFile::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
        assert!(err.to_string().contains("list.toml"));
    }

    #[test]
    fn test_repeated_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.toml");
        std::fs::write(
            &path,
            "[[items]]\nid = 1\nlabel = \"milk\"\n\n[[items]]\nid = 1\nlabel = \"eggs\"\n",
        )
        .unwrap();

        let err = ListFile::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::DuplicateId { id: 1, .. }));
        assert!(err.to_string().contains("id 1"));
    }

    #[test]
    fn test_disabled_storage() {
        let config = StorageConfig {
            enabled: false,
            list_path: Some("/tmp/x.toml".into()),
        };
        assert!(ListFile::from_config(&config).is_none());

        let config = StorageConfig {
            enabled: true,
            list_path: Some("/tmp/x.toml".into()),
        };
        assert_eq!(
            ListFile::from_config(&config).unwrap().path(),
            Path::new("/tmp/x.toml")
        );
    }
}
