use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DirectoryConfig;

use super::{KeyValueStorage, StorageError};

/// Storage backed by a flat TOML table of string values.
///
/// A missing file reads as empty. Every `set` rewrites the whole file and
/// creates parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the location resolved by `config.storage_path()`.
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(config.storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ParseError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());

        let content =
            toml::to_string(&table).map_err(|e| StorageError::SerializeError { source: e })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }

        fs::write(&self.path, content).map_err(|e| StorageError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), key, "storage value written");
        Ok(())
    }
}
