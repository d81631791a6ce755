//! Storage backends: string keys to string values.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat string key/value store.
pub trait Storage {
    /// `false` when the backend cannot be used at all; callers then fall
    /// back to [`MemoryStorage`].
    fn is_available(&self) -> bool {
        true
    }

    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;

    /// All stored keys, in ascending order.
    fn keys(&self) -> Vec<String>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

/// A JSON object on disk, rewritten after every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
    available: bool,
}

impl FileStorage {
    /// Loads `path`, creating it when missing. A file that cannot be read,
    /// parsed or created leaves the storage unavailable.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        match Self::load(&path) {
            Ok(items) => {
                debug!(path = %path.display(), items = items.len(), "opened file storage");
                Self {
                    path,
                    items,
                    available: true,
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "file storage unavailable");
                Self {
                    path,
                    items: BTreeMap::new(),
                    available: false,
                }
            }
        }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::write(path, "{}")?;
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `staged` to disk and only then adopts it, so a failed write
    /// leaves memory matching the file.
    fn commit(&mut self, staged: BTreeMap<String, String>) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(&staged)?;
        fs::write(&self.path, text)?;
        self.items = staged;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let mut staged = self.items.clone();
        staged.insert(key.to_string(), value);
        self.commit(staged)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.items.contains_key(key) {
            return Ok(());
        }
        let mut staged = self.items.clone();
        staged.remove(key);
        self.commit(staged)
    }

    fn keys(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}
