use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::storage::{MemoryStorage, Storage, StorageError};

#[derive(Debug, Error)]
pub enum BasketError {
    #[error("basket name is missing")]
    MissingName,
    #[error("basket name `{0}` is not a simple identifier")]
    InvalidName(String),
    #[error("key name is missing")]
    MissingKey,
    #[error("key `{0}` is not a simple identifier")]
    InvalidKey(String),
    #[error("failed to encode value for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn identifier() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier pattern")
    })
}

fn check_name(name: &str) -> Result<(), BasketError> {
    if name.is_empty() {
        return Err(BasketError::MissingName);
    }
    if !identifier().is_match(name) {
        return Err(BasketError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn check_key(key: &str) -> Result<(), BasketError> {
    if key.is_empty() {
        return Err(BasketError::MissingKey);
    }
    if !identifier().is_match(key) {
        return Err(BasketError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// The storage a basket actually writes to.
#[derive(Debug)]
pub enum Backend<S> {
    Primary(S),
    Fallback(MemoryStorage),
}

impl<S: Storage> Storage for Backend<S> {
    fn is_available(&self) -> bool {
        match self {
            Backend::Primary(s) => s.is_available(),
            Backend::Fallback(s) => s.is_available(),
        }
    }

    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            Backend::Primary(s) => s.get_item(key),
            Backend::Fallback(s) => s.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        match self {
            Backend::Primary(s) => s.set_item(key, value),
            Backend::Fallback(s) => s.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            Backend::Primary(s) => s.remove_item(key),
            Backend::Fallback(s) => s.remove_item(key),
        }
    }

    fn keys(&self) -> Vec<String> {
        match self {
            Backend::Primary(s) => s.keys(),
            Backend::Fallback(s) => s.keys(),
        }
    }
}

/// Namespaced view over a [`Storage`].
///
/// Every key is stored as `"{basket}.{key}"` with its value encoded as JSON
/// text, so several baskets can share one backend without clashing.
///
/// ```
/// use ordkit_basket::Basket;
///
/// let mut prefs = Basket::in_memory("prefs").unwrap();
/// prefs.set("volume", &7).unwrap();
/// assert_eq!(prefs.get("volume", 0).unwrap(), 7);
/// assert_eq!(prefs.get("missing", 3).unwrap(), 3);
/// ```
#[derive(Debug)]
pub struct Basket<S = MemoryStorage> {
    name: String,
    prefix: String,
    storage: Backend<S>,
}

impl Basket<MemoryStorage> {
    pub fn in_memory(name: &str) -> Result<Self, BasketError> {
        Self::open(name, None)
    }
}

impl<S: Storage> Basket<S> {
    /// Opens basket `name` on `storage`. An absent or unavailable storage is
    /// replaced by a fresh [`MemoryStorage`].
    pub fn open(name: &str, storage: Option<S>) -> Result<Self, BasketError> {
        check_name(name)?;

        let storage = match storage {
            Some(s) if s.is_available() => Backend::Primary(s),
            Some(_) => {
                warn!(basket = name, "storage backend unavailable, keeping values in memory");
                Backend::Fallback(MemoryStorage::new())
            }
            None => {
                debug!(basket = name, "no storage backend supplied, keeping values in memory");
                Backend::Fallback(MemoryStorage::new())
            }
        };

        Ok(Self {
            name: name.to_string(),
            prefix: format!("{name}."),
            storage,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` when writes reach the caller's storage rather than the
    /// in-memory fallback.
    pub fn is_persistent(&self) -> bool {
        matches!(self.storage, Backend::Primary(_))
    }

    pub fn storage(&self) -> &Backend<S> {
        &self.storage
    }

    fn item_key(&self, key: &str) -> Result<String, BasketError> {
        check_key(key)?;
        Ok(format!("{}{key}", self.prefix))
    }

    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), BasketError> {
        let item_key = self.item_key(key)?;
        let text = serde_json::to_string(value).map_err(|source| BasketError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.set_item(&item_key, text)?;
        Ok(())
    }

    /// Stored value for `key`, or `default` when it is absent or cannot be
    /// decoded as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, BasketError> {
        let item_key = self.item_key(key)?;
        let Some(text) = self.storage.get_item(&item_key) else {
            return Ok(default);
        };
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                debug!(basket = %self.name, key, error = %e, "undecodable stored value, using default");
                Ok(default)
            }
        }
    }

    pub fn contains(&self, key: &str) -> Result<bool, BasketError> {
        let item_key = self.item_key(key)?;
        Ok(self.storage.get_item(&item_key).is_some())
    }

    pub fn remove(&mut self, key: &str) -> Result<(), BasketError> {
        let item_key = self.item_key(key)?;
        self.storage.remove_item(&item_key)?;
        Ok(())
    }

    /// Keys of this basket, without the namespace prefix.
    pub fn keys(&self) -> Vec<String> {
        self.storage
            .keys()
            .into_iter()
            .filter_map(|k| k.strip_prefix(&self.prefix).map(str::to_string))
            .collect()
    }

    /// Removes every key of this basket and nothing else. Returns how many
    /// were removed.
    pub fn clean(&mut self) -> Result<usize, BasketError> {
        let owned: Vec<String> = self
            .storage
            .keys()
            .into_iter()
            .filter(|k| k.starts_with(&self.prefix))
            .collect();
        for key in &owned {
            self.storage.remove_item(key)?;
        }
        debug!(basket = %self.name, removed = owned.len(), "cleaned basket");
        Ok(owned.len())
    }
}
