//! Durable key/value storage backing the session, the CLI counterpart of the
//! browser's local storage. Values are plain strings; the session store decides
//! what goes under which key.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Persisted bearer token.
pub const TOKEN_KEY: &str = "token";
/// Persisted role name, kept for consumers that only need the role.
pub const ROLE_KEY: &str = "role";
/// Persisted user record as JSON.
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage file {path} is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage lock poisoned")]
    Poisoned,
}

pub trait DurableStorage: Send + Sync {
    /// Reads a value.
    ///
    /// # Errors
    /// Returns `StorageError` when the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns `StorageError` when the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a value. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns `StorageError` when the backing store cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Writes every pair in one step: either all land or none do.
    ///
    /// # Errors
    /// Returns `StorageError` when the backing store cannot be written.
    fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StorageError>;

    /// Removes every key in one step. Missing keys are not an error.
    ///
    /// # Errors
    /// Returns `StorageError` when the backing store cannot be written.
    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError>;
}

/// Process-local storage, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.remove(key);
        Ok(())
    }

    fn set_items(&self, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        for (key, value) in pairs {
            items.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        for key in keys {
            items.remove(*key);
        }
        Ok(())
    }
}

/// Storage persisted as a single JSON object file. Writes go to a sibling
/// temporary file and are renamed into place, so readers never observe a
/// half-written file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn store(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let payload = serde_json::to_vec_pretty(items).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, payload).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), keys = items.len(), "storage written");
        Ok(())
    }
}

impl DurableStorage for FileStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.load()?.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.store(&items)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut items = self.load()?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.store(&items)
    }

    #[instrument(skip_all, fields(path = %self.path.display(), keys = pairs.len()))]
    fn set_items(&self, pairs: &[(&str, &str)]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut items = self.load()?;
        for (key, value) in pairs {
            items.insert((*key).to_string(), (*value).to_string());
        }
        self.store(&items)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut items = self.load()?;
        let before = items.len();
        for key in keys {
            items.remove(*key);
        }
        if items.len() == before {
            return Ok(());
        }
        self.store(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file() -> PathBuf {
        std::env::temp_dir()
            .join(format!("medinsta-storage-{}", uuid::Uuid::new_v4()))
            .join("session.json")
    }

    #[test]
    fn memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);

        storage.set_item(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), Some("abc".to_string()));

        storage.remove_item(TOKEN_KEY).unwrap();
        storage.remove_item(TOKEN_KEY).unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn file_storage_survives_reopen() {
        let path = temp_file();

        let storage = FileStorage::new(&path);
        storage.set_item(TOKEN_KEY, "abc").unwrap();
        storage.set_item(ROLE_KEY, "doctor").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item(TOKEN_KEY).unwrap(), Some("abc".to_string()));
        assert_eq!(reopened.get_item(ROLE_KEY).unwrap(), Some("doctor".to_string()));

        reopened.remove_item(TOKEN_KEY).unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn file_storage_batches_land_together() {
        let path = temp_file();
        let storage = FileStorage::new(&path);
        storage
            .set_items(&[(TOKEN_KEY, "abc"), (ROLE_KEY, "admin"), (USER_KEY, "{}")])
            .unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item(ROLE_KEY).unwrap(), Some("admin".to_string()));
        assert_eq!(reopened.get_item(USER_KEY).unwrap(), Some("{}".to_string()));

        reopened.remove_items(&[TOKEN_KEY, ROLE_KEY, USER_KEY]).unwrap();
        reopened.remove_items(&[TOKEN_KEY]).unwrap();
        for key in [TOKEN_KEY, ROLE_KEY, USER_KEY] {
            assert_eq!(storage.get_item(key).unwrap(), None);
        }

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn file_storage_missing_file_reads_empty() {
        let storage = FileStorage::new(temp_file());
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
        storage.remove_item(USER_KEY).unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn file_storage_reports_corruption() {
        let path = temp_file();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get_item(TOKEN_KEY),
            Err(StorageError::Corrupt { .. })
        ));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
