//! Durable key/value preferences.
//!
//! The browser build persists to `window.localStorage`; native builds (tests,
//! desktop) keep values in memory for the lifetime of the store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Failure reported by the underlying storage mechanism
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read preference '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write preference '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// A single-namespace string preference store
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same backing map, so a clone handed to a
/// second "session" observes what the first one wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage` backed store
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Platform default store
pub fn default_store() -> Rc<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("space-x_theme"), Ok(None));
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::new();
        store.set("space-x_theme", "dark").unwrap();
        store.set("space-x_theme", "light").unwrap();
        assert_eq!(store.get("space-x_theme"), Ok(Some("light".to_string())));
    }

    #[test]
    fn clones_share_backing_values() {
        let first = MemoryStore::new();
        let second = first.clone();
        first.set("k", "v").unwrap();
        assert_eq!(second.get("k"), Ok(Some("v".to_string())));
    }
}
