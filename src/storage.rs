//! Browser Local Storage
//!
//! Raw key access plus the board's key-value backing.

use kanban_core::{BlobStore, KeyedStore, StoreError, StoreResult};
use tracing::warn;

use crate::config::AppConfig;

fn local_storage() -> StoreResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
}

fn get(key: &str) -> StoreResult<Option<String>> {
    local_storage()?
        .get_item(key)
        .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
}

fn set(key: &str, value: &str) -> StoreResult<()> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| StoreError::Io(format!("{e:?}")))
}

fn remove(key: &str) -> StoreResult<()> {
    local_storage()?
        .remove_item(key)
        .map_err(|e| StoreError::Io(format!("{e:?}")))
}

/// Read a key, treating storage errors as absent
pub fn read_key(key: &str) -> Option<String> {
    get(key).unwrap_or_else(|e| {
        warn!(key, error = %e, "local storage read failed");
        None
    })
}

pub fn write_key(key: &str, value: &str) {
    if let Err(e) = set(key, value) {
        warn!(key, error = %e, "local storage write failed");
    }
}

pub fn remove_key(key: &str) {
    if let Err(e) = remove(key) {
        warn!(key, error = %e, "local storage remove failed");
    }
}

/// Browser `localStorage` as a blob store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BlobStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        remove(key)
    }
}

/// Board snapshot kept as two JSON blobs in `localStorage`
pub type LocalStorageStore = KeyedStore<BrowserStorage>;

pub fn board_store(config: &AppConfig) -> LocalStorageStore {
    KeyedStore::new(BrowserStorage, config.columns_key.clone(), config.tasks_key.clone())
}
