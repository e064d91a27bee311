//! Keyed Snapshot Store
//!
//! Lays the snapshot out as two string blobs in any key-value store
//! (browser `localStorage` in the app).

use tracing::error;

use crate::error::StoreResult;
use crate::snapshot::StoredSnapshot;

use super::SnapshotStore;

/// Minimal string key-value storage
pub trait BlobStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Columns and tasks under their own keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedStore<B> {
    blobs: B,
    columns_key: String,
    tasks_key: String,
}

impl<B> KeyedStore<B> {
    pub fn new(blobs: B, columns_key: impl Into<String>, tasks_key: impl Into<String>) -> Self {
        Self {
            blobs,
            columns_key: columns_key.into(),
            tasks_key: tasks_key.into(),
        }
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }
}

impl<B: BlobStore> KeyedStore<B> {
    fn put(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        match value {
            Some(value) => self.blobs.set(key, value),
            None => self.blobs.remove(key),
        }
    }
}

impl<B: BlobStore> SnapshotStore for KeyedStore<B> {
    fn read(&self) -> StoreResult<StoredSnapshot> {
        Ok(StoredSnapshot {
            columns: self.blobs.get(&self.columns_key)?,
            tasks: self.blobs.get(&self.tasks_key)?,
        })
    }

    /// Writes columns, then tasks. A failed tasks write puts the old
    /// columns back so the pair never mixes two saves.
    fn write(&self, snapshot: &StoredSnapshot) -> StoreResult<()> {
        let previous_columns = self.blobs.get(&self.columns_key)?;
        if let Some(columns) = &snapshot.columns {
            self.blobs.set(&self.columns_key, columns)?;
        }
        if let Some(tasks) = &snapshot.tasks {
            if let Err(e) = self.blobs.set(&self.tasks_key, tasks) {
                if let Err(rollback) = self.put(&self.columns_key, previous_columns.as_deref()) {
                    error!(error = %rollback, "could not restore columns after failed tasks write");
                }
                return Err(e);
            }
        }
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.blobs.remove(&self.columns_key)?;
        self.blobs.remove(&self.tasks_key)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::board::SequentialIds;
    use crate::defaults::default_board;
    use crate::domain::TaskDraft;
    use crate::error::StoreError;

    /// Map-backed blobs that can refuse writes to one key
    #[derive(Default)]
    struct Blobs {
        map: RefCell<HashMap<String, String>>,
        reject: RefCell<Option<String>>,
    }

    impl BlobStore for Blobs {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            Ok(self.map.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.reject.borrow().as_deref() == Some(key) {
                return Err(StoreError::Io("quota exceeded".into()));
            }
            self.map.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> StoreResult<()> {
            self.map.borrow_mut().remove(key);
            Ok(())
        }
    }

    fn store() -> KeyedStore<Blobs> {
        KeyedStore::new(Blobs::default(), "kanbanColumns", "kanbanTasks")
    }

    #[test]
    fn test_uses_both_keys() {
        let store = store();
        store.save_board(&default_board()).unwrap();

        let map = store.blobs().map.borrow();
        assert!(map.contains_key("kanbanColumns"));
        assert!(map.contains_key("kanbanTasks"));
        drop(map);

        assert_eq!(store.load_board(), default_board());
        store.clear().unwrap();
        assert!(store.blobs().map.borrow().is_empty());
    }

    #[test]
    fn test_failed_tasks_write_keeps_previous_save() {
        let ids = SequentialIds::new();
        let store = store();
        let mut saved = default_board();
        saved.add_column_with(&ids, "Saved", "#111");
        store.save_board(&saved).unwrap();

        let mut next = saved.clone();
        let fresh = next.add_column_with(&ids, "Fresh", "#222");
        next.add_task_with(&ids, &fresh.id, TaskDraft::titled("In fresh")).unwrap();

        *store.blobs().reject.borrow_mut() = Some("kanbanTasks".into());
        assert!(store.save_board(&next).is_err());
        assert_eq!(store.load_board(), saved);
    }

    #[test]
    fn test_failed_first_save_leaves_nothing_behind() {
        let store = store();
        *store.blobs().reject.borrow_mut() = Some("kanbanTasks".into());

        assert!(store.save_board(&default_board()).is_err());
        assert!(store.blobs().map.borrow().is_empty());
    }
}
