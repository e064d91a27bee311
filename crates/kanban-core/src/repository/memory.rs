//! In-memory snapshot store.

use std::cell::RefCell;

use crate::error::StoreResult;
use crate::snapshot::StoredSnapshot;

use super::SnapshotStore;

/// Keeps the stored blobs in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: RefCell<StoredSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw blobs, e.g. to simulate corrupted storage
    pub fn with_raw(columns: Option<&str>, tasks: Option<&str>) -> Self {
        Self {
            stored: RefCell::new(StoredSnapshot {
                columns: columns.map(str::to_string),
                tasks: tasks.map(str::to_string),
            }),
        }
    }

    pub fn raw(&self) -> StoredSnapshot {
        self.stored.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> StoreResult<StoredSnapshot> {
        Ok(self.stored.borrow().clone())
    }

    fn write(&self, snapshot: &StoredSnapshot) -> StoreResult<()> {
        *self.stored.borrow_mut() = snapshot.clone();
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.stored.borrow_mut() = StoredSnapshot::default();
        Ok(())
    }
}
