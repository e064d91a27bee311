//! Fresh identifiers for new columns and tasks.

use std::cell::Cell;

use uuid::Uuid;

use crate::domain::{ColumnId, TaskId};

/// Source of fresh entity ids
pub trait IdGenerator {
    fn column_id(&self) -> ColumnId;
    fn task_id(&self) -> TaskId;
}

/// Random ids: `col-<uuid>` / `task-<uuid>`
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn column_id(&self) -> ColumnId {
        ColumnId::new(format!("col-{}", Uuid::new_v4()))
    }

    fn task_id(&self) -> TaskId {
        TaskId::new(format!("task-{}", Uuid::new_v4()))
    }
}

/// Deterministic ids (`col-gen-1`, `task-gen-2`, ...)
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&self) -> u64 {
        let n = self.next.get() + 1;
        self.next.set(n);
        n
    }
}

impl IdGenerator for SequentialIds {
    fn column_id(&self) -> ColumnId {
        ColumnId::new(format!("col-gen-{}", self.bump()))
    }

    fn task_id(&self) -> TaskId {
        TaskId::new(format!("task-gen-{}", self.bump()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_prefixed_and_unique() {
        let ids = UuidIds;
        let a = ids.column_id();
        let b = ids.column_id();
        assert!(a.as_str().starts_with("col-"));
        assert!(ids.task_id().as_str().starts_with("task-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.column_id().as_str(), "col-gen-1");
        assert_eq!(ids.task_id().as_str(), "task-gen-2");
    }
}
