//! Error types for the board engine
//!
//! None of these are fatal: callers degrade to a no-op or to the default
//! board instead of surfacing them to the user.

use thiserror::Error;

use crate::domain::{ColumnId, TaskId};

/// Result type for board mutations
pub type BoardResult<T> = Result<T, BoardError>;

/// A mutation referenced something that is not on the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Stored snapshot failed structural validation
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid column at index {index}: {reason}")]
    InvalidColumn { index: usize, reason: String },

    #[error("invalid task at index {index}: {reason}")]
    InvalidTask { index: usize, reason: String },

    #[error("duplicate column id: {0}")]
    DuplicateColumn(ColumnId),

    #[error("task {task} references missing column {column}")]
    OrphanedTask { task: TaskId, column: ColumnId },
}

/// Persistence adapter failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage write failed: {0}")]
    Io(String),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Identity provider failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}
