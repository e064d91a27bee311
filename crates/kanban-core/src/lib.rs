//! Kanban Board Engine
//!
//! Layered like the app that uses it:
//! - domain: columns, tasks, priorities, assignees
//! - board: the snapshot and every mutation on it
//! - drag: drag-session state machine
//! - ordering: per-column display order
//! - snapshot / repository: stored form, validation and storage traits
//! - identity / session: who owns the board and when it is persisted

pub mod domain;
pub mod board;
pub mod drag;
pub mod ordering;
pub mod snapshot;
pub mod repository;
pub mod identity;
pub mod session;
pub mod defaults;
pub mod error;

pub use board::{Applied, Board, BoardAction, IdGenerator, SequentialIds, UuidIds};
pub use domain::{Assignee, Column, ColumnId, Entity, Priority, Task, TaskDraft, TaskId};
pub use drag::{DragOrigin, DragPayload, DragSession, DragTracker, DropIntent, DropZone};
pub use error::{AuthError, BoardError, BoardResult, SnapshotError, StoreError, StoreResult};
pub use identity::{IdentityProvider, User};
pub use repository::{BlobStore, KeyedStore, MemoryStore, SnapshotStore};
pub use session::BoardSession;
pub use snapshot::StoredSnapshot;
