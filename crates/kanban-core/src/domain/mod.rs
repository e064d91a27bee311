//! Domain Layer
//!
//! Contains the board entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for serialization).

mod entity;
mod column;
mod task;
mod assignee;

pub use entity::{Entity, ColumnId, TaskId};
pub use column::Column;
pub use task::{Task, TaskDraft, Priority};
pub use assignee::{Assignee, ASSIGNEES, find_assignee};
