//! Board Actions
//!
//! Reducer-style description of every board mutation, so the UI store can
//! funnel all changes through `Board::apply` and persist afterwards.

use crate::domain::{ColumnId, TaskDraft, TaskId};

/// A user intent against the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    AddColumn { title: String, color: String },
    EditColumn { column_id: ColumnId, title: String, color: String },
    DeleteColumn { column_id: ColumnId },
    ReorderColumn { dragged: ColumnId, target: ColumnId },
    AddTask { column_id: ColumnId, draft: TaskDraft },
    EditTask { task_id: TaskId, draft: TaskDraft },
    DeleteTask { task_id: TaskId },
    MoveTask { task_id: TaskId, column_id: ColumnId },
}

impl BoardAction {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            BoardAction::AddColumn { .. } => "add_column",
            BoardAction::EditColumn { .. } => "edit_column",
            BoardAction::DeleteColumn { .. } => "delete_column",
            BoardAction::ReorderColumn { .. } => "reorder_column",
            BoardAction::AddTask { .. } => "add_task",
            BoardAction::EditTask { .. } => "edit_task",
            BoardAction::DeleteTask { .. } => "delete_task",
            BoardAction::MoveTask { .. } => "move_task",
        }
    }
}

/// Outcome of an applied action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    ColumnAdded(ColumnId),
    ColumnEdited,
    ColumnDeleted { removed_tasks: usize },
    ColumnsReordered,
    TaskAdded(TaskId),
    TaskEdited,
    TaskDeleted,
    TaskMoved,
    /// Valid request with no observable effect (e.g. moving a task to its own column)
    Unchanged,
}

impl Applied {
    pub fn changed(&self) -> bool {
        !matches!(self, Applied::Unchanged)
    }
}
