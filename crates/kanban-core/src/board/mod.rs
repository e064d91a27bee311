//! Board State
//!
//! The ordered column list plus the task set. All mutations either apply
//! completely or leave the board untouched.

mod action;
mod id_gen;

#[cfg(test)]
mod tests;

pub use action::{Applied, BoardAction};
pub use id_gen::{IdGenerator, SequentialIds, UuidIds};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Column, ColumnId, Task, TaskDraft, TaskId};
use crate::error::{BoardError, BoardResult};

/// A board snapshot: columns in display order and tasks in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl Board {
    /// Build a board from already-validated parts
    pub fn from_parts(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self { columns, tasks }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Number of tasks in a column
    pub fn task_count(&self, column_id: &ColumnId) -> usize {
        self.tasks.iter().filter(|t| &t.column_id == column_id).count()
    }

    fn column_index(&self, id: &ColumnId) -> BoardResult<usize> {
        self.columns
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| BoardError::ColumnNotFound(id.clone()))
    }

    fn task_mut(&mut self, id: &TaskId) -> BoardResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| BoardError::TaskNotFound(id.clone()))
    }

    fn fresh_column_id(&self, ids: &dyn IdGenerator) -> ColumnId {
        loop {
            let id = ids.column_id();
            if !self.has_column(&id) {
                return id;
            }
        }
    }

    fn fresh_task_id(&self, ids: &dyn IdGenerator) -> TaskId {
        loop {
            let id = ids.task_id();
            if self.task(&id).is_none() {
                return id;
            }
        }
    }

    // ========================
    // Column Operations
    // ========================

    /// Append a new column with a fresh id
    pub fn add_column(&mut self, title: impl Into<String>, color: impl Into<String>) -> Column {
        self.add_column_with(&UuidIds, title, color)
    }

    pub fn add_column_with(
        &mut self,
        ids: &dyn IdGenerator,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Column {
        let column = Column::new(self.fresh_column_id(ids), title, color);
        self.columns.push(column.clone());
        column
    }

    /// Replace title and color, keeping the column's position
    pub fn edit_column(&mut self, column_id: &ColumnId, title: impl Into<String>, color: impl Into<String>) -> BoardResult<()> {
        let index = self.column_index(column_id)?;
        let column = &mut self.columns[index];
        column.title = title.into();
        column.color = color.into();
        Ok(())
    }

    /// Remove a column and every task in it. Returns the number of removed tasks.
    pub fn delete_column(&mut self, column_id: &ColumnId) -> BoardResult<usize> {
        let index = self.column_index(column_id)?;
        self.columns.remove(index);
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.column_id != column_id);
        Ok(before - self.tasks.len())
    }

    /// Move `dragged` so it sits immediately before `target`.
    ///
    /// The insertion index is the target's index *after* the dragged column
    /// has been removed, so dragging left-to-right does not overshoot.
    /// Returns whether the order changed.
    pub fn reorder_column(&mut self, dragged: &ColumnId, target: &ColumnId) -> BoardResult<bool> {
        let from = self.column_index(dragged)?;
        self.column_index(target)?;
        if dragged == target {
            return Ok(false);
        }

        let column = self.columns.remove(from);
        // Target is still present: it differs from the removed column
        let to = self
            .columns
            .iter()
            .position(|c| &c.id == target)
            .unwrap_or(self.columns.len());
        self.columns.insert(to, column);
        Ok(to != from)
    }

    // ========================
    // Task Operations
    // ========================

    /// Append a task to an existing column
    pub fn add_task(&mut self, column_id: &ColumnId, draft: TaskDraft) -> BoardResult<Task> {
        self.add_task_with(&UuidIds, column_id, draft)
    }

    pub fn add_task_with(&mut self, ids: &dyn IdGenerator, column_id: &ColumnId, draft: TaskDraft) -> BoardResult<Task> {
        self.column_index(column_id)?;
        let task = Task::from_draft(self.fresh_task_id(ids), column_id.clone(), draft);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace all mutable fields of a task
    pub fn edit_task(&mut self, task_id: &TaskId, draft: TaskDraft) -> BoardResult<()> {
        self.task_mut(task_id)?.apply_draft(draft);
        Ok(())
    }

    pub fn delete_task(&mut self, task_id: &TaskId) -> BoardResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| &t.id == task_id)
            .ok_or_else(|| BoardError::TaskNotFound(task_id.clone()))?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Reassign a task to another column. Returns whether the column changed.
    pub fn move_task(&mut self, task_id: &TaskId, target: &ColumnId) -> BoardResult<bool> {
        self.column_index(target)?;
        let task = self.task_mut(task_id)?;
        if &task.column_id == target {
            return Ok(false);
        }
        task.column_id = target.clone();
        Ok(true)
    }

    // ========================
    // Reducer Entry Point
    // ========================

    /// Apply an action using random ids for new entities
    pub fn apply(&mut self, action: BoardAction) -> BoardResult<Applied> {
        self.apply_with(&UuidIds, action)
    }

    pub fn apply_with(&mut self, ids: &dyn IdGenerator, action: BoardAction) -> BoardResult<Applied> {
        let name = action.name();
        let result = match action {
            BoardAction::AddColumn { title, color } => {
                Ok(Applied::ColumnAdded(self.add_column_with(ids, title, color).id))
            }
            BoardAction::EditColumn { column_id, title, color } => {
                self.edit_column(&column_id, title, color).map(|_| Applied::ColumnEdited)
            }
            BoardAction::DeleteColumn { column_id } => self
                .delete_column(&column_id)
                .map(|removed_tasks| Applied::ColumnDeleted { removed_tasks }),
            BoardAction::ReorderColumn { dragged, target } => self
                .reorder_column(&dragged, &target)
                .map(|moved| if moved { Applied::ColumnsReordered } else { Applied::Unchanged }),
            BoardAction::AddTask { column_id, draft } => self
                .add_task_with(ids, &column_id, draft)
                .map(|task| Applied::TaskAdded(task.id)),
            BoardAction::EditTask { task_id, draft } => {
                self.edit_task(&task_id, draft).map(|_| Applied::TaskEdited)
            }
            BoardAction::DeleteTask { task_id } => {
                self.delete_task(&task_id).map(|_| Applied::TaskDeleted)
            }
            BoardAction::MoveTask { task_id, column_id } => self
                .move_task(&task_id, &column_id)
                .map(|moved| if moved { Applied::TaskMoved } else { Applied::Unchanged }),
        };
        debug!(action = name, ?result, "board action applied");
        result
    }
}
