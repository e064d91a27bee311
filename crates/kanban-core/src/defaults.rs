//! Built-in Board
//!
//! Seed data used for a first session and whenever stored data is unusable.

use crate::board::Board;
use crate::domain::{Column, ColumnId, Priority, Task, TaskId};

fn seed_task(id: &str, title: &str, description: &str, column: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        priority: Priority::Medium,
        assignee_id: None,
        assignee_name: None,
        due_date: None,
        column_id: ColumnId::new(column),
    }
}

pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do", "#E5E7EB"),
        Column::new("inprogress", "In Progress", "#FEF3C7"),
        Column::new("done", "Done", "#D1FAE5"),
    ]
}

pub fn default_tasks() -> Vec<Task> {
    vec![
        seed_task("task-1", "Setup Project Structure", "Initialize the app and configure styling.", "done"),
        seed_task("task-2", "Create Kanban Components", "Build Board, Column, and Task components.", "inprogress"),
        seed_task("task-3", "Implement Drag and Drop", "Add drag and drop functionality for tasks.", "todo"),
        seed_task("task-4", "Add Task Management Features", "Implement adding, editing, and deleting tasks.", "todo"),
        seed_task("task-5", "Style the Board", "Apply the requested theme and styling.", "inprogress"),
        seed_task("task-6", "Implement Add/Delete Columns", "Allow users to add and remove columns.", "todo"),
    ]
}

/// The board shown when nothing usable is stored
pub fn default_board() -> Board {
    Board::from_parts(default_columns(), default_tasks())
}
