//! Task Display Ordering
//!
//! Per-column view of the task set: High before Medium before Low, stable
//! within equal priority. Pure projection; nothing here mutates the board.

use crate::board::Board;
use crate::domain::{ColumnId, Task};

/// Tasks of one column in display order
pub fn tasks_in_column<'a>(board: &'a Board, column_id: &ColumnId) -> Vec<&'a Task> {
    let mut tasks: Vec<&Task> = board
        .tasks()
        .iter()
        .filter(|t| &t.column_id == column_id)
        .collect();
    // sort_by_key is stable: equal ranks keep insertion order
    tasks.sort_by_key(|t| t.priority.rank());
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SequentialIds;
    use crate::domain::{Column, Priority, TaskDraft};

    #[test]
    fn test_priority_order_is_stable() {
        let ids = SequentialIds::new();
        let x = ColumnId::new("X");
        let mut board = Board::from_parts(
            vec![Column::new("X", "X", "#fff"), Column::new("Y", "Y", "#fff")],
            Vec::new(),
        );
        let t1 = board.add_task_with(&ids, &x, TaskDraft::titled("t1").with_priority(Priority::High)).unwrap();
        let t2 = board.add_task_with(&ids, &x, TaskDraft::titled("t2").with_priority(Priority::Low)).unwrap();
        board.add_task_with(&ids, &ColumnId::new("Y"), TaskDraft::titled("other")).unwrap();
        let t3 = board.add_task_with(&ids, &x, TaskDraft::titled("t3").with_priority(Priority::High)).unwrap();
        let t4 = board.add_task_with(&ids, &x, TaskDraft::titled("t4")).unwrap();

        let shown: Vec<_> = tasks_in_column(&board, &x).into_iter().map(|t| t.id.clone()).collect();
        assert_eq!(shown, vec![t1.id, t3.id, t4.id, t2.id]);

        // Underlying insertion order is untouched
        assert_eq!(board.tasks()[1].title, "t2");
    }

    #[test]
    fn test_empty_and_unknown_columns() {
        let board = Board::default();
        assert!(tasks_in_column(&board, &ColumnId::new("nope")).is_empty());
    }
}
