//! Board Scenario Tests
//!
//! Mutation semantics and the board-level properties, using deterministic ids.

use proptest::prelude::*;

use super::*;
use crate::domain::{Priority, ASSIGNEES};

fn board_abc() -> Board {
    Board::from_parts(
        vec![
            Column::new("A", "A", "#fff"),
            Column::new("B", "B", "#fff"),
            Column::new("C", "C", "#fff"),
        ],
        Vec::new(),
    )
}

fn order(board: &Board) -> Vec<&str> {
    board.columns().iter().map(|c| c.id.as_str()).collect()
}

fn cid(s: &str) -> ColumnId {
    ColumnId::new(s)
}

#[test]
fn test_add_column_appends_last() {
    let ids = SequentialIds::new();
    let mut board = board_abc();
    let column = board.add_column_with(&ids, "Review", "#123456");

    assert_eq!(column.id.as_str(), "col-gen-1");
    assert_eq!(order(&board), vec!["A", "B", "C", "col-gen-1"]);
    assert_eq!(board.column(&column.id).map(|c| c.title.as_str()), Some("Review"));
}

#[test]
fn test_add_column_skips_taken_ids() {
    let ids = SequentialIds::new();
    let mut board = Board::from_parts(vec![Column::new("col-gen-1", "Taken", "#fff")], Vec::new());
    let column = board.add_column_with(&ids, "New", "#000");
    assert_eq!(column.id.as_str(), "col-gen-2");
}

#[test]
fn test_edit_column_keeps_position() {
    let mut board = board_abc();
    board.edit_column(&cid("B"), "Bee", "#abcdef").unwrap();

    assert_eq!(order(&board), vec!["A", "B", "C"]);
    let b = board.column(&cid("B")).unwrap();
    assert_eq!(b.title, "Bee");
    assert_eq!(b.color, "#abcdef");
}

#[test]
fn test_edit_missing_column_is_noop() {
    let mut board = board_abc();
    let before = board.clone();
    assert_eq!(
        board.edit_column(&cid("Z"), "x", "#000"),
        Err(BoardError::ColumnNotFound(cid("Z")))
    );
    assert_eq!(board, before);
}

#[test]
fn test_reorder_right_to_left() {
    let mut board = board_abc();
    assert_eq!(board.reorder_column(&cid("C"), &cid("A")), Ok(true));
    assert_eq!(order(&board), vec!["C", "A", "B"]);
}

#[test]
fn test_reorder_left_to_right() {
    let mut board = board_abc();
    assert_eq!(board.reorder_column(&cid("A"), &cid("C")), Ok(true));
    assert_eq!(order(&board), vec!["B", "A", "C"]);
}

#[test]
fn test_reorder_adjacent_swap_and_back() {
    let mut board = board_abc();
    board.reorder_column(&cid("B"), &cid("A")).unwrap();
    assert_eq!(order(&board), vec!["B", "A", "C"]);
    board.reorder_column(&cid("A"), &cid("B")).unwrap();
    assert_eq!(order(&board), vec!["A", "B", "C"]);
}

#[test]
fn test_reorder_onto_right_neighbour_is_unchanged() {
    // A already sits immediately before B
    let mut board = board_abc();
    assert_eq!(board.reorder_column(&cid("A"), &cid("B")), Ok(false));
    assert_eq!(order(&board), vec!["A", "B", "C"]);
}

#[test]
fn test_reorder_noops() {
    let mut board = board_abc();
    assert_eq!(board.reorder_column(&cid("A"), &cid("A")), Ok(false));
    assert!(board.reorder_column(&cid("A"), &cid("Z")).is_err());
    assert!(board.reorder_column(&cid("Z"), &cid("A")).is_err());
    assert_eq!(order(&board), vec!["A", "B", "C"]);
}

#[test]
fn test_add_task_to_missing_column() {
    let mut board = board_abc();
    let before = board.clone();
    let result = board.add_task(&cid("colX"), TaskDraft::titled("T"));
    assert_eq!(result, Err(BoardError::ColumnNotFound(cid("colX"))));
    assert_eq!(board, before);
}

#[test]
fn test_add_task_defaults_priority() {
    let ids = SequentialIds::new();
    let mut board = board_abc();
    let task = board.add_task_with(&ids, &cid("A"), TaskDraft::titled("T")).unwrap();

    assert_eq!(task.id.as_str(), "task-gen-1");
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(board.task_count(&cid("A")), 1);
}

#[test]
fn test_edit_task_keeps_id_and_column() {
    let ids = SequentialIds::new();
    let mut board = board_abc();
    let task = board.add_task_with(&ids, &cid("B"), TaskDraft::titled("Old").with_priority(Priority::High)).unwrap();

    let draft = TaskDraft {
        title: "New".into(),
        description: Some("desc".into()),
        priority: None,
        assignee_id: Some("user-2".into()),
        assignee_name: Some("Parvina".into()),
        due_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 31),
    };
    board.edit_task(&task.id, draft).unwrap();

    let edited = board.task(&task.id).unwrap();
    assert_eq!(edited.id, task.id);
    assert_eq!(edited.column_id, cid("B"));
    assert_eq!(edited.title, "New");
    assert_eq!(edited.priority, Priority::Medium);
    assert_eq!(edited.assignee_name.as_deref(), Some("Parvina"));
}

#[test]
fn test_delete_task() {
    let ids = SequentialIds::new();
    let mut board = board_abc();
    let task = board.add_task_with(&ids, &cid("A"), TaskDraft::titled("T")).unwrap();

    board.delete_task(&task.id).unwrap();
    assert!(board.tasks().is_empty());
    assert_eq!(board.delete_task(&task.id), Err(BoardError::TaskNotFound(task.id)));
}

#[test]
fn test_move_task() {
    let ids = SequentialIds::new();
    let mut board = board_abc();
    let task = board.add_task_with(&ids, &cid("A"), TaskDraft::titled("T")).unwrap();

    assert_eq!(board.move_task(&task.id, &cid("C")), Ok(true));
    assert_eq!(board.task(&task.id).unwrap().column_id, cid("C"));
    assert_eq!(board.move_task(&task.id, &cid("C")), Ok(false));
    assert!(board.move_task(&task.id, &cid("Z")).is_err());
    assert!(board.move_task(&TaskId::new("nope"), &cid("A")).is_err());
    assert_eq!(board.task(&task.id).unwrap().column_id, cid("C"));
}

#[test]
fn test_delete_column_cascades() {
    let ids = SequentialIds::new();
    let mut board = board_abc();
    board.add_task_with(&ids, &cid("A"), TaskDraft::titled("a1")).unwrap();
    board.add_task_with(&ids, &cid("B"), TaskDraft::titled("b1")).unwrap();
    board.add_task_with(&ids, &cid("A"), TaskDraft::titled("a2")).unwrap();

    assert_eq!(board.delete_column(&cid("A")), Ok(2));
    assert_eq!(order(&board), vec!["B", "C"]);
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].title, "b1");
}

#[test]
fn test_apply_reports_outcomes() {
    let ids = SequentialIds::new();
    let mut board = board_abc();

    let added = board
        .apply_with(&ids, BoardAction::AddTask { column_id: cid("A"), draft: TaskDraft::titled("T") })
        .unwrap();
    let task_id = match added {
        Applied::TaskAdded(id) => id,
        other => panic!("expected TaskAdded, got {other:?}"),
    };

    let same = board
        .apply_with(&ids, BoardAction::MoveTask { task_id: task_id.clone(), column_id: cid("A") })
        .unwrap();
    assert!(!same.changed());

    let deleted = board.apply_with(&ids, BoardAction::DeleteColumn { column_id: cid("A") }).unwrap();
    assert_eq!(deleted, Applied::ColumnDeleted { removed_tasks: 1 });

    let missing = board.apply_with(&ids, BoardAction::DeleteTask { task_id });
    assert!(missing.is_err());
}

// ========================
// Properties
// ========================

#[derive(Debug, Clone)]
enum Op {
    AddColumn,
    DeleteColumn(usize),
    AddTask(usize),
    MoveTask(usize, usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::AddColumn),
        (0usize..8).prop_map(Op::DeleteColumn),
        (0usize..8).prop_map(Op::AddTask),
        (0usize..16, 0usize..8).prop_map(|(t, c)| Op::MoveTask(t, c)),
    ]
}

fn nth_column(board: &Board, n: usize) -> ColumnId {
    match board.columns().len() {
        0 => cid("missing"),
        len => board.columns()[n % len].id.clone(),
    }
}

fn no_orphans(board: &Board) -> bool {
    board.tasks().iter().all(|t| board.has_column(&t.column_id))
}

proptest! {
    /// Every task's column exists after each operation.
    #[test]
    fn prop_no_orphaned_tasks(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let ids = SequentialIds::new();
        let mut board = board_abc();
        for op in ops {
            match op {
                Op::AddColumn => { board.add_column_with(&ids, "X", "#000"); }
                Op::DeleteColumn(n) => { let _ = board.delete_column(&nth_column(&board, n)); }
                Op::AddTask(n) => { let _ = board.add_task_with(&ids, &nth_column(&board, n), TaskDraft::titled("t")); }
                Op::MoveTask(t, n) => {
                    if let Some(task) = board.tasks().get(t).map(|t| t.id.clone()) {
                        let _ = board.move_task(&task, &nth_column(&board, n));
                    }
                }
            }
            prop_assert!(no_orphans(&board));
        }
    }

    /// Swapping an adjacent pair and swapping back restores the order.
    #[test]
    fn prop_adjacent_reorder_round_trip(len in 2usize..8, pick in 0usize..8) {
        let columns: Vec<Column> = (0..len).map(|i| Column::new(format!("c{i}"), "c", "#fff")).collect();
        let mut board = Board::from_parts(columns, Vec::new());
        let original = board.clone();

        let i = pick % (len - 1);
        let left = board.columns()[i].id.clone();
        let right = board.columns()[i + 1].id.clone();

        prop_assert_eq!(board.reorder_column(&right, &left), Ok(true));
        prop_assert_eq!(board.reorder_column(&left, &right), Ok(true));
        prop_assert_eq!(board, original);
    }

    /// Moving the same task twice equals moving it once.
    #[test]
    fn prop_move_task_idempotent(task_col in 0usize..3, target in 0usize..3) {
        let ids = SequentialIds::new();
        let mut board = board_abc();
        let task = board.add_task_with(&ids, &nth_column(&board, task_col), TaskDraft::titled("t")).unwrap();
        let target = nth_column(&board, target);

        board.move_task(&task.id, &target).unwrap();
        let once = board.clone();
        board.move_task(&task.id, &target).unwrap();
        prop_assert_eq!(board, once);
    }

    /// Deleting a column removes exactly its tasks and keeps the rest in order.
    #[test]
    fn prop_delete_column_complement(placements in proptest::collection::vec(0usize..3, 0..20), victim in 0usize..3) {
        let ids = SequentialIds::new();
        let mut board = board_abc();
        for p in placements {
            board.add_task_with(&ids, &nth_column(&board, p), TaskDraft::titled("t")).unwrap();
        }
        let victim = nth_column(&board, victim);
        let survivors: Vec<Task> = board.tasks().iter().filter(|t| t.column_id != victim).cloned().collect();
        let doomed = board.task_count(&victim);

        prop_assert_eq!(board.delete_column(&victim), Ok(doomed));
        prop_assert_eq!(board.tasks(), survivors.as_slice());
    }
}

// ========================
// Stored round trip
// ========================

#[derive(Debug, Clone)]
enum Edit {
    AddColumn(String, String),
    EditColumn(usize, String, String),
    DeleteColumn(usize),
    ReorderColumn(usize, usize),
    AddTask(usize, TaskDraft),
    EditTask(usize, TaskDraft),
    DeleteTask(usize),
    MoveTask(usize, usize),
}

fn arb_draft() -> impl Strategy<Value = TaskDraft> {
    (
        ".{0,12}",
        proptest::option::of(".{0,12}"),
        proptest::option::of(prop_oneof![Just(Priority::High), Just(Priority::Medium), Just(Priority::Low)]),
        proptest::option::of(0usize..ASSIGNEES.len()),
        proptest::option::of((1900i32..2100, 1u32..=12, 1u32..=28)),
    )
        .prop_map(|(title, description, priority, assignee, due)| TaskDraft {
            title,
            description,
            priority,
            assignee_id: assignee.map(|i| ASSIGNEES[i].id.to_string()),
            assignee_name: assignee.map(|i| ASSIGNEES[i].name.to_string()),
            due_date: due.and_then(|(y, m, d)| chrono::NaiveDate::from_ymd_opt(y, m, d)),
        })
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (".{0,8}", ".{0,8}").prop_map(|(t, c)| Edit::AddColumn(t, c)),
        (0usize..8, ".{0,8}", ".{0,8}").prop_map(|(n, t, c)| Edit::EditColumn(n, t, c)),
        (0usize..8).prop_map(Edit::DeleteColumn),
        (0usize..8, 0usize..8).prop_map(|(a, b)| Edit::ReorderColumn(a, b)),
        (0usize..8, arb_draft()).prop_map(|(n, d)| Edit::AddTask(n, d)),
        (0usize..16, arb_draft()).prop_map(|(n, d)| Edit::EditTask(n, d)),
        (0usize..16).prop_map(Edit::DeleteTask),
        (0usize..16, 0usize..8).prop_map(|(t, c)| Edit::MoveTask(t, c)),
    ]
}

fn nth_task(board: &Board, n: usize) -> TaskId {
    match board.tasks().len() {
        0 => TaskId::new("missing"),
        len => board.tasks()[n % len].id.clone(),
    }
}

proptest! {
    /// Whatever the board's own operations produce loads back unchanged.
    #[test]
    fn prop_board_survives_storage(edits in proptest::collection::vec(arb_edit(), 0..30)) {
        let ids = SequentialIds::new();
        let mut board = crate::defaults::default_board();
        for edit in edits {
            let action = match edit {
                Edit::AddColumn(title, color) => BoardAction::AddColumn { title, color },
                Edit::EditColumn(n, title, color) => BoardAction::EditColumn { column_id: nth_column(&board, n), title, color },
                Edit::DeleteColumn(n) => BoardAction::DeleteColumn { column_id: nth_column(&board, n) },
                Edit::ReorderColumn(a, b) => BoardAction::ReorderColumn { dragged: nth_column(&board, a), target: nth_column(&board, b) },
                Edit::AddTask(n, draft) => BoardAction::AddTask { column_id: nth_column(&board, n), draft },
                Edit::EditTask(n, draft) => BoardAction::EditTask { task_id: nth_task(&board, n), draft },
                Edit::DeleteTask(n) => BoardAction::DeleteTask { task_id: nth_task(&board, n) },
                Edit::MoveTask(t, n) => BoardAction::MoveTask { task_id: nth_task(&board, t), column_id: nth_column(&board, n) },
            };
            let _ = board.apply_with(&ids, action);
        }

        let stored = crate::snapshot::encode(&board).unwrap();
        prop_assert_eq!(crate::snapshot::decode(&stored).unwrap(), Some(board));
    }
}
