use std::collections::HashSet;

use admin_dashboard_ui::core::models::{
    Assignee, Board, ColumnId, DragPayload, MoveOutcome, Priority, Task,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn task(id: usize) -> Task {
    Task {
        id: format!("task-{}", id),
        title: format!("Task {}", id),
        description: String::new(),
        priority: Priority::Medium,
        assignee: Assignee::new("Test User", "TU"),
        due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        comments: 0,
    }
}

fn column_strategy() -> impl Strategy<Value = ColumnId> {
    prop_oneof![
        Just(ColumnId::Todo),
        Just(ColumnId::InProgress),
        Just(ColumnId::Done),
    ]
}

// Boards of up to a dozen uniquely numbered tasks spread over the columns
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(column_strategy(), 0..12).prop_map(|placements| {
        let mut columns: Vec<(ColumnId, Vec<Task>)> =
            ColumnId::all().into_iter().map(|c| (c, Vec::new())).collect();
        for (i, column) in placements.into_iter().enumerate() {
            if let Some((_, tasks)) = columns.iter_mut().find(|(c, _)| *c == column) {
                tasks.push(task(i));
            }
        }
        Board::from_columns(columns)
    })
}

fn all_ids(board: &Board) -> Vec<String> {
    board
        .columns()
        .flat_map(|c| c.tasks.iter().map(|t| t.id.clone()))
        .collect()
}

proptest! {
    #[test]
    fn moves_preserve_task_count_and_ids(
        board in board_strategy(),
        moves in prop::collection::vec((0usize..14, column_strategy(), column_strategy()), 0..20),
    ) {
        let mut board = board;
        let mut expected: Vec<String> = all_ids(&board);
        expected.sort();

        for (n, source, target) in moves {
            board.move_task(&format!("task-{}", n), source, target);

            let ids = all_ids(&board);
            let unique: HashSet<&String> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(board.total_tasks(), expected.len());
        }

        let mut ids = all_ids(&board);
        ids.sort();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn dropping_on_the_source_column_changes_nothing(
        board in board_strategy(),
        n in 0usize..14,
        column in column_strategy(),
    ) {
        let mut moved = board.clone();
        let outcome = moved.move_task(&format!("task-{}", n), column, column);
        prop_assert_eq!(outcome, MoveOutcome::SameColumn);
        prop_assert_eq!(moved, board);
    }

    #[test]
    fn a_move_appends_to_the_end_of_the_target(
        board in board_strategy(),
        n in 0usize..14,
        target in column_strategy(),
    ) {
        let id = format!("task-{}", n);
        let mut board = board;
        if let Some(source) = board.locate(&id) {
            let target_len = board.column_len(target);
            let outcome = board.move_task(&id, source, target);
            if source == target {
                prop_assert_eq!(outcome, MoveOutcome::SameColumn);
            } else {
                prop_assert_eq!(outcome, MoveOutcome::Moved);
                let column = board.column(target).unwrap();
                prop_assert_eq!(column.tasks.len(), target_len + 1);
                prop_assert_eq!(&column.tasks.last().unwrap().id, &id);
                prop_assert!(board.find_task(source, &id).is_none());
            }
        }
    }

    #[test]
    fn wrong_source_column_is_a_no_op(board in board_strategy(), n in 0usize..14) {
        let id = format!("task-{}", n);
        if let Some(actual) = board.locate(&id) {
            let wrong = ColumnId::all().into_iter().find(|c| *c != actual).unwrap();
            let target = ColumnId::all().into_iter().find(|c| *c != wrong).unwrap();
            let mut moved = board.clone();
            prop_assert_eq!(moved.move_task(&id, wrong, target), MoveOutcome::TaskNotFound);
            prop_assert_eq!(moved, board);
        }
    }

    #[test]
    fn drag_payload_survives_the_data_transfer(n in 0usize..100, column in column_strategy()) {
        let payload = DragPayload::new(format!("task-{}", n), column);
        let raw = payload.encode().unwrap();
        prop_assert_eq!(DragPayload::decode(&raw).unwrap(), payload);
    }
}

#[test]
fn seed_board_drag_to_done() {
    let mut board = Board::seed();
    let payload = DragPayload::decode(r#"{"taskId":"task-3","sourceColumn":"in-progress"}"#).unwrap();

    assert_eq!(payload.apply(&mut board, ColumnId::Done), MoveOutcome::Moved);
    assert_eq!(board.column_len(ColumnId::InProgress), 0);
    let done: Vec<&str> = board
        .column(ColumnId::Done)
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(done, vec!["task-4", "task-3"]);
    assert_eq!(board.total_tasks(), 4);
}
