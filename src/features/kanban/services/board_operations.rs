use leptos::prelude::*;
use crate::core::models::{Board, ColumnId, DragPayload, MoveOutcome, Task};

// Move a dropped task onto the target column
pub fn move_task(
    board_signal: RwSignal<Board>,
    payload: &DragPayload,
    target: ColumnId,
) -> MoveOutcome {
    let mut outcome = MoveOutcome::SameColumn;
    board_signal.update(|board| {
        outcome = payload.apply(board, target);
    });

    match outcome {
        MoveOutcome::Moved => log::info!(
            "Moved task {} from {} to {}",
            payload.task_id,
            payload.source_column.as_str(),
            target.as_str()
        ),
        MoveOutcome::SameColumn => log::debug!("Task {} dropped on its own column", payload.task_id),
        MoveOutcome::TaskNotFound => log::warn!(
            "Task {} not found in {}, drop ignored",
            payload.task_id,
            payload.source_column.as_str()
        ),
    }
    outcome
}

// Replace a task with the edited copy
pub fn edit_task(
    board_signal: RwSignal<Board>,
    column: ColumnId,
    task_id: &str,
    patch: Task,
) -> bool {
    let mut updated = false;
    board_signal.update(|board| {
        updated = board.edit_task(column, task_id, patch);
    });

    if updated {
        log::info!("Task {} updated", task_id);
    } else {
        log::warn!("Task {} not found in {} for edit", task_id, column.as_str());
    }
    updated
}

// Delete a task
pub fn delete_task(board_signal: RwSignal<Board>, column: ColumnId, task_id: &str) -> usize {
    let mut removed = 0;
    board_signal.update(|board| {
        removed = board.delete_task(column, task_id);
    });

    log::info!("Deleted {} task(s) with id {} from {}", removed, task_id, column.as_str());
    removed
}
