use leptos::prelude::*;
use crate::core::models::{Board, ColumnId, DragSession, Task};
use crate::features::kanban::services::{delete_task, edit_task};
use super::{DeleteTaskModal, EditTaskModal, KanbanColumn, ViewTaskModal};

/// Task picked from a card menu, with the column it was in at the time.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSelection {
    pub column: ColumnId,
    pub task: Task,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDialog {
    Edit,
    View,
    Delete,
}

#[component]
pub fn KanbanBoard(board: RwSignal<Board>) -> impl IntoView {
    let drag = RwSignal::new(DragSession::default());
    // Id of the task whose menu is open
    let open_menu = RwSignal::new(None::<String>);
    let selection = RwSignal::new(None::<TaskSelection>);
    let dialog = RwSignal::new(None::<TaskDialog>);

    let on_action = Callback::new(move |(kind, column, task): (TaskDialog, ColumnId, Task)| {
        open_menu.set(None);
        selection.set(Some(TaskSelection { column, task }));
        dialog.set(Some(kind));
    });

    let close_dialog = Callback::new(move |_: ()| {
        dialog.set(None);
        selection.set(None);
    });

    let save_edit = Callback::new(move |patch: Task| {
        if let Some(selected) = selection.get_untracked() {
            edit_task(board, selected.column, &selected.task.id, patch);
        }
        close_dialog.run(());
    });

    let confirm_delete = Callback::new(move |_: ()| {
        if let Some(selected) = selection.get_untracked() {
            delete_task(board, selected.column, &selected.task.id);
        }
        close_dialog.run(());
    });

    let is_open = move |kind: TaskDialog| Signal::derive(move || dialog.get() == Some(kind));

    view! {
        <>
            <div class="kanban-board" on:click=move |_| open_menu.set(None)>
                {ColumnId::all().into_iter().map(|column_id| view! {
                    <KanbanColumn
                        column_id=column_id
                        board=board
                        drag=drag
                        open_menu=open_menu
                        on_action=on_action
                    />
                }).collect::<Vec<_>>()}
            </div>

            <EditTaskModal
                selection=selection.read_only()
                open=is_open(TaskDialog::Edit)
                on_save=save_edit
                on_close=close_dialog
            />
            <ViewTaskModal
                selection=selection.read_only()
                open=is_open(TaskDialog::View)
                on_close=close_dialog
            />
            <DeleteTaskModal
                open=is_open(TaskDialog::Delete)
                on_confirm=confirm_delete
                on_close=close_dialog
            />
        </>
    }
}
