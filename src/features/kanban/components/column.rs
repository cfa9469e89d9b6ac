use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::core::models::{Board, ColumnId, DragSession, Task};
use crate::features::kanban::services::{move_task, read_payload};
use super::{TaskCard, TaskDialog};

#[component]
pub fn KanbanColumn(
    column_id: ColumnId,
    board: RwSignal<Board>,
    drag: RwSignal<DragSession>,
    open_menu: RwSignal<Option<String>>,
    on_action: Callback<(TaskDialog, ColumnId, Task)>,
) -> impl IntoView {
    let header = move || {
        board.with(|b| b.column(column_id).map(|c| c.header_label()).unwrap_or_default())
    };

    // Highlight while a card from another column is being dragged
    let is_drop_target = move || {
        drag.with(|d| d.active().map(|p| p.source_column != column_id).unwrap_or(false))
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();

        let mut in_flight = None;
        drag.update(|d| in_flight = d.take());

        let payload = match read_payload(&ev) {
            Ok(Some(payload)) => payload,
            Ok(None) => match in_flight {
                Some(payload) => payload,
                None => {
                    log::debug!("Drop on {} carried no task", column_id.as_str());
                    return;
                }
            },
            Err(e) => {
                log::error!("Rejected drop on {}: {}", column_id.as_str(), e);
                return;
            }
        };

        move_task(board, &payload, column_id);
    };

    view! {
        <div
            class="kanban-column"
            class:drop-target=is_drop_target
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <div class="column-header">
                <h3>{header}</h3>
            </div>
            <div class="column-content">
                {move || {
                    let tasks = board.with(|b| {
                        b.column(column_id).map(|c| c.tasks.clone()).unwrap_or_default()
                    });
                    tasks
                        .into_iter()
                        .map(|task| view! {
                            <TaskCard
                                task=task
                                column_id=column_id
                                drag=drag
                                open_menu=open_menu
                                on_action=on_action
                            />
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
