use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::components::Chip;
use crate::core::models::{ColumnId, DragPayload, DragSession, Task};
use crate::features::kanban::services::write_payload;
use super::{TaskDialog, TaskMenu};

#[component]
pub fn TaskCard(
    task: Task,
    column_id: ColumnId,
    drag: RwSignal<DragSession>,
    open_menu: RwSignal<Option<String>>,
    on_action: Callback<(TaskDialog, ColumnId, Task)>,
) -> impl IntoView {
    let payload = DragPayload::new(task.id.clone(), column_id);
    let task_id = task.id.clone();

    let on_drag_start = move |ev: DragEvent| {
        if let Err(e) = write_payload(&ev, &payload) {
            log::warn!("Drag data unavailable for {}: {}", payload.task_id, e);
        }
        drag.update(|d| d.begin(payload.clone()));
    };

    let on_drag_end = move |_: DragEvent| {
        drag.update(|d| d.cancel());
    };

    view! {
        <div
            class="task-card"
            class:menu-open=move || open_menu.with(|id| id.as_deref() == Some(task_id.as_str()))
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
        >
            <div class="task-card-header">
                <h4>{task.title.clone()}</h4>
                <TaskMenu
                    task=task.clone()
                    column_id=column_id
                    open_menu=open_menu
                    on_action=on_action
                />
            </div>
            <p class="task-description">{task.description.clone()}</p>
            <div class="task-meta">
                <Chip label=task.priority.as_str() tone=task.priority.tone() />
                <span class="spacer"></span>
                <span class="avatar" title=task.assignee.name.clone()>{task.assignee.initials.clone()}</span>
            </div>
            <div class="task-footer">
                <span class="due-date">"◷ " {task.due_date_label()}</span>
                <span class="comments">"✉ " {task.comments}</span>
            </div>
        </div>
    }
}
