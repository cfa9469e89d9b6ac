use leptos::prelude::*;
use crate::core::models::{ColumnId, Task};
use super::TaskDialog;

#[component]
pub fn TaskMenu(
    task: Task,
    column_id: ColumnId,
    open_menu: RwSignal<Option<String>>,
    on_action: Callback<(TaskDialog, ColumnId, Task)>,
) -> impl IntoView {
    let toggle_menu = {
        let task_id = task.id.clone();
        move |e: leptos::ev::MouseEvent| {
            e.stop_propagation();
            if open_menu.get_untracked().as_deref() == Some(task_id.as_str()) {
                open_menu.set(None);
            } else {
                open_menu.set(Some(task_id.clone()));
            }
        }
    };

    let task_id = task.id.clone();

    let item = move |kind: TaskDialog, label: &'static str, class: &'static str| {
        let task = task.clone();
        view! {
            <button
                class=format!("dropdown-item {}", class)
                on:click=move |e| {
                    e.stop_propagation();
                    on_action.run((kind, column_id, task.clone()));
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="task-menu">
            <button class="task-menu-btn" on:click=toggle_menu>"⋮"</button>
            <div
                class="task-dropdown"
                class:show=move || open_menu.with(|id| id.as_deref() == Some(task_id.as_str()))
            >
                {item(TaskDialog::Edit, "Edit", "edit-item")}
                {item(TaskDialog::View, "View Details", "view-item")}
                {item(TaskDialog::Delete, "Delete", "delete-item")}
            </div>
        </div>
    }
}
