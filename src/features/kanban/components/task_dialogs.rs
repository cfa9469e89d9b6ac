use leptos::prelude::*;
use leptos::html::Dialog;
use crate::components::{sync_dialog, Chip};
use super::TaskSelection;

#[component]
pub fn ViewTaskModal(
    selection: ReadSignal<Option<TaskSelection>>,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    sync_dialog(dialog_ref, open);

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| on_close.run(())>
            <div class="modal-content">
                {move || selection.get().map(|TaskSelection { task, .. }| view! {
                    <div class="modal-header">
                        <h3>{task.title.clone()}</h3>
                    </div>
                    <div class="modal-section">
                        <h4>"Description"</h4>
                        <p>{task.description.clone()}</p>
                        <h4>"Priority"</h4>
                        <Chip label=task.priority.as_str() tone=task.priority.tone() />
                        <h4>"Assignee"</h4>
                        <div class="assignee">
                            <span class="avatar">{task.assignee.initials.clone()}</span>
                            <span>{task.assignee.name.clone()}</span>
                        </div>
                        <h4>"Due Date"</h4>
                        <p>{task.due_date_label()}</p>
                        <h4>"Comments"</h4>
                        <p>{format!("{} comments", task.comments)}</p>
                    </div>
                })}
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </dialog>
    }
}

#[component]
pub fn DeleteTaskModal(
    #[prop(into)] open: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    sync_dialog(dialog_ref, open);

    view! {
        <dialog node_ref=dialog_ref class="task-modal confirm-modal" on:close=move |_| on_close.run(())>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Delete Task"</h3>
                </div>
                <p>"Are you sure you want to delete this task?"</p>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="button" class="btn-danger" on:click=move |_| on_confirm.run(())>"Delete"</button>
                </div>
            </div>
        </dialog>
    }
}
