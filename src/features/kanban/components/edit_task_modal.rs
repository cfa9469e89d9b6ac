use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use crate::components::sync_dialog;
use crate::core::models::{Priority, Task};
use super::TaskSelection;

#[component]
pub fn EditTaskModal(
    selection: ReadSignal<Option<TaskSelection>>,
    #[prop(into)] open: Signal<bool>,
    on_save: Callback<Task>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    sync_dialog(dialog_ref, open);

    // The form edits a full copy of the task, so the save is a complete record
    let draft = RwSignal::new(None::<Task>);
    Effect::new(move |_| {
        if open.get() {
            draft.set(selection.get().map(|s| s.task));
        }
    });

    let edit = move |apply: &dyn Fn(&mut Task)| {
        draft.update(|task| {
            if let Some(task) = task {
                apply(task);
            }
        });
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(task) = draft.get_untracked() {
            on_save.run(task);
        }
    };

    let field = move |read: fn(&Task) -> String| {
        move || draft.with(|task| task.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| on_close.run(())>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Edit Task"</h3>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Title"</label>
                        <input
                            type="text"
                            prop:value=field(|t| t.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit(&|t| t.update_title(value.clone()));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Description"</label>
                        <textarea
                            rows="3"
                            prop:value=field(|t| t.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit(&|t| t.update_description(value.clone()));
                            }
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"Priority"</label>
                        <select
                            prop:value=field(|t| t.priority.as_str().to_string())
                            on:change=move |ev| {
                                if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                                    edit(&|t| t.update_priority(priority));
                                }
                            }
                        >
                            {Priority::all().into_iter().map(|p| view! {
                                <option value=p.as_str()>{p.label()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Due Date"</label>
                        <input
                            type="date"
                            prop:value=field(|t| t.due_date_label())
                            on:input=move |ev| {
                                match NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                                    Ok(date) => edit(&|t| t.update_due_date(date)),
                                    Err(e) => log::debug!("Ignoring due date input: {}", e),
                                }
                            }
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit" class="btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
