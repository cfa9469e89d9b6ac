use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use crate::components::sync_dialog;
use crate::core::models::{Role, UserStatus};
use crate::features::users::hooks::UserForm;

// Shared by "Add New User" and "Edit User"
#[component]
pub fn UserModal(form: UserForm, on_save: Callback<()>) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();
    sync_dialog(dialog_ref, form.open.into());

    let draft = form.draft;
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| form.close()>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{move || form.title()}</h3>
                    <button type="button" class="modal-close" on:click=move |_| form.close()>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Name"</label>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Role"</label>
                        <select
                            prop:value=move || draft.with(|d| d.role.as_str())
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.role = role);
                                }
                            }
                        >
                            {Role::all().into_iter().map(|role| view! {
                                <option value=role.as_str()>{role.label()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            prop:value=move || draft.with(|d| d.status.as_str())
                            on:change=move |ev| {
                                if let Some(status) = UserStatus::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.status = status);
                                }
                            }
                        >
                            {UserStatus::all().into_iter().map(|status| view! {
                                <option value=status.as_str()>{status.label()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| form.close()>"Cancel"</button>
                        <button type="submit" class="btn-primary">
                            {move || if form.editing.get().is_some() { "Save Changes" } else { "Add User" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
