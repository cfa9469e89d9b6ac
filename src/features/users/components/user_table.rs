use leptos::prelude::*;
use crate::components::Chip;
use crate::core::models::{User, UserDirectory};

#[component]
pub fn UserTable(
    users: RwSignal<UserDirectory>,
    on_edit: Callback<User>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || users.with(|d| d.users().to_vec())
                    key=|user| user.clone()
                    children=move |user| {
                        let id = user.id;
                        let edit_target = user.clone();
                        view! {
                            <tr>
                                <td>{user.name.clone()}</td>
                                <td>{user.email.clone()}</td>
                                <td><Chip label=user.role.as_str() tone=user.role.tone() /></td>
                                <td><Chip label=user.status.as_str() tone=user.status.tone() /></td>
                                <td class="row-actions">
                                    <button class="icon-btn" title="Edit" on:click=move |_| on_edit.run(edit_target.clone())>"✎"</button>
                                    <button class="icon-btn danger" title="Delete" on:click=move |_| on_delete.run(id)>"🗑"</button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
