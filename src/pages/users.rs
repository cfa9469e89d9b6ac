use leptos::prelude::*;
use crate::core::models::{User, UserDirectory};
use crate::features::users::{delete_user, use_user_form, UserModal, UserTable};

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(UserDirectory::seed());
    let form = use_user_form();

    let on_edit = Callback::new(move |user: User| form.open_edit(&user));
    let on_delete = Callback::new(move |id: u32| {
        delete_user(users, id);
    });
    let on_save = Callback::new(move |_: ()| form.save(users));

    view! {
        <div class="users-page">
            <div class="page-header">
                <h2>"User Management"</h2>
                <button class="btn-primary" on:click=move |_| form.open_new()>"+ Add User"</button>
            </div>
            <UserTable users=users on_edit=on_edit on_delete=on_delete />
            <UserModal form=form on_save=on_save />
        </div>
    }
}
