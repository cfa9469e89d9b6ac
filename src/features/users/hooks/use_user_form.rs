use leptos::prelude::*;
use crate::core::models::{User, UserDirectory, UserDraft};
use crate::features::users::services::{add_user, update_user};

/// State of the shared add/edit user dialog.
#[derive(Clone, Copy)]
pub struct UserForm {
    pub open: RwSignal<bool>,
    /// `Some(id)` while editing an existing user.
    pub editing: RwSignal<Option<u32>>,
    pub draft: RwSignal<UserDraft>,
}

impl UserForm {
    pub fn open_new(&self) {
        self.editing.set(None);
        self.draft.set(UserDraft::default());
        self.open.set(true);
    }

    pub fn open_edit(&self, user: &User) {
        self.editing.set(Some(user.id));
        self.draft.set(UserDraft::from(user));
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
        self.editing.set(None);
        self.draft.set(UserDraft::default());
    }

    pub fn title(&self) -> &'static str {
        if self.editing.get().is_some() {
            "Edit User"
        } else {
            "Add New User"
        }
    }

    /// Writes the draft into the directory and closes the dialog.
    pub fn save(&self, users: RwSignal<UserDirectory>) {
        let draft = self.draft.get_untracked();
        match self.editing.get_untracked() {
            Some(id) => {
                update_user(users, id, draft);
            }
            None => {
                add_user(users, draft);
            }
        }
        self.close();
    }
}

pub fn use_user_form() -> UserForm {
    UserForm {
        open: RwSignal::new(false),
        editing: RwSignal::new(None),
        draft: RwSignal::new(UserDraft::default()),
    }
}
