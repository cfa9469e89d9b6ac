use leptos::prelude::*;
use crate::core::models::{UserDirectory, UserDraft};

// Add a user from the form and return the id it was given
pub fn add_user(users: RwSignal<UserDirectory>, draft: UserDraft) -> u32 {
    let mut id = 0;
    users.update(|directory| {
        id = directory.add_user(draft);
    });
    log::info!("Added user {}", id);
    id
}

pub fn update_user(users: RwSignal<UserDirectory>, id: u32, draft: UserDraft) -> bool {
    let mut updated = false;
    users.update(|directory| {
        updated = directory.update_user(id, draft);
    });

    if updated {
        log::info!("User {} updated", id);
    } else {
        log::warn!("User {} not found for update", id);
    }
    updated
}

pub fn delete_user(users: RwSignal<UserDirectory>, id: u32) -> bool {
    let mut removed = false;
    users.update(|directory| {
        removed = directory.delete_user(id);
    });
    log::info!("Delete user {} (removed: {})", id, removed);
    removed
}
