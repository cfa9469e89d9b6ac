use serde::{Deserialize, Serialize};

use super::tone::Tone;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Admin, Role::Editor, Role::Viewer]
    }

    pub fn parse(raw: &str) -> Option<Role> {
        Self::all().into_iter().find(|r| r.as_str() == raw)
    }

    pub fn tone(&self) -> Tone {
        match self {
            Role::Admin => Tone::Primary,
            Role::Editor => Tone::Secondary,
            Role::Viewer => Tone::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<UserStatus> {
        vec![UserStatus::Active, UserStatus::Inactive]
    }

    pub fn parse(raw: &str) -> Option<UserStatus> {
        Self::all().into_iter().find(|s| s.as_str() == raw)
    }

    pub fn tone(&self) -> Tone {
        match self {
            UserStatus::Active => Tone::Success,
            UserStatus::Inactive => Tone::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

/// Form contents for the add/edit user dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Viewer,
            status: UserStatus::Active,
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        }
    }
}

impl UserDraft {
    fn into_user(self, id: u32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            status: self.status,
        }
    }
}

/// The user table's backing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn seed() -> Self {
        Self::new(vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                role: Role::Admin,
                status: UserStatus::Active,
            },
            User {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                role: Role::Editor,
                status: UserStatus::Active,
            },
            User {
                id: 3,
                name: "Bob Wilson".to_string(),
                email: "bob@example.com".to_string(),
                role: Role::Viewer,
                status: UserStatus::Inactive,
            },
        ])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn next_id(&self) -> u32 {
        self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    /// Appends a new user and returns its id.
    pub fn add_user(&mut self, draft: UserDraft) -> u32 {
        let id = self.next_id();
        self.users.push(draft.into_user(id));
        id
    }

    /// Replaces the user with `id`, keeping the id. Returns `false` when absent.
    pub fn update_user(&mut self, id: u32, draft: UserDraft) -> bool {
        match self.users.iter().position(|u| u.id == id) {
            Some(index) => {
                self.users[index] = draft.into_user(id);
                true
            }
            None => false,
        }
    }

    pub fn delete_user(&mut self, id: u32) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn draft(name: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..UserDraft::default()
        }
    }

    #[test]
    fn add_assigns_next_id_with_form_defaults() {
        let mut users = UserDirectory::seed();
        let id = users.add_user(draft("Carol"));
        assert_eq!(id, 4);
        let carol = users.get(4).unwrap();
        assert_eq!(carol.role, Role::Viewer);
        assert_eq!(carol.status, UserStatus::Active);
    }

    #[test]
    fn add_after_delete_does_not_reuse_live_id() {
        let mut users = UserDirectory::seed();
        assert!(users.delete_user(1));
        let id = users.add_user(draft("Dave"));
        assert_eq!(id, 4);
        let ids: HashSet<u32> = users.users().iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn update_replaces_by_id() {
        let mut users = UserDirectory::seed();
        let mut edit = UserDraft::from(users.get(3).unwrap());
        edit.status = UserStatus::Active;
        assert!(users.update_user(3, edit));
        assert_eq!(users.get(3).unwrap().status, UserStatus::Active);
        assert_eq!(users.get(3).unwrap().name, "Bob Wilson");
        assert!(!users.update_user(42, draft("Nobody")));
    }

    #[test]
    fn delete_missing_user_is_noop() {
        let mut users = UserDirectory::seed();
        assert!(!users.delete_user(9));
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn tones() {
        assert_eq!(Role::Admin.tone(), Tone::Primary);
        assert_eq!(Role::Editor.tone(), Tone::Secondary);
        assert_eq!(Role::Viewer.tone(), Tone::Default);
        assert_eq!(UserStatus::Active.tone(), Tone::Success);
        assert_eq!(UserStatus::Inactive.tone(), Tone::Error);
    }
}
