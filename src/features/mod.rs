pub mod auth;
pub mod daily_scrum;
pub mod kanban;
pub mod reports;
pub mod users;
