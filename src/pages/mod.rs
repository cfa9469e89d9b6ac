pub mod daily_scrum;
pub mod dashboard;
pub mod login;
pub mod reports;
pub mod users;

pub use daily_scrum::DailyScrumPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use reports::ReportsPage;
pub use users::UsersPage;
