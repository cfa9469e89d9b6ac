pub mod scrum_form;
pub mod scrum_history;
pub mod snackbar;

pub use scrum_form::ScrumFormCard;
pub use scrum_history::ScrumHistory;
pub use snackbar::Snackbar;
