pub mod use_scrum_form;

pub use use_scrum_form::*;
