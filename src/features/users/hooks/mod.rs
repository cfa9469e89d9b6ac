pub mod use_user_form;

pub use use_user_form::*;
