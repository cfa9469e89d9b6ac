pub mod user_modal;
pub mod user_table;

pub use user_modal::UserModal;
pub use user_table::UserTable;
