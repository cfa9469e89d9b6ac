pub mod chip;
pub mod main_layout;
pub mod modal;

pub use chip::Chip;
pub use main_layout::MainLayout;
pub use modal::sync_dialog;
