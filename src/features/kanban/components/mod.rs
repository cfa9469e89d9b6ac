pub mod board;
pub mod column;
pub mod edit_task_modal;
pub mod stats;
pub mod task_card;
pub mod task_dialogs;
pub mod task_menu;

pub use board::{KanbanBoard, TaskDialog, TaskSelection};
pub use column::KanbanColumn;
pub use edit_task_modal::EditTaskModal;
pub use stats::BoardStatsCards;
pub use task_card::TaskCard;
pub use task_dialogs::{DeleteTaskModal, ViewTaskModal};
pub use task_menu::TaskMenu;
