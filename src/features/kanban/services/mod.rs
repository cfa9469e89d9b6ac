pub mod board_operations;
pub mod drag_transfer;

pub use board_operations::*;
pub use drag_transfer::*;
