use leptos::prelude::*;
use crate::core::models::{Board, BoardStats};

pub struct BoardHook {
    pub board: RwSignal<Board>,
    pub stats: Memo<BoardStats>,
}

// Board state is local to the screen that calls this; it starts from seed data
pub fn use_board() -> BoardHook {
    let board = RwSignal::new(Board::seed());
    let stats = Memo::new(move |_| board.with(|b| b.stats()));

    log::debug!("Board loaded with {} tasks", board.with_untracked(|b| b.total_tasks()));

    BoardHook { board, stats }
}
