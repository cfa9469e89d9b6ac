use leptos::prelude::*;
use crate::features::kanban::{use_board, BoardStatsCards, KanbanBoard};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let board = use_board();

    view! {
        <div class="dashboard-page">
            <h2 class="page-title">"Project Progress"</h2>
            <BoardStatsCards stats=board.stats />
            <KanbanBoard board=board.board />
        </div>
    }
}
