use leptos::prelude::*;
use crate::core::models::BoardStats;

#[component]
pub fn BoardStatsCards(stats: Memo<BoardStats>) -> impl IntoView {
    let card = move |label: &'static str, class: &'static str, count: fn(&BoardStats) -> usize| {
        view! {
            <div class=format!("stat-card {}", class)>
                <span class="stat-value">{move || stats.with(count)}</span>
                <span class="stat-label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="stats-grid">
            {card("To Do", "stat-todo", |s| s.todo)}
            {card("In Progress", "stat-in-progress", |s| s.in_progress)}
            {card("Done", "stat-done", |s| s.done)}
            {card("Total Tasks", "stat-total", |s| s.total)}
        </div>
    }
}
