use leptos::prelude::*;
use crate::components::Chip;
use crate::core::models::{ScrumLog, Tone};

#[component]
pub fn ScrumHistory(entries: RwSignal<ScrumLog>) -> impl IntoView {
    view! {
        <div class="scrum-list">
            {move || entries.with(|log| {
                log.entries().iter().map(|entry| {
                    let blockers_class = format!("blockers text-{}", entry.blockers_tone().as_str());
                    view! {
                        <div class="card scrum-card">
                            <div class="scrum-card-header">
                                <span class="muted">{entry.date.format("%Y-%m-%d").to_string()}</span>
                                <Chip label=entry.status.as_str() tone=Tone::Success />
                            </div>
                            <h4>"Yesterday"</h4>
                            <p>{entry.yesterday.clone()}</p>
                            <hr class="divider" />
                            <h4>"Today"</h4>
                            <p>{entry.today.clone()}</p>
                            <hr class="divider" />
                            <h4>"Blockers"</h4>
                            <p class=blockers_class>{entry.blockers.clone()}</p>
                        </div>
                    }
                }).collect::<Vec<_>>()
            })}
        </div>
    }
}
