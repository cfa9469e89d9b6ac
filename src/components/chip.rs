use leptos::prelude::*;
use crate::core::models::Tone;

#[component]
pub fn Chip(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! { <span class=tone.chip_class()>{label}</span> }
}
