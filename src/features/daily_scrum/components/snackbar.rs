use leptos::prelude::*;

#[component]
pub fn Snackbar(#[prop(into)] message: String, visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="snackbar snackbar-success">
                <span>{message.clone()}</span>
                <button class="snackbar-close" on:click=move |_| visible.set(false)>"×"</button>
            </div>
        </Show>
    }
}
