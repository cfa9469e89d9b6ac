use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::core::models::ScrumLog;
use crate::features::daily_scrum::{
    use_scrum_form, ScrumFormCard, ScrumHistory, Snackbar, SCRUM_SUCCESS_MESSAGE,
};

#[component]
pub fn DailyScrumPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("config context");
    let entries = RwSignal::new(ScrumLog::seed());
    let form = use_scrum_form();

    let on_submit = Callback::new(move |_: ()| form.submit(entries, &config));

    view! {
        <div class="scrum-page">
            <div class="page-header">
                <h2>"Daily Scrum Updates"</h2>
                <button
                    class="btn-primary"
                    disabled=move || form.open.get()
                    on:click=move |_| form.open.set(true)
                >
                    "+ Add Today's Update"
                </button>
            </div>
            <Show when=move || form.open.get()>
                <ScrumFormCard form=form on_submit=on_submit />
            </Show>
            <ScrumHistory entries=entries />
            <Snackbar message=SCRUM_SUCCESS_MESSAGE visible=form.snackbar />
        </div>
    }
}
