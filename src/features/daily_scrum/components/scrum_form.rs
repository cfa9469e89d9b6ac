use leptos::ev;
use leptos::prelude::*;
use crate::core::models::ScrumDraft;
use crate::features::daily_scrum::hooks::ScrumForm;

#[component]
pub fn ScrumFormCard(form: ScrumForm, on_submit: Callback<()>) -> impl IntoView {
    let draft = form.draft;
    let loading = form.loading;
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let text_field = move |label: &'static str,
                           rows: &'static str,
                           read: fn(&ScrumDraft) -> String,
                           write: fn(&mut ScrumDraft, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <textarea
                    rows=rows
                    required
                    disabled=move || loading.get()
                    prop:value=move || draft.with(read)
                    on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
                ></textarea>
            </div>
        }
    };

    view! {
        <div class="card">
            <h3>"Daily Scrum Update"</h3>
            {move || form.error.get().map(|message| view! {
                <div class="alert alert-error">{message}</div>
            })}
            <form on:submit=handle_submit>
                {text_field("What did you work on yesterday?", "3", |d| d.yesterday.clone(), |d, v| d.yesterday = v)}
                {text_field("What will you work on today?", "3", |d| d.today.clone(), |d, v| d.today = v)}
                {text_field("Any blockers?", "2", |d| d.blockers.clone(), |d, v| d.blockers = v)}
                <p class="helper-text">"Write 'None' if there are no blockers"</p>
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled=move || loading.get()
                        on:click=move |_| form.close()
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Submitting..." } else { "Submit Update" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
