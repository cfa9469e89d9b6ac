use leptos::ev;
use leptos::prelude::*;
use crate::core::models::{ReportKind, ReportStatus};
use crate::features::reports::hooks::ReportForm;

#[component]
pub fn ReportFormCard(form: ReportForm, on_submit: Callback<()>) -> impl IntoView {
    let draft = form.draft;
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="card">
            <h3>"Create New Report"</h3>
            {move || form.error.get().map(|message| view! {
                <div class="alert alert-error">{message}</div>
            })}
            <form on:submit=handle_submit>
                <div class="form-group">
                    <label>"Report Title"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Report Type"</label>
                        <select
                            prop:value=move || draft.with(|d| d.kind.as_str())
                            on:change=move |ev| {
                                if let Some(kind) = ReportKind::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.kind = kind);
                                }
                            }
                        >
                            {ReportKind::all().into_iter().map(|kind| view! {
                                <option value=kind.as_str()>{kind.label()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            prop:value=move || draft.with(|d| d.status.as_str())
                            on:change=move |ev| {
                                if let Some(status) = ReportStatus::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.status = status);
                                }
                            }
                        >
                            {ReportStatus::selectable().into_iter().map(|status| view! {
                                <option value=status.as_str()>{status.form_label()}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>
                <div class="form-group">
                    <label>"Report Description"</label>
                    <textarea
                        rows="4"
                        required
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| form.close()>"Cancel"</button>
                    <button type="submit" class="btn-primary" disabled=move || form.loading.get()>
                        {move || if form.loading.get() { "Submitting..." } else { "Submit Report" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
