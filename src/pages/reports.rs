use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::core::models::ReportLog;
use crate::features::reports::{use_report_form, ReportFormCard, ReportTable};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("config context");
    let reports = RwSignal::new(ReportLog::seed());
    let form = use_report_form();

    let on_submit = Callback::new(move |_: ()| form.submit(reports, &config));

    view! {
        <div class="reports-page">
            <div class="page-header">
                <h2>"Reports Management"</h2>
                <button class="btn-primary" on:click=move |_| form.open.set(true)>"+ Create Report"</button>
            </div>
            <Show when=move || form.open.get()>
                <ReportFormCard form=form on_submit=on_submit />
            </Show>
            <ReportTable reports=reports />
        </div>
    }
}
