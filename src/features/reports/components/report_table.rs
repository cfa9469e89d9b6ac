use leptos::prelude::*;
use crate::components::Chip;
use crate::core::models::ReportLog;

#[component]
pub fn ReportTable(reports: RwSignal<ReportLog>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Type"</th>
                    <th>"Status"</th>
                    <th>"Date"</th>
                    <th>"Description"</th>
                </tr>
            </thead>
            <tbody>
                {move || reports.with(|log| {
                    log.reports().iter().map(|report| view! {
                        <tr>
                            <td>{report.title.clone()}</td>
                            <td><Chip label=report.kind.as_str() tone=report.kind.tone() /></td>
                            <td><Chip label=report.status.as_str() tone=report.status.tone() /></td>
                            <td>{report.date.format("%Y-%m-%d").to_string()}</td>
                            <td>{report.description.clone()}</td>
                        </tr>
                    }).collect::<Vec<_>>()
                })}
            </tbody>
        </table>
    }
}
