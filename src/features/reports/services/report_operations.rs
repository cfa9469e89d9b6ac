use chrono::Local;
use leptos::prelude::*;
use crate::core::error::Result;
use crate::core::models::{ReportDraft, ReportLog};
use crate::core::services::simulate_request;

pub async fn submit_report(
    reports: RwSignal<ReportLog>,
    draft: ReportDraft,
    delay_ms: u32,
) -> Result<u32> {
    draft.validate()?;
    simulate_request(delay_ms).await?;

    let today = Local::now().date_naive();
    let mut result = Ok(0);
    reports.update(|log| {
        result = log.submit(draft, today);
    });

    if let Ok(id) = &result {
        log::info!("Report {} created", id);
    }
    result
}
