use chrono::Local;
use leptos::prelude::*;
use crate::core::error::Result;
use crate::core::models::{ScrumDraft, ScrumLog};
use crate::core::services::simulate_request;

// Validate, wait out the simulated request, then prepend the update
pub async fn submit_update(
    log_signal: RwSignal<ScrumLog>,
    draft: ScrumDraft,
    delay_ms: u32,
) -> Result<u32> {
    draft.validate()?;
    simulate_request(delay_ms).await?;

    let today = Local::now().date_naive();
    let mut result = Ok(0);
    log_signal.update(|entries| {
        result = entries.submit(draft, today);
    });

    if let Ok(id) = &result {
        log::info!("Scrum update {} submitted for {}", id, today);
    }
    result
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::core::error::DashboardError;

    #[test]
    fn blank_answer_is_rejected_before_the_delay() {
        let entries = RwSignal::new(ScrumLog::seed());
        let draft = ScrumDraft {
            yesterday: "Reviewed the login flow".to_string(),
            today: "  ".to_string(),
            ..ScrumDraft::default()
        };

        let result = block_on(submit_update(entries, draft, 1000));

        assert_eq!(result, Err(DashboardError::MissingField("today")));
        assert_eq!(entries.get_untracked(), ScrumLog::seed());
    }
}
