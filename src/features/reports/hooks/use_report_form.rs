use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::config::AppConfig;
use crate::core::models::{ReportDraft, ReportLog};
use crate::features::reports::services::submit_report;

pub const REPORT_FAILURE_MESSAGE: &str = "Failed to submit report. Please try again.";

#[derive(Clone, Copy)]
pub struct ReportForm {
    pub open: RwSignal<bool>,
    pub draft: RwSignal<ReportDraft>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ReportForm {
    pub fn close(&self) {
        self.open.set(false);
        self.error.set(None);
    }

    pub fn submit(&self, reports: RwSignal<ReportLog>, config: &AppConfig) {
        let form = *self;
        let draft = self.draft.get_untracked();
        let delay_ms = config.submit_delay_ms;

        form.loading.set(true);
        form.error.set(None);

        spawn_local(async move {
            match submit_report(reports, draft, delay_ms).await {
                Ok(_) => {
                    form.open.set(false);
                    form.draft.set(ReportDraft::default());
                }
                Err(e) => {
                    log::warn!("Report submission failed: {}", e);
                    form.error.set(Some(e.form_message(REPORT_FAILURE_MESSAGE)));
                }
            }
            form.loading.set(false);
        });
    }
}

pub fn use_report_form() -> ReportForm {
    ReportForm {
        open: RwSignal::new(false),
        draft: RwSignal::new(ReportDraft::default()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    }
}
