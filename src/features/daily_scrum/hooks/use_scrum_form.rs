use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use crate::core::config::AppConfig;
use crate::core::models::{ScrumDraft, ScrumLog};
use crate::features::daily_scrum::services::submit_update;

pub const SCRUM_SUCCESS_MESSAGE: &str = "Daily scrum update submitted successfully!";
pub const SCRUM_FAILURE_MESSAGE: &str = "Failed to submit daily scrum. Please try again.";

#[derive(Clone, Copy)]
pub struct ScrumForm {
    pub open: RwSignal<bool>,
    pub draft: RwSignal<ScrumDraft>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub snackbar: RwSignal<bool>,
}

impl ScrumForm {
    pub fn close(&self) {
        self.open.set(false);
        self.error.set(None);
    }

    /// Runs the submission in the background. On success the form closes and
    /// the snackbar shows for `snackbar_hide_ms`.
    pub fn submit(&self, entries: RwSignal<ScrumLog>, config: &AppConfig) {
        let form = *self;
        let draft = self.draft.get_untracked();
        let delay_ms = config.submit_delay_ms;
        let hide_ms = config.snackbar_hide_ms;

        form.loading.set(true);
        form.error.set(None);

        spawn_local(async move {
            match submit_update(entries, draft, delay_ms).await {
                Ok(_) => {
                    form.open.set(false);
                    form.draft.set(ScrumDraft::default());
                    form.loading.set(false);
                    form.snackbar.set(true);
                    TimeoutFuture::new(hide_ms).await;
                    form.snackbar.set(false);
                }
                Err(e) => {
                    log::warn!("Scrum submission failed: {}", e);
                    form.error.set(Some(e.form_message(SCRUM_FAILURE_MESSAGE)));
                    form.loading.set(false);
                }
            }
        });
    }
}

pub fn use_scrum_form() -> ScrumForm {
    ScrumForm {
        open: RwSignal::new(false),
        draft: RwSignal::new(ScrumDraft::default()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        snackbar: RwSignal::new(false),
    }
}
