use leptos::prelude::*;

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::core::models::Route;
use crate::core::services::{BrowserStorage, Session};

pub const LOGOUT_NOTICE: &str = "Successfully logged out!";

/// Session handle shared through context. Copy, so handlers can capture it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    config: StoredValue<AppConfig>,
    notice: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Route> {
        let mut next = self.session.get_untracked();
        let route = self
            .config
            .with_value(|config| next.login(&BrowserStorage, config, email, password))?;
        self.notice.set(None);
        self.session.set(next);
        Ok(route)
    }

    pub fn logout(&self) -> Route {
        let mut next = self.session.get_untracked();
        let route = self
            .config
            .with_value(|config| next.logout(&BrowserStorage, config));
        self.notice.set(Some(LOGOUT_NOTICE.to_string()));
        self.session.set(next);
        route
    }

    /// One-shot message for the login page (set after logout).
    pub fn notice(&self) -> ReadSignal<Option<String>> {
        self.notice.read_only()
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

/// Restores the session from local storage and provides it to the tree.
pub fn provide_session(config: AppConfig) -> SessionContext {
    let session = Session::restore(&BrowserStorage, &config);
    log::info!(
        "Session restored (authenticated: {})",
        session.is_authenticated()
    );

    let context = SessionContext {
        session: RwSignal::new(session),
        config: StoredValue::new(config),
        notice: RwSignal::new(None),
    };
    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("session context")
}
