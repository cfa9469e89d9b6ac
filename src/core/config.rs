use serde::{Deserialize, Serialize};

use crate::core::error::{DashboardError, Result};

/// Id of the optional `<script type="application/json">` element in
/// `index.html` that overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Runtime settings, provided to the view tree through context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub admin_email: String,
    pub admin_password: String,
    /// localStorage key holding the session flag.
    pub auth_storage_key: String,
    /// Simulated network delay before a scrum update or report is committed.
    pub submit_delay_ms: u32,
    pub snackbar_hide_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@example.com".to_string(),
            admin_password: "admin123".to_string(),
            auth_storage_key: "isAuthenticated".to_string(),
            submit_delay_ms: 1000,
            snackbar_hide_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a JSON object; fields it leaves out keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(raw).map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        if config.auth_storage_key.trim().is_empty() {
            return Err(DashboardError::InvalidConfig(
                "auth_storage_key must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads the config element from the page, falling back to defaults when
    /// it is missing or unreadable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring page configuration: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn credentials_match(&self, email: &str, password: &str) -> bool {
        email == self.admin_email && password == self.admin_password
    }
}
