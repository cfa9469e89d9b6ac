use thiserror::Error;

/// Errors raised at the fallible edges of the dashboard: browser storage,
/// drag payloads, the login check, form validation and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Browser storage is not available")]
    StorageUnavailable,

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Invalid drag payload: {0}")]
    InvalidPayload(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported log level: {0}")]
    InvalidLogLevel(String),
}

impl DashboardError {
    /// Text for a form alert. Validation problems are shown as they are,
    /// anything else as `fallback`.
    pub fn form_message(&self, fallback: &str) -> String {
        match self {
            DashboardError::MissingField(_) => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_reach_the_form() {
        assert_eq!(
            DashboardError::MissingField("today").form_message("Failed"),
            "Required field is empty: today"
        );
    }

    #[test]
    fn other_errors_use_the_fallback() {
        assert_eq!(
            DashboardError::Storage("quota".to_string()).form_message("Failed"),
            "Failed"
        );
    }
}
