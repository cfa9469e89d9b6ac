use serde::{Deserialize, Serialize};

/// Visual treatment applied to chips and badges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Error,
    Warning,
    Success,
    Primary,
    Secondary,
    Info,
    #[default]
    Default,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Error => "error",
            Tone::Warning => "warning",
            Tone::Success => "success",
            Tone::Primary => "primary",
            Tone::Secondary => "secondary",
            Tone::Info => "info",
            Tone::Default => "default",
        }
    }

    /// CSS class list for a chip rendered with this tone.
    pub fn chip_class(&self) -> String {
        format!("chip chip-{}", self.as_str())
    }
}
