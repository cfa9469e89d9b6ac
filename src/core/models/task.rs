use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tone::Tone;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::High, Priority::Medium, Priority::Low]
    }

    pub fn parse(raw: &str) -> Option<Priority> {
        match raw {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Priority::High => Tone::Error,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

/// Tone for a raw priority string. Anything outside high/medium/low gets the
/// neutral treatment.
pub fn priority_tone(raw: &str) -> Tone {
    Priority::parse(raw).map(|p| p.tone()).unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignee {
    pub name: String,
    pub initials: String,
}

impl Assignee {
    pub fn new(name: &str, initials: &str) -> Self {
        Self {
            name: name.to_string(),
            initials: initials.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignee: Assignee,
    pub due_date: NaiveDate,
    pub comments: u32,
}

impl Task {
    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn update_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn update_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn update_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = due_date;
    }

    /// Due date as shown on cards and in the date input.
    pub fn due_date_label(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_priorities_map_to_their_tone() {
        assert_eq!(priority_tone("high"), Tone::Error);
        assert_eq!(priority_tone("medium"), Tone::Warning);
        assert_eq!(priority_tone("low"), Tone::Success);
    }

    #[test]
    fn unknown_priorities_fall_back_to_default() {
        for raw in ["", "HIGH", "urgent", " low", "null"] {
            assert_eq!(priority_tone(raw), Tone::Default, "input {raw:?}");
        }
    }

    #[test]
    fn priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        for p in Priority::all() {
            assert_eq!(Priority::parse(p.as_str()), Some(p));
        }
    }
}
