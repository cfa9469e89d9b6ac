use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::seed_date;
use super::tone::Tone;
use crate::core::error::{DashboardError, Result};

pub const NO_BLOCKERS: &str = "None";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScrumStatus {
    Submitted,
}

impl ScrumStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrumStatus::Submitted => "submitted",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrumEntry {
    pub id: u32,
    pub date: NaiveDate,
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
    pub status: ScrumStatus,
}

impl ScrumEntry {
    pub fn blockers_tone(&self) -> Tone {
        if self.blockers == NO_BLOCKERS {
            Tone::Success
        } else {
            Tone::Error
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrumDraft {
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
}

impl Default for ScrumDraft {
    fn default() -> Self {
        Self {
            yesterday: String::new(),
            today: String::new(),
            blockers: NO_BLOCKERS.to_string(),
        }
    }
}

impl ScrumDraft {
    pub fn validate(&self) -> Result<()> {
        if self.yesterday.trim().is_empty() {
            return Err(DashboardError::MissingField("yesterday"));
        }
        if self.today.trim().is_empty() {
            return Err(DashboardError::MissingField("today"));
        }
        if self.blockers.trim().is_empty() {
            return Err(DashboardError::MissingField("blockers"));
        }
        Ok(())
    }
}

/// Standup history, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrumLog {
    entries: Vec<ScrumEntry>,
}

impl ScrumLog {
    pub fn new(entries: Vec<ScrumEntry>) -> Self {
        Self { entries }
    }

    pub fn seed() -> Self {
        Self::new(vec![
            ScrumEntry {
                id: 1,
                date: seed_date(2024, 1, 15),
                yesterday: "Completed user authentication implementation".to_string(),
                today: "Working on API integration".to_string(),
                blockers: NO_BLOCKERS.to_string(),
                status: ScrumStatus::Submitted,
            },
            ScrumEntry {
                id: 2,
                date: seed_date(2024, 1, 14),
                yesterday: "Set up project structure".to_string(),
                today: "Starting user authentication".to_string(),
                blockers: "Waiting for API credentials".to_string(),
                status: ScrumStatus::Submitted,
            },
        ])
    }

    pub fn entries(&self) -> &[ScrumEntry] {
        &self.entries
    }

    /// Validates `draft` and prepends it as a submitted entry dated `today`.
    pub fn submit(&mut self, draft: ScrumDraft, today: NaiveDate) -> Result<u32> {
        draft.validate()?;
        let id = self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.entries.insert(
            0,
            ScrumEntry {
                id,
                date: today,
                yesterday: draft.yesterday,
                today: draft.today,
                blockers: draft.blockers,
                status: ScrumStatus::Submitted,
            },
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_prepends_with_next_id() {
        let mut log = ScrumLog::seed();
        let draft = ScrumDraft {
            yesterday: "Reviewed PRs".to_string(),
            today: "Kanban drag and drop".to_string(),
            ..ScrumDraft::default()
        };
        let id = log.submit(draft, seed_date(2024, 1, 16)).unwrap();

        assert_eq!(id, 3);
        let first = &log.entries()[0];
        assert_eq!(first.id, 3);
        assert_eq!(first.date, seed_date(2024, 1, 16));
        assert_eq!(first.blockers, NO_BLOCKERS);
        assert_eq!(first.status, ScrumStatus::Submitted);
        assert_eq!(log.entries().len(), 3);
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut log = ScrumLog::seed();
        let err = log
            .submit(ScrumDraft::default(), seed_date(2024, 1, 16))
            .unwrap_err();
        assert_eq!(err, DashboardError::MissingField("yesterday"));

        let draft = ScrumDraft {
            yesterday: "x".to_string(),
            today: "y".to_string(),
            blockers: "  ".to_string(),
        };
        assert_eq!(draft.validate(), Err(DashboardError::MissingField("blockers")));
        assert_eq!(log.entries().len(), 2);
    }

    #[test]
    fn blockers_tone_depends_on_exact_none() {
        let log = ScrumLog::seed();
        assert_eq!(log.entries()[0].blockers_tone(), Tone::Success);
        assert_eq!(log.entries()[1].blockers_tone(), Tone::Error);
    }
}
