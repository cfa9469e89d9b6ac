use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::seed_date;
use super::tone::Tone;
use crate::core::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Sales,
    Inventory,
    Expense,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Sales => "sales",
            ReportKind::Inventory => "inventory",
            ReportKind::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Sales Report",
            ReportKind::Inventory => "Inventory Report",
            ReportKind::Expense => "Expense Report",
        }
    }

    pub fn all() -> Vec<ReportKind> {
        vec![ReportKind::Sales, ReportKind::Inventory, ReportKind::Expense]
    }

    pub fn parse(raw: &str) -> Option<ReportKind> {
        Self::all().into_iter().find(|k| k.as_str() == raw)
    }

    pub fn tone(&self) -> Tone {
        match self {
            ReportKind::Sales => Tone::Primary,
            ReportKind::Inventory => Tone::Secondary,
            ReportKind::Expense => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Rejected,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Submitted => "submitted",
            ReportStatus::Rejected => "rejected",
        }
    }

    /// Option label in the create form. Rejected is not selectable there.
    pub fn form_label(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Submitted => "Submit Now",
            ReportStatus::Rejected => "Rejected",
        }
    }

    pub fn selectable() -> Vec<ReportStatus> {
        vec![ReportStatus::Draft, ReportStatus::Submitted]
    }

    pub fn parse(raw: &str) -> Option<ReportStatus> {
        [ReportStatus::Draft, ReportStatus::Submitted, ReportStatus::Rejected]
            .into_iter()
            .find(|s| s.as_str() == raw)
    }

    pub fn tone(&self) -> Tone {
        match self {
            ReportStatus::Submitted => Tone::Success,
            ReportStatus::Draft => Tone::Warning,
            ReportStatus::Rejected => Tone::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub id: u32,
    pub title: String,
    pub kind: ReportKind,
    pub status: ReportStatus,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportDraft {
    pub title: String,
    pub kind: ReportKind,
    pub description: String,
    pub status: ReportStatus,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: ReportKind::Sales,
            description: String::new(),
            status: ReportStatus::Draft,
        }
    }
}

impl ReportDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DashboardError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(DashboardError::MissingField("description"));
        }
        Ok(())
    }
}

/// Report table contents, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLog {
    reports: Vec<Report>,
}

impl ReportLog {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    pub fn seed() -> Self {
        Self::new(vec![
            Report {
                id: 1,
                title: "Monthly Sales Report".to_string(),
                kind: ReportKind::Sales,
                status: ReportStatus::Submitted,
                date: seed_date(2024, 1, 15),
                description: "Detailed analysis of January 2024 sales performance".to_string(),
            },
            Report {
                id: 2,
                title: "Inventory Status".to_string(),
                kind: ReportKind::Inventory,
                status: ReportStatus::Draft,
                date: seed_date(2024, 1, 14),
                description: "Current inventory levels and restock requirements".to_string(),
            },
        ])
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn submit(&mut self, draft: ReportDraft, today: NaiveDate) -> Result<u32> {
        draft.validate()?;
        let id = self.reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.reports.insert(
            0,
            Report {
                id,
                title: draft.title,
                kind: draft.kind,
                status: draft.status,
                date: today,
                description: draft.description,
            },
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_prepends_dated_report() {
        let mut log = ReportLog::seed();
        let draft = ReportDraft {
            title: "Q1 Expenses".to_string(),
            kind: ReportKind::Expense,
            description: "Travel and tooling".to_string(),
            status: ReportStatus::Submitted,
        };
        let id = log.submit(draft, seed_date(2024, 2, 1)).unwrap();
        assert_eq!(id, 3);
        let first = &log.reports()[0];
        assert_eq!(first.title, "Q1 Expenses");
        assert_eq!(first.date, seed_date(2024, 2, 1));
        assert_eq!(first.kind.tone(), Tone::Info);
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut log = ReportLog::seed();
        let draft = ReportDraft {
            description: "body".to_string(),
            ..ReportDraft::default()
        };
        assert_eq!(
            log.submit(draft, seed_date(2024, 2, 1)),
            Err(DashboardError::MissingField("title"))
        );
        assert_eq!(log.reports().len(), 2);
    }

    #[test]
    fn status_tones() {
        assert_eq!(ReportStatus::Submitted.tone(), Tone::Success);
        assert_eq!(ReportStatus::Draft.tone(), Tone::Warning);
        assert_eq!(ReportStatus::Rejected.tone(), Tone::Error);
        assert_eq!(ReportStatus::parse("rejected"), Some(ReportStatus::Rejected));
        assert_eq!(ReportKind::parse("payroll"), None);
    }
}
