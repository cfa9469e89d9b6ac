pub mod board;
pub mod calendar;
pub mod report;
pub mod route;
pub mod scrum;
pub mod task;
pub mod tone;
pub mod transfer;
pub mod user;

pub use board::{Board, BoardStats, Column, ColumnId, MoveOutcome};
pub use report::{Report, ReportDraft, ReportKind, ReportLog, ReportStatus};
pub use route::{guard_redirect, Route};
pub use scrum::{ScrumDraft, ScrumEntry, ScrumLog, ScrumStatus, NO_BLOCKERS};
pub use task::{priority_tone, Assignee, Priority, Task};
pub use tone::Tone;
pub use transfer::{DragPayload, DragSession, DRAG_MIME_TYPE};
pub use user::{Role, User, UserDirectory, UserDraft, UserStatus};
