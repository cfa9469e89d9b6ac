use serde::{Deserialize, Serialize};

use super::board::{Board, ColumnId, MoveOutcome};
use crate::core::error::{DashboardError, Result};

/// MIME type the payload is stored under in the browser's `DataTransfer`.
pub const DRAG_MIME_TYPE: &str = "application/x-dashboard-task";

/// What a card hands to the column it is dropped on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub task_id: String,
    pub source_column: ColumnId,
}

impl DragPayload {
    pub fn new(task_id: impl Into<String>, source_column: ColumnId) -> Self {
        Self {
            task_id: task_id.into(),
            source_column,
        }
    }

    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DashboardError::InvalidPayload(e.to_string()))
    }

    /// Parses and validates a payload read back at the drop target.
    pub fn decode(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(DashboardError::InvalidPayload("empty payload".to_string()));
        }
        let wire: WirePayload =
            serde_json::from_str(raw).map_err(|e| DashboardError::InvalidPayload(e.to_string()))?;
        if wire.task_id.is_empty() {
            return Err(DashboardError::InvalidPayload("empty taskId".to_string()));
        }
        Ok(Self::new(wire.task_id, ColumnId::parse(&wire.source_column)?))
    }

    /// Applies this payload as a drop onto `target`.
    pub fn apply(&self, board: &mut Board, target: ColumnId) -> MoveOutcome {
        board.move_task(&self.task_id, self.source_column, target)
    }
}

// Column kept as text so an unknown column surfaces as `UnknownColumn`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePayload {
    task_id: String,
    source_column: String,
}

/// Holds the payload of the drag in progress. A drop takes it, so one
/// drag-start feeds exactly one drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<DragPayload>,
}

impl DragSession {
    pub fn begin(&mut self, payload: DragPayload) {
        self.active = Some(payload);
    }

    pub fn active(&self) -> Option<&DragPayload> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn take(&mut self) -> Option<DragPayload> {
        self.active.take()
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_wire_format() {
        let payload = DragPayload::new("task-3", ColumnId::InProgress);
        let raw = payload.encode().unwrap();
        assert_eq!(raw, r#"{"taskId":"task-3","sourceColumn":"in-progress"}"#);
        assert_eq!(DragPayload::decode(&raw).unwrap(), payload);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            DragPayload::decode(""),
            Err(DashboardError::InvalidPayload(_))
        ));
        assert!(matches!(
            DragPayload::decode("{not json"),
            Err(DashboardError::InvalidPayload(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"sourceColumn":"todo"}"#),
            Err(DashboardError::InvalidPayload(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"taskId":"","sourceColumn":"todo"}"#),
            Err(DashboardError::InvalidPayload(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"taskId":"task-1"}"#),
            Err(DashboardError::InvalidPayload(_))
        ));
        assert!(matches!(
            DragPayload::decode(r#"{"taskId":7,"sourceColumn":"todo"}"#),
            Err(DashboardError::InvalidPayload(_))
        ));
    }

    #[test]
    fn decode_rejects_unknown_column() {
        assert_eq!(
            DragPayload::decode(r#"{"taskId":"task-1","sourceColumn":"backlog"}"#),
            Err(DashboardError::UnknownColumn("backlog".to_string()))
        );
    }

    #[test]
    fn apply_moves_the_named_task() {
        let mut board = Board::seed();
        let payload = DragPayload::new("task-1", ColumnId::Todo);
        assert_eq!(payload.apply(&mut board, ColumnId::Done), MoveOutcome::Moved);
        assert_eq!(board.locate("task-1"), Some(ColumnId::Done));
    }

    #[test]
    fn session_is_consumed_by_one_drop() {
        let mut session = DragSession::default();
        assert!(!session.is_dragging());

        session.begin(DragPayload::new("task-2", ColumnId::Todo));
        assert!(session.is_dragging());
        assert_eq!(session.take(), Some(DragPayload::new("task-2", ColumnId::Todo)));
        assert_eq!(session.take(), None);

        session.begin(DragPayload::new("task-2", ColumnId::Todo));
        session.cancel();
        assert!(session.active().is_none());
    }
}
