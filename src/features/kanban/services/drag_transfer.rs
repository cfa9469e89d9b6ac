use leptos::ev::DragEvent;
use crate::core::error::{DashboardError, Result};
use crate::core::models::{DragPayload, DRAG_MIME_TYPE};

// Store the payload on the drag event at drag-start
pub fn write_payload(ev: &DragEvent, payload: &DragPayload) -> Result<()> {
    let raw = payload.encode()?;
    let transfer = ev
        .data_transfer()
        .ok_or_else(|| DashboardError::InvalidPayload("drag event has no data transfer".to_string()))?;
    transfer
        .set_data(DRAG_MIME_TYPE, &raw)
        .map_err(|e| DashboardError::InvalidPayload(format!("Failed to set drag data: {:?}", e)))?;
    transfer.set_effect_allowed("move");
    Ok(())
}

// Read and validate the payload at the drop target. `None` when the event
// carries no payload at all, e.g. a drag that did not start on a card.
pub fn read_payload(ev: &DragEvent) -> Result<Option<DragPayload>> {
    let Some(transfer) = ev.data_transfer() else {
        return Ok(None);
    };
    let raw = transfer
        .get_data(DRAG_MIME_TYPE)
        .map_err(|e| DashboardError::InvalidPayload(format!("Failed to read drag data: {:?}", e)))?;
    if raw.is_empty() {
        return Ok(None);
    }
    DragPayload::decode(&raw).map(Some)
}
