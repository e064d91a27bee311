//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for the board, built on `kanban_core::DragTracker`.
//! The dragged entity is written to the event's `DataTransfer` on
//! `dragstart` and read back on `drop`, so the drop handler never trusts
//! component-local state alone.

use kanban_core::{ColumnId, DragOrigin, DragTracker, DropIntent, DropZone, TaskId};
use leptos::prelude::*;
use web_sys::DragEvent;

/// MIME type used on the drag-data channel
const PAYLOAD_FORMAT: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Drag session state machine
    pub tracker: RwSignal<DragTracker>,
    /// Column currently under the pointer during a drag
    pub hover_column: RwSignal<Option<ColumnId>>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        tracker: RwSignal::new(DragTracker::new()),
        hover_column: RwSignal::new(None),
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.tracker.update(|t| t.end());
    dnd.hover_column.set(None);
}

fn start_drag(dnd: &DndSignals, ev: &DragEvent, origin: DragOrigin) -> bool {
    let mut payload = None;
    dnd.tracker.update(|t| payload = t.begin(origin));
    let Some(payload) = payload else {
        return false;
    };
    if let Some(dt) = ev.data_transfer() {
        dt.set_effect_allowed("move");
        if dt.set_data(PAYLOAD_FORMAT, &payload.encode()).is_err() {
            tracing::warn!("could not write drag payload");
        }
    }
    true
}

fn read_payload(ev: &DragEvent) -> Option<String> {
    ev.data_transfer()
        .and_then(|dt| dt.get_data(PAYLOAD_FORMAT).ok())
        .filter(|s| !s.is_empty())
}

/// dragstart on a task card
pub fn make_on_task_dragstart(dnd: DndSignals, task_id: TaskId) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.stop_propagation();
        start_drag(&dnd, &ev, DragOrigin::TaskCard(task_id.clone()));
    }
}

/// dragstart on a column's drag handle
pub fn make_on_handle_dragstart(dnd: DndSignals, column_id: ColumnId) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.stop_propagation();
        start_drag(&dnd, &ev, DragOrigin::ColumnHandle(column_id.clone()));
    }
}

/// dragstart anywhere else in a column: cancels the native drag
pub fn make_on_column_body_dragstart(dnd: DndSignals, column_id: ColumnId) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if !start_drag(&dnd, &ev, DragOrigin::ColumnBody(column_id.clone())) {
            ev.prevent_default();
        }
    }
}

/// dragend on any drag source: always returns to idle
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// dragover on a column: accept the drop if the column is a valid target
pub fn make_on_column_dragover(dnd: DndSignals, column_id: ColumnId) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        let zone = dnd.tracker.with_untracked(|t| t.drop_zone(&column_id));
        if zone == DropZone::None {
            return;
        }
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.hover_column.with_untracked(|h| h.as_ref() != Some(&column_id)) {
            dnd.hover_column.set(Some(column_id.clone()));
        }
    }
}

/// dragleave on a column
pub fn make_on_column_dragleave(dnd: DndSignals, column_id: ColumnId) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        if dnd.hover_column.with_untracked(|h| h.as_ref() == Some(&column_id)) {
            dnd.hover_column.set(None);
        }
    }
}

/// drop on a column: resolve against the tracker and hand the intent to `on_drop`
pub fn make_on_column_drop<F>(dnd: DndSignals, column_id: ColumnId, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(DropIntent) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = read_payload(&ev);
        let intent = dnd
            .tracker
            .with_untracked(|t| t.resolve_drop(payload.as_deref(), &column_id));
        // The source may be re-rendered away before its dragend fires
        end_drag(&dnd);
        if let Some(intent) = intent {
            tracing::debug!(?intent, "drop accepted");
            on_drop(intent);
        }
    }
}

/// Reactive highlight for a column
pub fn drop_zone_for(dnd: DndSignals, column_id: ColumnId) -> impl Fn() -> DropZone + Clone + Send + Sync + 'static {
    move || {
        if dnd.hover_column.with(|h| h.as_ref() != Some(&column_id)) {
            return DropZone::None;
        }
        dnd.tracker.with(|t| t.drop_zone(&column_id))
    }
}

/// Whether this task is the one being dragged
pub fn is_dragging_task(dnd: DndSignals, task_id: TaskId) -> impl Fn() -> bool + Clone + Send + Sync + 'static {
    move || dnd.tracker.with(|t| t.session().dragging_task() == Some(&task_id))
}

/// Whether this column is the one being dragged
pub fn is_dragging_column(dnd: DndSignals, column_id: ColumnId) -> impl Fn() -> bool + Clone + Send + Sync + 'static {
    move || dnd.tracker.with(|t| t.session().dragging_column() == Some(&column_id))
}
