//! Drag Session Tracking
//!
//! Decides, for one drag gesture, whether a task or a column is being moved,
//! which columns light up as drop zones, and what a drop should do.
//!
//! The dragged entity travels with the gesture as a [`DragPayload`] string
//! (the platform drag-data channel). On drop the payload is read back and
//! must match the recorded session; stale or duplicate drops are ignored.

use tracing::{debug, warn};

use crate::board::BoardAction;
use crate::domain::{ColumnId, TaskId};

const TASK_PREFIX: &str = "task:";
const COLUMN_PREFIX: &str = "column:";

/// Current drag state. Holds at most one entity by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    DraggingTask(TaskId),
    DraggingColumn(ColumnId),
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    pub fn dragging_task(&self) -> Option<&TaskId> {
        match self {
            DragSession::DraggingTask(id) => Some(id),
            _ => None,
        }
    }

    pub fn dragging_column(&self) -> Option<&ColumnId> {
        match self {
            DragSession::DraggingColumn(id) => Some(id),
            _ => None,
        }
    }
}

/// Where a drag gesture started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOrigin {
    /// A task card
    TaskCard(TaskId),
    /// The column's drag handle
    ColumnHandle(ColumnId),
    /// Anywhere else inside a column (header buttons, empty space)
    ColumnBody(ColumnId),
}

/// Identity of the dragged entity, carried through the drag-data channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    Task(TaskId),
    Column(ColumnId),
}

impl DragPayload {
    /// Wire form: `task:<id>` or `column:<id>`
    pub fn encode(&self) -> String {
        match self {
            DragPayload::Task(id) => format!("{TASK_PREFIX}{id}"),
            DragPayload::Column(id) => format!("{COLUMN_PREFIX}{id}"),
        }
    }

    /// Parse the wire form; anything malformed yields None
    pub fn decode(raw: &str) -> Option<Self> {
        if let Some(id) = raw.strip_prefix(TASK_PREFIX) {
            (!id.is_empty()).then(|| DragPayload::Task(TaskId::new(id)))
        } else if let Some(id) = raw.strip_prefix(COLUMN_PREFIX) {
            (!id.is_empty()).then(|| DragPayload::Column(ColumnId::new(id)))
        } else {
            None
        }
    }
}

/// Drop-zone highlight for a column under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZone {
    #[default]
    None,
    /// A dragged task would land in this column
    Task,
    /// A dragged column would be placed before this column
    Column,
}

/// Mutation requested by an accepted drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropIntent {
    MoveTask { task_id: TaskId, column_id: ColumnId },
    ReorderColumn { dragged: ColumnId, target: ColumnId },
}

impl DropIntent {
    pub fn into_action(self) -> BoardAction {
        match self {
            DropIntent::MoveTask { task_id, column_id } => BoardAction::MoveTask { task_id, column_id },
            DropIntent::ReorderColumn { dragged, target } => BoardAction::ReorderColumn { dragged, target },
        }
    }
}

/// Drag state machine: Idle -> DraggingTask | DraggingColumn -> Idle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragTracker {
    session: DragSession,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Start a gesture. Returns the payload to attach to the drag-data
    /// channel, or None when the origin does not start a drag.
    pub fn begin(&mut self, origin: DragOrigin) -> Option<DragPayload> {
        let (session, payload) = match origin {
            DragOrigin::TaskCard(id) => (DragSession::DraggingTask(id.clone()), DragPayload::Task(id)),
            DragOrigin::ColumnHandle(id) => (DragSession::DraggingColumn(id.clone()), DragPayload::Column(id)),
            DragOrigin::ColumnBody(_) => return None,
        };
        if !self.session.is_idle() {
            warn!(stale = ?self.session, "drag started before previous gesture ended; replacing session");
        }
        debug!(?session, "drag started");
        self.session = session;
        Some(payload)
    }

    /// End the gesture, whatever the reason (drop, cancel, interruption)
    pub fn end(&mut self) {
        if !self.session.is_idle() {
            debug!(session = ?self.session, "drag ended");
        }
        self.session = DragSession::Idle;
    }

    /// Highlight for `column_id` while the pointer is over it
    pub fn drop_zone(&self, column_id: &ColumnId) -> DropZone {
        match &self.session {
            DragSession::Idle => DropZone::None,
            DragSession::DraggingTask(_) => DropZone::Task,
            DragSession::DraggingColumn(dragged) if dragged == column_id => DropZone::None,
            DragSession::DraggingColumn(_) => DropZone::Column,
        }
    }

    /// Interpret a drop on `target` given the raw drag-data payload.
    ///
    /// The payload must match the recorded session; a column dropped on
    /// itself, a missing payload, or a mismatched one yields None.
    pub fn resolve_drop(&self, raw_payload: Option<&str>, target: &ColumnId) -> Option<DropIntent> {
        let Some(payload) = raw_payload.and_then(DragPayload::decode) else {
            debug!(raw = ?raw_payload, "drop ignored: missing or malformed payload");
            return None;
        };
        match (payload, &self.session) {
            (DragPayload::Task(id), DragSession::DraggingTask(current)) if &id == current => {
                Some(DropIntent::MoveTask { task_id: id, column_id: target.clone() })
            }
            (DragPayload::Column(id), DragSession::DraggingColumn(current)) if &id == current => {
                (&id != target).then(|| DropIntent::ReorderColumn { dragged: id, target: target.clone() })
            }
            (payload, session) => {
                debug!(?payload, ?session, "drop ignored: payload does not match drag session");
                None
            }
        }
    }
}
