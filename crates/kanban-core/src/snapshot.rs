//! Snapshot Codec
//!
//! Converts a [`Board`] to and from the two JSON blobs kept in local storage
//! (`kanbanColumns`, `kanbanTasks`) and validates what comes back.
//! Anything that fails validation is discarded in favour of the default board.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::board::Board;
use crate::defaults::default_board;
use crate::domain::{Column, Task};
use crate::error::SnapshotError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}){1,2}$").expect("valid color regex"));

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// Raw stored blobs; either may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSnapshot {
    pub columns: Option<String>,
    pub tasks: Option<String>,
}

impl StoredSnapshot {
    pub fn is_empty(&self) -> bool {
        self.columns.is_none() && self.tasks.is_none()
    }
}

/// Serialize a board into its stored form
pub fn encode(board: &Board) -> Result<StoredSnapshot, SnapshotError> {
    Ok(StoredSnapshot {
        columns: Some(serde_json::to_string(board.columns())?),
        tasks: Some(serde_json::to_string(board.tasks())?),
    })
}

/// Parse and validate stored blobs.
///
/// Returns `Ok(None)` when nothing is stored. A half-written snapshot
/// (only one blob present) is treated as invalid.
pub fn decode(stored: &StoredSnapshot) -> Result<Option<Board>, SnapshotError> {
    let (columns_json, tasks_json) = match (&stored.columns, &stored.tasks) {
        (None, None) => return Ok(None),
        (Some(c), Some(t)) => (c, t),
        (None, Some(_)) => {
            return Err(SnapshotError::InvalidColumn { index: 0, reason: "columns missing".into() })
        }
        (Some(_), None) => {
            return Err(SnapshotError::InvalidTask { index: 0, reason: "tasks missing".into() })
        }
    };

    let columns: Vec<Column> = serde_json::from_str(columns_json)?;
    let tasks: Vec<Task> = serde_json::from_str(tasks_json)?;
    validate(&columns, &tasks)?;
    Ok(Some(Board::from_parts(columns, tasks)))
}

/// Structural checks only. Titles and colors are form rules; anything the
/// board's own operations can produce must load back.
fn validate(columns: &[Column], tasks: &[Task]) -> Result<(), SnapshotError> {
    let mut column_ids = HashSet::new();
    for (index, column) in columns.iter().enumerate() {
        if column.id.as_str().is_empty() {
            return Err(SnapshotError::InvalidColumn { index, reason: "empty id".into() });
        }
        if !column_ids.insert(&column.id) {
            return Err(SnapshotError::DuplicateColumn(column.id.clone()));
        }
    }

    let mut task_ids = HashSet::new();
    for (index, task) in tasks.iter().enumerate() {
        let reason = if task.id.as_str().is_empty() {
            Some("empty id")
        } else if !task_ids.insert(&task.id) {
            Some("duplicate id")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(SnapshotError::InvalidTask { index, reason: reason.to_string() });
        }
        if !column_ids.contains(&task.column_id) {
            return Err(SnapshotError::OrphanedTask {
                task: task.id.clone(),
                column: task.column_id.clone(),
            });
        }
    }
    Ok(())
}

/// Stored board if present and valid, otherwise the default board
pub fn decode_or_default(stored: &StoredSnapshot) -> Board {
    match decode(stored) {
        Ok(Some(board)) => {
            info!(columns = board.columns().len(), tasks = board.tasks().len(), "loaded stored board");
            board
        }
        Ok(None) => {
            info!("no stored board; using default");
            default_board()
        }
        Err(e) => {
            warn!(error = %e, "invalid stored board; using default");
            default_board()
        }
    }
}
