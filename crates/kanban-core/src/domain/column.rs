//! Column Entity
//!
//! Columns group tasks; their order on the board is their position in the
//! board's column sequence.

use serde::{Deserialize, Serialize};
use super::entity::{ColumnId, Entity};

/// A board column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier
    pub id: ColumnId,
    /// Display title
    pub title: String,
    /// Display color (hex, e.g., "#E5E7EB")
    pub color: String,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }
}

impl Entity for Column {
    type Id = ColumnId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
