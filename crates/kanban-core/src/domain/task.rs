//! Task Entity
//!
//! A card on the board. Every task lives in exactly one column.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{ColumnId, Entity, TaskId};

/// Task priority; determines display order within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Display rank: lower sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a stored/form value; unknown strings yield None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// A task card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Missing in older stored data; treated as Medium
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso_date")]
    pub due_date: Option<NaiveDate>,
    /// Owning column
    pub column_id: ColumnId,
}

impl Task {
    /// Build a task from form data, defaulting the priority
    pub fn from_draft(id: TaskId, column_id: ColumnId, draft: TaskDraft) -> Self {
        let mut task = Self {
            id,
            title: String::new(),
            description: None,
            priority: Priority::default(),
            assignee_id: None,
            assignee_name: None,
            due_date: None,
            column_id,
        };
        task.apply_draft(draft);
        task
    }

    /// Replace every mutable field; id and column are left untouched
    pub fn apply_draft(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.priority = draft.priority.unwrap_or_default();
        self.assignee_id = draft.assignee_id;
        self.assignee_name = draft.assignee_name;
        self.due_date = draft.due_date;
    }

    /// Current field values as a draft (used to prefill edit forms)
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: Some(self.priority),
            assignee_id: self.assignee_id.clone(),
            assignee_name: self.assignee_name.clone(),
            due_date: self.due_date,
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Mutable task fields as collected by the add/edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    /// None falls back to Medium
    pub priority: Option<Priority>,
    pub assignee_id: Option<String>,
    pub assignee_name: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Strict `YYYY-MM-DD` serde for optional dates
mod iso_date {
    use std::sync::LazyLock;

    use chrono::NaiveDate;
    use regex::Regex;
    use serde::{de, Deserialize, Deserializer, Serializer};

    static ISO_DATE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw {
            None => Ok(None),
            Some(s) => {
                if !ISO_DATE.is_match(&s) {
                    return Err(de::Error::custom(format!("expected YYYY-MM-DD, got {s:?}")));
                }
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map(Some)
                    .map_err(de::Error::custom)
            }
        }
    }
}
