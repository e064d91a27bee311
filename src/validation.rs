//! Form Validation
//!
//! Raw field checks for the task and column forms. The board itself accepts
//! whatever it is given; these rules only guard user input.

use chrono::{Datelike, NaiveDate};
use kanban_core::domain::find_assignee;
use kanban_core::snapshot::is_hex_color;
use kanban_core::{Priority, TaskDraft};

use crate::i18n::Key;

pub const TASK_TITLE_MAX: usize = 50;
pub const COLUMN_TITLE_MAX: usize = 30;
pub const DESCRIPTION_MAX: usize = 200;

/// Select value for "no assignee"
pub const UNASSIGNED: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    TitleRequired,
    TitleTooLong,
    DescriptionTooLong,
    ColorInvalid,
    DateInvalid,
}

impl FormError {
    pub fn message_key(&self) -> Key {
        match self {
            FormError::TitleRequired => Key::TitleRequired,
            FormError::TitleTooLong => Key::TitleTooLong,
            FormError::DescriptionTooLong => Key::DescriptionTooLong,
            FormError::ColorInvalid => Key::ColorInvalid,
            FormError::DateInvalid => Key::DateInvalid,
        }
    }
}

/// Raw task form fields, as strings from the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFormInput {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub assignee_id: String,
    pub due_date: String,
}

impl TaskFormInput {
    /// Prefill from an existing draft
    pub fn from_draft(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone().unwrap_or_default(),
            priority: draft.priority.unwrap_or_default().as_str().to_string(),
            assignee_id: draft.assignee_id.clone().unwrap_or_else(|| UNASSIGNED.to_string()),
            due_date: draft.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
        }
    }
}

fn check_title(title: &str, max: usize) -> Result<String, FormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FormError::TitleRequired);
    }
    if title.chars().count() > max {
        return Err(FormError::TitleTooLong);
    }
    Ok(title.to_string())
}

/// Validate task fields into a draft
pub fn task_draft(input: &TaskFormInput) -> Result<TaskDraft, FormError> {
    let title = check_title(&input.title, TASK_TITLE_MAX)?;

    let description = input.description.trim();
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(FormError::DescriptionTooLong);
    }

    let due_date = match input.due_date.trim() {
        "" => None,
        raw => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FormError::DateInvalid)?;
            // Stored dates are four-digit years
            if !(0..=9999).contains(&date.year()) {
                return Err(FormError::DateInvalid);
            }
            Some(date)
        }
    };

    // Unknown ids (including UNASSIGNED) mean no assignee
    let assignee = find_assignee(&input.assignee_id);

    Ok(TaskDraft {
        title,
        description: (!description.is_empty()).then(|| description.to_string()),
        priority: Some(Priority::parse(&input.priority).unwrap_or_default()),
        assignee_id: assignee.map(|a| a.id.to_string()),
        assignee_name: assignee.map(|a| a.name.to_string()),
        due_date,
    })
}

/// Validate column title and color
pub fn column_fields(title: &str, color: &str) -> Result<(String, String), FormError> {
    let title = check_title(title, COLUMN_TITLE_MAX)?;
    let color = color.trim();
    if !is_hex_color(color) {
        return Err(FormError::ColorInvalid);
    }
    Ok((title, color.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> TaskFormInput {
        TaskFormInput {
            title: title.to_string(),
            priority: "High".to_string(),
            assignee_id: "user-2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_task_draft_ok() {
        let draft = task_draft(&TaskFormInput { due_date: "2025-02-28".into(), ..input("  Ship it ") }).unwrap();
        assert_eq!(draft.title, "Ship it");
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.assignee_name.as_deref(), Some("Parvina"));
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2025, 2, 28));
        assert!(draft.description.is_none());
    }

    #[test]
    fn test_task_draft_errors() {
        assert_eq!(task_draft(&input("   ")), Err(FormError::TitleRequired));
        assert_eq!(task_draft(&input(&"x".repeat(51))), Err(FormError::TitleTooLong));
        assert_eq!(
            task_draft(&TaskFormInput { description: "d".repeat(201), ..input("ok") }),
            Err(FormError::DescriptionTooLong)
        );
        assert_eq!(
            task_draft(&TaskFormInput { due_date: "tomorrow".into(), ..input("ok") }),
            Err(FormError::DateInvalid)
        );
        assert_eq!(
            task_draft(&TaskFormInput { due_date: "12345-01-01".into(), ..input("ok") }),
            Err(FormError::DateInvalid)
        );
    }

    #[test]
    fn test_unassigned_and_unknown_priority() {
        let draft = task_draft(&TaskFormInput {
            assignee_id: UNASSIGNED.into(),
            priority: "Whatever".into(),
            ..input("ok")
        })
        .unwrap();
        assert!(draft.assignee_id.is_none());
        assert_eq!(draft.priority, Some(Priority::Medium));
    }

    #[test]
    fn test_form_input_round_trip_from_draft() {
        let draft = task_draft(&TaskFormInput { due_date: "2024-01-02".into(), ..input("T") }).unwrap();
        let prefilled = TaskFormInput::from_draft(&draft);
        assert_eq!(task_draft(&prefilled), Ok(draft));
    }

    #[test]
    fn test_column_fields() {
        assert_eq!(column_fields(" Review ", "#abc"), Ok(("Review".into(), "#abc".into())));
        assert_eq!(column_fields("", "#abc"), Err(FormError::TitleRequired));
        assert_eq!(column_fields(&"c".repeat(31), "#abc"), Err(FormError::TitleTooLong));
        assert_eq!(column_fields("Review", "blue"), Err(FormError::ColorInvalid));
    }
}
