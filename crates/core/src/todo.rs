//! Todo priorities, input validation, and normalization.
//!
//! [`prepare_todo`] is the single entry point the service calls before any
//! write: it validates a raw [`TodoInput`] and returns a normalized
//! [`TodoDraft`] ready for the store. Category existence is checked by the
//! service, since it needs storage.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// How far in the past a due date may lie at write time.
pub const DUE_DATE_TOLERANCE_HOURS: i64 = 24;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Severity rank used for ordering: `high` sorts first.
    pub fn rank(&self) -> i32 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Parse an optional raw value; empty or missing means "unset".
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Priority>, CoreError> {
        match raw {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(CoreError::Validation(format!(
                "invalid priority value '{other}'. Must be one of: low, medium, high"
            ))),
        }
    }
}

/// Lets row decoding read the `priority` column straight into the enum.
impl TryFrom<String> for Priority {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Input / draft
// ---------------------------------------------------------------------------

/// Request payload for creating or replacing a todo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<FixedOffset>>,
    pub category_id: Option<DbId>,
}

/// A validated, normalized todo ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    /// `None` keeps the stored value on update and means `false` on create.
    pub completed: Option<bool>,
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub category_id: Option<DbId>,
}

/// Validate `input` against the todo rules and normalize it.
///
/// `now` is passed in so the due-date window is testable.
pub fn prepare_todo(input: &TodoInput, now: Timestamp) -> Result<TodoDraft, CoreError> {
    let title = input.title.trim();
    validate_title(title)?;

    let description = input.description.as_deref().unwrap_or("").trim();
    validate_description(description)?;

    let priority = Priority::parse_optional(input.priority.as_deref())?.unwrap_or_default();

    let due_date = input.due_date.map(|d| d.with_timezone(&Utc));
    if let Some(due) = due_date {
        validate_due_date(due, now)?;
    }

    if let Some(category_id) = input.category_id {
        if category_id <= 0 {
            return Err(CoreError::Validation("invalid category ID".into()));
        }
    }

    Ok(TodoDraft {
        title: title.to_string(),
        description: description.to_string(),
        completed: input.completed,
        priority,
        due_date,
        category_id: input.category_id,
    })
}

/// Title must be non-empty and at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("todo title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "todo title cannot exceed {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "todo description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// A due date may not lie more than [`DUE_DATE_TOLERANCE_HOURS`] before `now`.
pub fn validate_due_date(due: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    let earliest = now - Duration::hours(DUE_DATE_TOLERANCE_HOURS);
    if due < earliest {
        return Err(CoreError::Validation("due date cannot be in the past".into()));
    }
    Ok(())
}
