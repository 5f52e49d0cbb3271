//! Filter composition for list queries.
//!
//! Filters are turned into a flat list of [`Predicate`]s that the store
//! AND-combines. The list always starts with [`Predicate::Active`], so
//! soft-deleted rows never leak into a listing regardless of what the caller
//! asked for.

use serde::Deserialize;

use crate::error::CoreError;
use crate::todo::Priority;
use crate::types::DbId;

/// A single condition on a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Row is not soft-deleted.
    Active,
    /// Case-insensitive literal substring match on the given column.
    Contains { column: SearchColumn, needle: String },
    Completed(bool),
    CategoryIs(DbId),
    PriorityIs(Priority),
}

/// Text columns that support substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchColumn {
    Title,
    Name,
}

impl SearchColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchColumn::Title => "title",
            SearchColumn::Name => "name",
        }
    }
}

/// Optional todo filters as they arrive from the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoFilter {
    pub search: Option<String>,
    pub completed: Option<bool>,
    pub category_id: Option<DbId>,
    pub priority: Option<String>,
}

/// Optional category filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryFilter {
    pub search: Option<String>,
}

/// Build the predicate list for a todo listing.
///
/// An unknown priority is a validation error, never silently dropped.
pub fn build_todo_predicates(filter: &TodoFilter) -> Result<Vec<Predicate>, CoreError> {
    let mut predicates = vec![Predicate::Active];

    if let Some(needle) = search_term(filter.search.as_deref()) {
        predicates.push(Predicate::Contains {
            column: SearchColumn::Title,
            needle,
        });
    }

    if let Some(completed) = filter.completed {
        predicates.push(Predicate::Completed(completed));
    }

    if let Some(category_id) = filter.category_id {
        predicates.push(Predicate::CategoryIs(category_id));
    }

    if let Some(priority) = Priority::parse_optional(filter.priority.as_deref()).map_err(|_| {
        CoreError::Validation(format!(
            "invalid priority filter '{}'",
            filter.priority.as_deref().unwrap_or_default()
        ))
    })? {
        predicates.push(Predicate::PriorityIs(priority));
    }

    Ok(predicates)
}

/// Build the predicate list for a category listing.
pub fn build_category_predicates(filter: &CategoryFilter) -> Vec<Predicate> {
    let mut predicates = vec![Predicate::Active];

    if let Some(needle) = search_term(filter.search.as_deref()) {
        predicates.push(Predicate::Contains {
            column: SearchColumn::Name,
            needle,
        });
    }

    predicates
}

/// Trimmed search text, or `None` when nothing is left to match.
fn search_term(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
