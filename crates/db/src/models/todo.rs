//! Todo row model.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use tasklist_core::todo::Priority;
use tasklist_core::types::{DbId, Timestamp};

use crate::models::category::CategorySummary;

/// A row from the `todos` table joined with its live category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<DbId>,
    /// `NULL` when the todo has no category or the category is soft-deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Json<CategorySummary>>,
    #[serde(skip)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
