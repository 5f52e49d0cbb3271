//! Category row model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklist_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
    #[serde(skip)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The slice of a category embedded in todo responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: DbId,
    pub name: String,
    pub color: String,
}
