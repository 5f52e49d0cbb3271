//! Store traits consumed by the services, and their Postgres adapter.
//!
//! The services are generic over these traits so they can run against an
//! in-memory store in unit tests. [`PgStore`] is the only production
//! implementation; it delegates to the repositories and converts
//! `sqlx::Error` into typed [`CoreError`]s.

use async_trait::async_trait;
use tasklist_core::category::CategoryDraft;
use tasklist_core::error::CoreError;
use tasklist_core::pagination::PaginationMeta;
use tasklist_core::todo::TodoDraft;
use tasklist_core::types::DbId;

use crate::models::category::Category;
use crate::models::todo::Todo;
use crate::query::ListQuery;
use crate::repositories::{CategoryRepo, TodoRepo};
use crate::DbPool;

/// Message used whenever a todo points at a missing or deleted category.
pub const CATEGORY_MISSING_MESSAGE: &str = "specified category does not exist";

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, CoreError>;

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, CoreError>;

    async fn update_category(
        &self,
        id: DbId,
        draft: &CategoryDraft,
    ) -> Result<Option<Category>, CoreError>;

    /// Number of live todos that reference the category.
    async fn count_category_todos(&self, id: DbId) -> Result<i64, CoreError>;

    async fn soft_delete_category(&self, id: DbId) -> Result<bool, CoreError>;

    async fn list_categories(
        &self,
        list: &ListQuery,
    ) -> Result<(Vec<Category>, PaginationMeta), CoreError>;

    async fn all_categories(&self) -> Result<Vec<Category>, CoreError>;
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a todo. Fails with a validation error if the referenced category is not live.
    async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo, CoreError>;

    async fn find_todo(&self, id: DbId) -> Result<Option<Todo>, CoreError>;

    /// Replace a todo. `Ok(None)` when the todo does not exist.
    async fn update_todo(&self, id: DbId, draft: &TodoDraft) -> Result<Option<Todo>, CoreError>;

    async fn toggle_todo(&self, id: DbId) -> Result<Option<Todo>, CoreError>;

    async fn soft_delete_todo(&self, id: DbId) -> Result<bool, CoreError>;

    async fn list_todos(&self, list: &ListQuery) -> Result<(Vec<Todo>, PaginationMeta), CoreError>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn ensure_category(&self, category_id: Option<DbId>) -> Result<(), CoreError> {
        if let Some(id) = category_id {
            if !CategoryRepo::exists(&self.pool, id).await.map_err(classify)? {
                return Err(CoreError::Validation(CATEGORY_MISSING_MESSAGE.into()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, CoreError> {
        CategoryRepo::create(&self.pool, draft).await.map_err(classify)
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, CoreError> {
        CategoryRepo::find_by_id(&self.pool, id).await.map_err(classify)
    }

    async fn update_category(
        &self,
        id: DbId,
        draft: &CategoryDraft,
    ) -> Result<Option<Category>, CoreError> {
        CategoryRepo::update(&self.pool, id, draft)
            .await
            .map_err(classify)
    }

    async fn count_category_todos(&self, id: DbId) -> Result<i64, CoreError> {
        TodoRepo::count_by_category(&self.pool, id)
            .await
            .map_err(classify)
    }

    async fn soft_delete_category(&self, id: DbId) -> Result<bool, CoreError> {
        CategoryRepo::soft_delete(&self.pool, id)
            .await
            .map_err(classify)
    }

    async fn list_categories(
        &self,
        list: &ListQuery,
    ) -> Result<(Vec<Category>, PaginationMeta), CoreError> {
        let (rows, total) = CategoryRepo::list(&self.pool, list)
            .await
            .map_err(classify)?;
        Ok((rows, list.page.meta(total)))
    }

    async fn all_categories(&self) -> Result<Vec<Category>, CoreError> {
        CategoryRepo::list_all(&self.pool).await.map_err(classify)
    }
}

#[async_trait]
impl TodoStore for PgStore {
    async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo, CoreError> {
        self.ensure_category(draft.category_id).await?;
        TodoRepo::create(&self.pool, draft).await.map_err(classify)
    }

    async fn find_todo(&self, id: DbId) -> Result<Option<Todo>, CoreError> {
        TodoRepo::find_by_id(&self.pool, id).await.map_err(classify)
    }

    async fn update_todo(&self, id: DbId, draft: &TodoDraft) -> Result<Option<Todo>, CoreError> {
        if TodoRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify)?
            .is_none()
        {
            return Ok(None);
        }
        self.ensure_category(draft.category_id).await?;
        TodoRepo::update(&self.pool, id, draft)
            .await
            .map_err(classify)
    }

    async fn toggle_todo(&self, id: DbId) -> Result<Option<Todo>, CoreError> {
        TodoRepo::toggle_completed(&self.pool, id)
            .await
            .map_err(classify)
    }

    async fn soft_delete_todo(&self, id: DbId) -> Result<bool, CoreError> {
        TodoRepo::soft_delete(&self.pool, id).await.map_err(classify)
    }

    async fn list_todos(&self, list: &ListQuery) -> Result<(Vec<Todo>, PaginationMeta), CoreError> {
        let (rows, total) = TodoRepo::list(&self.pool, list).await.map_err(classify)?;
        Ok((rows, list.page.meta(total)))
    }
}

/// Convert a sqlx error into a typed domain error.
///
/// - Unique violations on `uq_categories_name` become conflicts.
/// - Foreign-key violations on `todos.category_id` become validation errors
///   (a category deleted between the existence check and the write).
/// - Check violations become validation errors.
/// - Everything else is internal and logged.
pub fn classify(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint == "uq_categories_name" {
                return CoreError::Conflict("category name already exists".into());
            }
            return CoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
        if db_err.is_foreign_key_violation() {
            return CoreError::Validation(CATEGORY_MISSING_MESSAGE.into());
        }
        if db_err.is_check_violation() {
            return CoreError::Validation(format!(
                "Value violates check constraint: {}",
                db_err.constraint().unwrap_or("unknown")
            ));
        }
    }

    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}
