//! Repository for the `categories` table.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tasklist_core::category::CategoryDraft;
use tasklist_core::types::DbId;

use crate::models::category::Category;
use crate::query::{push_order_by, push_page, push_where, ListQuery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, color, deleted_at, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// A duplicate live name surfaces as a unique violation on `uq_categories_name`.
    pub async fn create(pool: &PgPool, draft: &CategoryDraft) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&draft.name)
            .bind(&draft.color)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a live category with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Replace a category's name and color.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &CategoryDraft,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, color = $3
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.color)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a category by ID. Returns `true` if a row was marked deleted.
    ///
    /// Any todos still pointing at the category (only soft-deleted ones, once
    /// the caller has checked for live references) are detached first.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query("UPDATE todos SET category_id = NULL WHERE category_id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        let result = sqlx::query(
            "UPDATE categories SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Filtered, sorted, paginated listing. Returns the page and the full filtered count.
    pub async fn list(
        pool: &PgPool,
        list: &ListQuery,
    ) -> Result<(Vec<Category>, i64), sqlx::Error> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM categories c");
        push_where(&mut count, "c", &list.predicates);
        let total = count.build_query_scalar::<i64>().fetch_one(pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(
            "SELECT c.id, c.name, c.color, c.deleted_at, c.created_at, c.updated_at \
             FROM categories c",
        );
        push_where(&mut select, "c", &list.predicates);
        push_order_by(&mut select, "c", &list.sort);
        push_page(&mut select, &list.page);
        let rows = select.build_query_as::<Category>().fetch_all(pool).await?;

        Ok((rows, total))
    }

    /// All live categories ordered by name, for selection lists.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories WHERE deleted_at IS NULL ORDER BY name ASC"
        );
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
