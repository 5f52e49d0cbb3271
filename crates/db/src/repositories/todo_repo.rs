//! Repository for the `todos` table.
//!
//! Every read joins the todo's category so responses can embed it; the join
//! only matches live categories.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tasklist_core::todo::TodoDraft;
use tasklist_core::types::DbId;

use crate::models::todo::Todo;
use crate::query::{push_order_by, push_page, push_where, ListQuery};

/// Select list over a source aliased `t`, with the embedded category.
const SELECT_FROM: &str = "\
    SELECT t.id, t.title, t.description, t.completed, t.priority, t.due_date, \
           t.category_id, t.deleted_at, t.created_at, t.updated_at, \
           CASE WHEN c.id IS NULL THEN NULL \
                ELSE json_build_object('id', c.id, 'name', c.name, 'color', c.color) \
           END AS category";

/// Join clause for the embedded category.
const CATEGORY_JOIN: &str =
    "LEFT JOIN categories c ON c.id = t.category_id AND c.deleted_at IS NULL";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    pub async fn create(pool: &PgPool, draft: &TodoDraft) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                INSERT INTO todos (title, description, completed, priority, due_date, category_id)
                VALUES ($1, $2, COALESCE($3, FALSE), $4, $5, $6)
                RETURNING *
             )
             {SELECT_FROM} FROM t {CATEGORY_JOIN}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.completed)
            .bind(draft.priority.as_str())
            .bind(draft.due_date)
            .bind(draft.category_id)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "{SELECT_FROM} FROM todos t {CATEGORY_JOIN} WHERE t.id = $1 AND t.deleted_at IS NULL"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a todo's fields. `completed` keeps its stored value when the draft leaves it unset.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &TodoDraft,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                UPDATE todos SET
                    title = $2,
                    description = $3,
                    completed = COALESCE($4, completed),
                    priority = $5,
                    due_date = $6,
                    category_id = $7
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING *
             )
             {SELECT_FROM} FROM t {CATEGORY_JOIN}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.completed)
            .bind(draft.priority.as_str())
            .bind(draft.due_date)
            .bind(draft.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Flip the completion flag. Returns `None` if no live row matches.
    pub async fn toggle_completed(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                UPDATE todos SET completed = NOT completed
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING *
             )
             {SELECT_FROM} FROM t {CATEGORY_JOIN}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a todo by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE todos SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of live todos referencing a category.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM todos WHERE category_id = $1 AND deleted_at IS NULL",
        )
        .bind(category_id)
        .fetch_one(pool)
        .await
    }

    /// Filtered, sorted, paginated listing. Returns the page and the full filtered count.
    pub async fn list(pool: &PgPool, list: &ListQuery) -> Result<(Vec<Todo>, i64), sqlx::Error> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM todos t");
        push_where(&mut count, "t", &list.predicates);
        let total = count.build_query_scalar::<i64>().fetch_one(pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(SELECT_FROM);
        select.push(" FROM todos t ");
        select.push(CATEGORY_JOIN);
        push_where(&mut select, "t", &list.predicates);
        push_order_by(&mut select, "t", &list.sort);
        push_page(&mut select, &list.page);
        let rows = select.build_query_as::<Todo>().fetch_all(pool).await?;

        Ok((rows, total))
    }
}
