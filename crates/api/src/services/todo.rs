use chrono::Utc;
use tasklist_core::error::CoreError;
use tasklist_core::filter::{build_todo_predicates, TodoFilter};
use tasklist_core::pagination::{PageRequest, PaginationMeta};
use tasklist_core::sorting::{resolve_todo_sort, SortParams};
use tasklist_core::todo::{prepare_todo, TodoInput};
use tasklist_core::types::{validate_id, DbId};
use tasklist_db::models::todo::Todo;
use tasklist_db::query::ListQuery;
use tasklist_db::store::TodoStore;

const ENTITY: &str = "Todo";

/// Todo operations on top of a [`TodoStore`].
#[derive(Debug, Clone)]
pub struct TodoService<S> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: &TodoInput) -> Result<Todo, CoreError> {
        let draft = prepare_todo(input, Utc::now())?;
        let todo = self.store.create_todo(&draft).await?;

        tracing::info!(todo_id = todo.id, "Todo created");
        Ok(todo)
    }

    pub async fn get(&self, id: DbId) -> Result<Todo, CoreError> {
        validate_id(id, "todo")?;
        self.store
            .find_todo(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Replace every field of a todo. An unset `completed` keeps the stored value.
    pub async fn update(&self, id: DbId, input: &TodoInput) -> Result<Todo, CoreError> {
        validate_id(id, "todo")?;
        let draft = prepare_todo(input, Utc::now())?;
        let todo = self
            .store
            .update_todo(id, &draft)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(todo_id = id, "Todo updated");
        Ok(todo)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        validate_id(id, "todo")?;
        if !self.store.soft_delete_todo(id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }

        tracing::info!(todo_id = id, "Todo deleted");
        Ok(())
    }

    /// Flip the completion flag and return the updated todo.
    pub async fn toggle_completion(&self, id: DbId) -> Result<Todo, CoreError> {
        validate_id(id, "todo")?;
        let todo = self
            .store
            .toggle_todo(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(todo_id = id, completed = todo.completed, "Todo completion toggled");
        Ok(todo)
    }

    pub async fn list(
        &self,
        filter: &TodoFilter,
        sort: &SortParams,
        page: PageRequest,
    ) -> Result<(Vec<Todo>, PaginationMeta), CoreError> {
        let list = ListQuery {
            predicates: build_todo_predicates(filter)?,
            sort: resolve_todo_sort(sort),
            page,
        };
        self.store.list_todos(&list).await
    }
}
