//! In-memory store used by the service unit tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tasklist_core::category::CategoryDraft;
use tasklist_core::error::CoreError;
use tasklist_core::filter::Predicate;
use tasklist_core::pagination::PaginationMeta;
use tasklist_core::todo::TodoDraft;
use tasklist_core::types::DbId;
use tasklist_db::models::category::{Category, CategorySummary};
use tasklist_db::models::todo::Todo;
use tasklist_db::query::ListQuery;
use tasklist_db::store::{CategoryStore, TodoStore, CATEGORY_MISSING_MESSAGE};

#[derive(Default)]
struct Inner {
    next_id: DbId,
    todos: Vec<Todo>,
    categories: Vec<Category>,
    calls: usize,
    last_list: Option<ListQuery>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls += 1;
        inner
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.inner.lock().unwrap().calls
    }

    /// Number of todos persisted, deleted ones included.
    pub fn todo_count(&self) -> usize {
        self.inner.lock().unwrap().todos.len()
    }

    pub fn last_list(&self) -> Option<ListQuery> {
        self.inner.lock().unwrap().last_list.clone()
    }
}

impl Inner {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn live_category(&self, id: DbId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id && c.deleted_at.is_none())
    }

    fn embed(&self, category_id: Option<DbId>) -> Option<Json<CategorySummary>> {
        category_id
            .and_then(|id| self.live_category(id))
            .map(|c| {
                Json(CategorySummary {
                    id: c.id,
                    name: c.name.clone(),
                    color: c.color.clone(),
                })
            })
    }

    fn check_category(&self, category_id: Option<DbId>) -> Result<(), CoreError> {
        match category_id {
            Some(id) if self.live_category(id).is_none() => {
                Err(CoreError::Validation(CATEGORY_MISSING_MESSAGE.into()))
            }
            _ => Ok(()),
        }
    }

    fn live_todo_mut(&mut self, id: DbId) -> Option<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
    }

    fn name_taken(&self, name: &str, except: Option<DbId>) -> bool {
        self.categories.iter().any(|c| {
            c.name == name && c.deleted_at.is_none() && Some(c.id) != except
        })
    }
}

fn conflict() -> CoreError {
    CoreError::Conflict("category name already exists".into())
}

fn matches_todo(todo: &Todo, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Active => todo.deleted_at.is_none(),
        Predicate::Contains { needle, .. } => todo
            .title
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        Predicate::Completed(completed) => todo.completed == *completed,
        Predicate::CategoryIs(id) => todo.category_id == Some(*id),
        Predicate::PriorityIs(priority) => todo.priority == *priority,
    }
}

fn matches_category(category: &Category, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Active => category.deleted_at.is_none(),
        Predicate::Contains { needle, .. } => category
            .name
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        _ => true,
    }
}

fn page_of<T>(rows: Vec<T>, list: &ListQuery) -> (Vec<T>, PaginationMeta) {
    let total = rows.len() as i64;
    let page = rows
        .into_iter()
        .skip(usize::try_from(list.page.offset()).unwrap_or(usize::MAX))
        .take(list.page.limit as usize)
        .collect();
    (page, list.page.meta(total))
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, CoreError> {
        let mut inner = self.lock();
        if inner.name_taken(&draft.name, None) {
            return Err(conflict());
        }
        let now = Utc::now();
        let category = Category {
            id: inner.next_id(),
            name: draft.name.clone(),
            color: draft.color.clone(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, CoreError> {
        Ok(self.lock().live_category(id).cloned())
    }

    async fn update_category(
        &self,
        id: DbId,
        draft: &CategoryDraft,
    ) -> Result<Option<Category>, CoreError> {
        let mut inner = self.lock();
        if inner.live_category(id).is_none() {
            return Ok(None);
        }
        if inner.name_taken(&draft.name, Some(id)) {
            return Err(conflict());
        }
        let category = inner
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| {
                c.name = draft.name.clone();
                c.color = draft.color.clone();
                c.updated_at = Utc::now();
                c.clone()
            });
        Ok(category)
    }

    async fn count_category_todos(&self, id: DbId) -> Result<i64, CoreError> {
        let inner = self.lock();
        Ok(inner
            .todos
            .iter()
            .filter(|t| t.category_id == Some(id) && t.deleted_at.is_none())
            .count() as i64)
    }

    async fn soft_delete_category(&self, id: DbId) -> Result<bool, CoreError> {
        let mut inner = self.lock();
        let now = Utc::now();
        match inner
            .categories
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
        {
            Some(category) => {
                category.deleted_at = Some(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_categories(
        &self,
        list: &ListQuery,
    ) -> Result<(Vec<Category>, PaginationMeta), CoreError> {
        let mut inner = self.lock();
        inner.last_list = Some(list.clone());
        let rows: Vec<Category> = inner
            .categories
            .iter()
            .filter(|c| list.predicates.iter().all(|p| matches_category(c, p)))
            .cloned()
            .collect();
        Ok(page_of(rows, list))
    }

    async fn all_categories(&self) -> Result<Vec<Category>, CoreError> {
        let inner = self.lock();
        let mut rows: Vec<Category> = inner
            .categories
            .iter()
            .filter(|c| c.deleted_at.is_none())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo, CoreError> {
        let mut inner = self.lock();
        inner.check_category(draft.category_id)?;
        let now = Utc::now();
        let todo = Todo {
            id: inner.next_id(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            completed: draft.completed.unwrap_or(false),
            priority: draft.priority,
            due_date: draft.due_date,
            category_id: draft.category_id,
            category: inner.embed(draft.category_id),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn find_todo(&self, id: DbId) -> Result<Option<Todo>, CoreError> {
        let inner = self.lock();
        Ok(inner
            .todos
            .iter()
            .find(|t| t.id == id && t.deleted_at.is_none())
            .cloned())
    }

    async fn update_todo(&self, id: DbId, draft: &TodoDraft) -> Result<Option<Todo>, CoreError> {
        let mut inner = self.lock();
        if inner.live_todo_mut(id).is_none() {
            return Ok(None);
        }
        inner.check_category(draft.category_id)?;
        let category = inner.embed(draft.category_id);
        Ok(inner.live_todo_mut(id).map(|todo| {
            todo.title = draft.title.clone();
            todo.description = draft.description.clone();
            todo.completed = draft.completed.unwrap_or(todo.completed);
            todo.priority = draft.priority;
            todo.due_date = draft.due_date;
            todo.category_id = draft.category_id;
            todo.category = category;
            todo.updated_at = Utc::now();
            todo.clone()
        }))
    }

    async fn toggle_todo(&self, id: DbId) -> Result<Option<Todo>, CoreError> {
        let mut inner = self.lock();
        Ok(inner.live_todo_mut(id).map(|todo| {
            todo.completed = !todo.completed;
            todo.updated_at = Utc::now();
            todo.clone()
        }))
    }

    async fn soft_delete_todo(&self, id: DbId) -> Result<bool, CoreError> {
        let mut inner = self.lock();
        Ok(inner
            .live_todo_mut(id)
            .map(|todo| todo.deleted_at = Some(Utc::now()))
            .is_some())
    }

    async fn list_todos(&self, list: &ListQuery) -> Result<(Vec<Todo>, PaginationMeta), CoreError> {
        let mut inner = self.lock();
        inner.last_list = Some(list.clone());
        let rows: Vec<Todo> = inner
            .todos
            .iter()
            .filter(|t| list.predicates.iter().all(|p| matches_todo(t, p)))
            .cloned()
            .collect();
        Ok(page_of(rows, list))
    }
}
