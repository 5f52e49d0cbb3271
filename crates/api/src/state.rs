use std::sync::Arc;

use tasklist_db::store::PgStore;

use crate::services::{CategoryService, TodoService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tasklist_db::DbPool,
    pub todos: Arc<TodoService<PgStore>>,
    pub categories: Arc<CategoryService<PgStore>>,
}

impl AppState {
    pub fn new(pool: tasklist_db::DbPool) -> Self {
        let store = PgStore::new(pool.clone());
        Self {
            pool,
            todos: Arc::new(TodoService::new(store.clone())),
            categories: Arc::new(CategoryService::new(store)),
        }
    }
}
