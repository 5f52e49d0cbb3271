pub mod categories;
pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health        health check
/// /todos         todo CRUD, listing, completion toggle
/// /categories    category CRUD, listing
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/todos", todos::router())
        .nest("/categories", categories::router())
}
