use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// POST   /                -> create_todo
/// GET    /                -> list_todos
/// GET    /{id}            -> get_todo
/// PUT    /{id}            -> update_todo
/// DELETE /{id}            -> delete_todo
/// PATCH  /{id}/complete   -> toggle_todo_completion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/{id}/complete", patch(todos::toggle_todo_completion))
}
