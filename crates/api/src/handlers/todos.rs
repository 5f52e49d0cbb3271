//! Handlers for `/api/todos`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tasklist_core::todo::TodoInput;
use tasklist_core::types::DbId;

use crate::error::AppResult;
use crate::handlers::path_id;
use crate::query::TodoListParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let todo = state.todos.create(&input).await?;

    Ok(ApiResponse::created("Todo created successfully", todo))
}

/// GET /api/todos
///
/// Filtered, sorted, paginated listing.
pub async fn list_todos(
    State(state): State<AppState>,
    params: Result<Query<TodoListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let (todos, pagination) = state
        .todos
        .list(&params.filter(), &params.sort(), params.page())
        .await?;

    Ok(ApiResponse::paginated(
        "Todos retrieved successfully",
        todos,
        pagination,
    ))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path, "todo")?;
    let todo = state.todos.get(id).await?;

    Ok(ApiResponse::ok("Todo retrieved successfully", todo))
}

/// PUT /api/todos/{id}
///
/// Full replacement. An omitted `completed` keeps the stored value.
pub async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path, "todo")?;
    let Json(input) = payload?;
    let todo = state.todos.update(id, &input).await?;

    Ok(ApiResponse::ok("Todo updated successfully", todo))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path, "todo")?;
    state.todos.delete(id).await?;

    Ok(ApiResponse::message("Todo deleted successfully"))
}

/// PATCH /api/todos/{id}/complete
pub async fn toggle_todo_completion(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path, "todo")?;
    let todo = state.todos.toggle_completion(id).await?;

    Ok(ApiResponse::ok(
        "Todo completion status toggled successfully",
        todo,
    ))
}
