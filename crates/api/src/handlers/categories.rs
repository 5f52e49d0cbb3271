//! Handlers for `/api/categories`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tasklist_core::category::CategoryInput;
use tasklist_core::types::DbId;

use crate::error::AppResult;
use crate::handlers::path_id;
use crate::query::CategoryListParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let category = state.categories.create(&input).await?;

    Ok(ApiResponse::created("Category created successfully", category))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    params: Result<Query<CategoryListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let (categories, pagination) = state
        .categories
        .list(&params.filter(), &params.sort(), params.page())
        .await?;

    Ok(ApiResponse::paginated(
        "Categories retrieved successfully",
        categories,
        pagination,
    ))
}

/// GET /api/categories/all
///
/// Unpaginated, ordered by name. Feeds selection lists.
pub async fn all_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.categories.all().await?;

    Ok(ApiResponse::ok(
        "All categories retrieved successfully",
        categories,
    ))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path, "category")?;
    let category = state.categories.get(id).await?;

    Ok(ApiResponse::ok("Category retrieved successfully", category))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path, "category")?;
    let Json(input) = payload?;
    let category = state.categories.update(id, &input).await?;

    Ok(ApiResponse::ok("Category updated successfully", category))
}

/// DELETE /api/categories/{id}
///
/// Refused with 409 while any live todo references the category.
pub async fn delete_category(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path, "category")?;
    state.categories.delete(id).await?;

    Ok(ApiResponse::message("Category deleted successfully"))
}
