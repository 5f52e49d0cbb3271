use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes mounted at `/categories`.
///
/// ```text
/// POST   /        -> create_category
/// GET    /        -> list_categories
/// GET    /all     -> all_categories
/// GET    /{id}    -> get_category
/// PUT    /{id}    -> update_category
/// DELETE /{id}    -> delete_category (409 while todos reference it)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/all", get(categories::all_categories))
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
}
