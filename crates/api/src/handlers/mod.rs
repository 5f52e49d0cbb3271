pub mod categories;
pub mod todos;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use tasklist_core::error::CoreError;
use tasklist_core::types::DbId;

use crate::error::AppResult;

/// Unwrap a numeric `{id}` path segment, reporting a malformed one the same
/// way as a non-positive id.
pub(crate) fn path_id(path: Result<Path<DbId>, PathRejection>, entity: &str) -> AppResult<DbId> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected path id");
            Err(CoreError::Validation(format!("invalid {entity} ID")).into())
        }
    }
}
