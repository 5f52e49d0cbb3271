use crate::types::DbId;

/// Domain-level failure shared by every layer above `core`.
///
/// The HTTP layer maps each variant to a status code; nothing downstream
/// inspects the message text.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
