/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Reject non-positive ids before any storage access.
pub fn validate_id(id: DbId, entity: &str) -> Result<(), crate::error::CoreError> {
    if id <= 0 {
        return Err(crate::error::CoreError::Validation(format!(
            "invalid {entity} ID"
        )));
    }
    Ok(())
}
