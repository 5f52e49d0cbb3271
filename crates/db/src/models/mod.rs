//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Request payloads live in `tasklist_core` next to their
//! validation rules.

pub mod category;
pub mod todo;
