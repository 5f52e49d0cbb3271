//! Business rules for todos and categories.
//!
//! Services are generic over the store traits from `tasklist_db::store` so
//! they run unchanged against Postgres in production and an in-memory store
//! in unit tests.

pub mod category;
pub mod todo;

#[cfg(test)]
mod memory;

pub use category::CategoryService;
pub use todo::TodoService;
