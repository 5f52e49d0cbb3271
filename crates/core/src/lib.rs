//! Domain logic for the tasklist service.
//!
//! Everything here is pure: no database, no HTTP. The `db` crate renders the
//! predicates and sort specs built here into SQL, and the `api` crate calls
//! the validation and normalization functions before touching storage.

pub mod category;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod sorting;
pub mod todo;
pub mod types;
