//! Query-string parameter types for the list endpoints.
//!
//! Browsers and form libraries often send empty values (`?completed=`);
//! those are treated as absent rather than rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tasklist_core::filter::{CategoryFilter, TodoFilter};
use tasklist_core::pagination::PageRequest;
use tasklist_core::sorting::SortParams;
use tasklist_core::types::DbId;

/// `GET /api/todos` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category_id: Option<DbId>,
    pub priority: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl TodoListParams {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    pub fn filter(&self) -> TodoFilter {
        TodoFilter {
            search: self.search.clone(),
            completed: self.completed,
            category_id: self.category_id,
            priority: self.priority.clone(),
        }
    }

    pub fn sort(&self) -> SortParams {
        SortParams {
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

/// `GET /api/categories` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryListParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl CategoryListParams {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }

    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter {
            search: self.search.clone(),
        }
    }

    pub fn sort(&self) -> SortParams {
        SortParams {
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

/// Deserialize an optional value from its string form, mapping `""` to `None`.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
