//! Sort resolution against per-resource allow-lists.
//!
//! Unknown fields fall back to `created_at` and unknown directions to `desc`;
//! nothing here ever fails. Todo priority sorts by severity rank rather than
//! by the stored string.

use serde::Deserialize;

/// Column used when the requested sort field is missing or not allowed.
pub const DEFAULT_SORT_FIELD: &str = "created_at";

/// Sortable todo columns.
pub const TODO_SORT_FIELDS: &[&str] = &[
    "title",
    "completed",
    "priority",
    "due_date",
    "created_at",
    "updated_at",
];

/// Sortable category columns.
pub const CATEGORY_SORT_FIELDS: &[&str] = &["name", "created_at", "updated_at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Exact, case-sensitive match on `asc` / `desc`; anything else is `Desc`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// What a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// A plain column from the allow-list.
    Column(&'static str),
    /// Todo priority by severity rank (high=1, medium=2, low=3).
    PriorityRank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Raw `sort_by` / `sort_order` query values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortParams {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Resolve the requested field against `allowed`.
///
/// The returned name always points into `allowed` (or is the default), so it
/// is safe to splice into SQL.
pub fn resolve_field(requested: Option<&str>, allowed: &[&'static str]) -> &'static str {
    requested
        .and_then(|field| allowed.iter().copied().find(|a| *a == field))
        .unwrap_or(DEFAULT_SORT_FIELD)
}

pub fn resolve_todo_sort(params: &SortParams) -> SortSpec {
    let field = resolve_field(params.sort_by.as_deref(), TODO_SORT_FIELDS);
    let key = if field == "priority" {
        SortKey::PriorityRank
    } else {
        SortKey::Column(field)
    };
    SortSpec {
        key,
        direction: SortDirection::parse(params.sort_order.as_deref()),
    }
}

pub fn resolve_category_sort(params: &SortParams) -> SortSpec {
    SortSpec {
        key: SortKey::Column(resolve_field(
            params.sort_by.as_deref(),
            CATEGORY_SORT_FIELDS,
        )),
        direction: SortDirection::parse(params.sort_order.as_deref()),
    }
}
