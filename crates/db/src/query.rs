//! Rendering of core predicates and sort specs into SQL.
//!
//! User-supplied values only ever reach the database through `push_bind`.
//! Column names come from the core allow-lists, never from the request.

use sqlx::{Postgres, QueryBuilder};
use tasklist_core::filter::Predicate;
use tasklist_core::pagination::PageRequest;
use tasklist_core::sorting::{SortKey, SortSpec};

/// Everything a store needs to run a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub predicates: Vec<Predicate>,
    pub sort: SortSpec,
    pub page: PageRequest,
}

/// Append `WHERE p1 AND p2 ...` for `predicates`, qualifying columns with `alias`.
pub fn push_where(qb: &mut QueryBuilder<'_, Postgres>, alias: &str, predicates: &[Predicate]) {
    if predicates.is_empty() {
        return;
    }

    qb.push(" WHERE ");
    let mut clauses = qb.separated(" AND ");
    for predicate in predicates {
        match predicate {
            Predicate::Active => {
                clauses.push(format!("{alias}.deleted_at IS NULL"));
            }
            Predicate::Contains { column, needle } => {
                // strpos keeps the match literal: `%` and `_` are not wildcards here.
                clauses.push(format!("strpos(lower({alias}.{}), lower(", column.as_str()));
                clauses.push_bind_unseparated(needle.clone());
                clauses.push_unseparated(")) > 0");
            }
            Predicate::Completed(completed) => {
                clauses.push(format!("{alias}.completed = "));
                clauses.push_bind_unseparated(*completed);
            }
            Predicate::CategoryIs(category_id) => {
                clauses.push(format!("{alias}.category_id = "));
                clauses.push_bind_unseparated(*category_id);
            }
            Predicate::PriorityIs(priority) => {
                clauses.push(format!("{alias}.priority = "));
                clauses.push_bind_unseparated(priority.as_str());
            }
        }
    }
}

/// Append `ORDER BY ...` for `sort`, with `id` as a tiebreaker in the same direction.
pub fn push_order_by(qb: &mut QueryBuilder<'_, Postgres>, alias: &str, sort: &SortSpec) {
    qb.push(" ORDER BY ");
    qb.push(order_expression(alias, &sort.key));
    let direction = sort.direction.as_sql();
    qb.push(format!(" {direction}, {alias}.id {direction}"));
}

/// Append `LIMIT .. OFFSET ..` for `page`.
pub fn push_page(qb: &mut QueryBuilder<'_, Postgres>, page: &PageRequest) {
    qb.push(" LIMIT ");
    qb.push_bind(page.limit);
    qb.push(" OFFSET ");
    qb.push_bind(page.offset());
}

fn order_expression(alias: &str, key: &SortKey) -> String {
    match key {
        SortKey::Column(column) => format!("{alias}.{column}"),
        SortKey::PriorityRank => format!(
            "CASE {alias}.priority WHEN 'high' THEN 1 WHEN 'medium' THEN 2 WHEN 'low' THEN 3 END"
        ),
    }
}
