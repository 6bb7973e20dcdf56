//! Compiles browse filter state into parameterized SQL.
//!
//! Compilation is total: any [`FilterState`] produces a query. User input
//! (the search fragment) only ever reaches SQLite as a bound parameter.

use std::collections::BTreeSet;

use rusqlite::types::Value;
use shelf_catalog::{Category, FilterState, SortMode, is_full_set};

/// Rows fetched per browse page.
pub const PAGE_SIZE: u32 = 10;

/// Columns selected for a full series row, in `row_to_series` order.
pub(crate) const SERIES_COLUMNS: &str = "id, primary_language, title_en, title_jp, description, \
     book_type, author_status, total_volumes, is_on_wishlist, user_status, volumes_owned, \
     priority, rating, notes";

/// A compiled query: SQL text with numbered placeholders plus the values bound to them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesQuery {
    sql: String,
    params: Vec<Value>,
}

impl SeriesQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Compile one page of series rows matching `filters`, skipping `offset` rows.
pub fn compile_page(filters: &FilterState, offset: u32) -> SeriesQuery {
    let mut params = Vec::new();
    let where_clause = where_clause(filters, &mut params);

    params.push(Value::Integer(i64::from(PAGE_SIZE)));
    let limit = params.len();
    params.push(Value::Integer(i64::from(offset)));
    let offset = params.len();

    let sql = format!(
        "SELECT {SERIES_COLUMNS} FROM series WHERE {where_clause} ORDER BY {} LIMIT ?{limit} OFFSET ?{offset}",
        order_clause(filters.sort),
    );
    SeriesQuery { sql, params }
}

/// Compile a count of every row matching `filters`.
pub fn compile_count(filters: &FilterState) -> SeriesQuery {
    let mut params = Vec::new();
    let where_clause = where_clause(filters, &mut params);
    let sql = format!("SELECT COUNT(*) FROM series WHERE {where_clause}");
    SeriesQuery { sql, params }
}

/// ORDER BY body for a sort mode. Ties fall back to identifier order.
fn order_clause(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Id => "id ASC",
        SortMode::AuthorStatus => "author_status ASC, id ASC",
        SortMode::UserStatus => "user_status ASC, id ASC",
        SortMode::Priority => "priority ASC, id ASC",
        SortMode::Rating => "rating DESC, id ASC",
    }
}

/// Conjunction of every active clause. Never empty: the rating clause is always present.
fn where_clause(filters: &FilterState, params: &mut Vec<Value>) -> String {
    let mut clauses = Vec::new();

    facet_clause("is_on_wishlist", &filters.placements, &mut clauses, params);
    facet_clause("book_type", &filters.book_types, &mut clauses, params);
    facet_clause("author_status", &filters.author_statuses, &mut clauses, params);
    facet_clause("user_status", &filters.user_statuses, &mut clauses, params);
    facet_clause("priority", &filters.priorities, &mut clauses, params);

    params.push(Value::Integer(i64::from(filters.rating.lo())));
    let lo = params.len();
    params.push(Value::Integer(i64::from(filters.rating.hi())));
    let hi = params.len();
    clauses.push(format!("rating BETWEEN ?{lo} AND ?{hi}"));

    if !filters.search.trim().is_empty() {
        params.push(Value::Text(like_pattern(&filters.search)));
        let n = params.len();
        clauses.push(format!(
            "(LOWER(title_en) LIKE ?{n} ESCAPE '\\' OR LOWER(title_jp) LIKE ?{n} ESCAPE '\\')"
        ));
    }

    clauses.join(" AND ")
}

/// Restrict `column` to the selected ordinals.
///
/// A full selection adds nothing. An empty selection adds a clause that
/// never matches, so the query returns no rows.
fn facet_clause<C: Category>(
    column: &str,
    selected: &BTreeSet<C>,
    clauses: &mut Vec<String>,
    params: &mut Vec<Value>,
) {
    if is_full_set(selected) {
        return;
    }
    if selected.is_empty() {
        clauses.push("0 = 1".to_string());
        return;
    }

    let placeholders: Vec<String> = selected
        .iter()
        .map(|c| {
            params.push(Value::Integer(c.ordinal()));
            format!("?{}", params.len())
        })
        .collect();
    clauses.push(format!("{column} IN ({})", placeholders.join(", ")));
}

/// Substring LIKE pattern for a search fragment, with LIKE wildcards escaped.
///
/// SQLite's `LOWER` only folds ASCII, so the fragment is folded the same way.
fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.to_ascii_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
