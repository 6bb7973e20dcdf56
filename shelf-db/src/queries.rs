//! Read queries for the series table.

use rusqlite::{Connection, params, params_from_iter};
use shelf_catalog::{
    AuthorStatus, BookType, Category, FilterState, Language, MAX_RATING, Priority, Series,
    UserStatus,
};

use crate::operations::OperationError;
use crate::query::{SERIES_COLUMNS, SeriesQuery, compile_count};

// ── Series Lookups ──────────────────────────────────────────────────────────

/// Every series, in identifier order.
pub fn fetch_all(conn: &Connection) -> Result<Vec<Series>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SERIES_COLUMNS} FROM series ORDER BY id ASC"
    ))?;
    let rows = stmt.query_map([], row_to_series)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find one series by identifier.
pub fn fetch_series(conn: &Connection, id: i64) -> Result<Series, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SERIES_COLUMNS} FROM series WHERE id = ?1"
    ))?;
    match stmt.query_row(params![id], row_to_series) {
        Ok(series) => Ok(series),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(OperationError::NotFound { id }),
        Err(e) => Err(e.into()),
    }
}

/// Run a compiled page query.
pub fn fetch_by_query(conn: &Connection, query: &SeriesQuery) -> Result<Vec<Series>, OperationError> {
    log::debug!("fetch_by_query: {} ({} params)", query.sql(), query.params().len());
    let mut stmt = conn.prepare(query.sql())?;
    let rows = stmt.query_map(params_from_iter(query.params()), row_to_series)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Count the series matching a filter state.
pub fn count_matching(conn: &Connection, filters: &FilterState) -> Result<i64, OperationError> {
    let query = compile_count(filters);
    let count = conn.query_row(query.sql(), params_from_iter(query.params()), |row| {
        row.get(0)
    })?;
    Ok(count)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall shelf statistics.
pub fn shelf_stats(conn: &Connection) -> Result<ShelfStats, OperationError> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM series", [], |r| r.get(0))?;
    let wishlist: i64 = conn.query_row(
        "SELECT COUNT(*) FROM series WHERE is_on_wishlist = 1",
        [],
        |r| r.get(0),
    )?;

    let mut stmt = conn.prepare(
        "SELECT user_status, COUNT(*) FROM series WHERE is_on_wishlist = 0
         GROUP BY user_status ORDER BY user_status",
    )?;
    let mut by_user_status: Vec<(UserStatus, i64)> =
        UserStatus::all().iter().map(|&s| (s, 0)).collect();
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
    for row in rows {
        let (ordinal, count) = row?;
        let status = decode::<UserStatus>("user_status", ordinal);
        if let Some(entry) = by_user_status.iter_mut().find(|(s, _)| *s == status) {
            entry.1 += count;
        }
    }

    Ok(ShelfStats {
        total,
        library: total - wishlist,
        wishlist,
        by_user_status,
    })
}

/// Summary statistics for the shelf.
#[derive(Debug)]
pub struct ShelfStats {
    pub total: i64,
    pub library: i64,
    pub wishlist: i64,
    /// Library (non-wishlist) series per reading status, in ordinal order.
    pub by_user_status: Vec<(UserStatus, i64)>,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_series(row: &rusqlite::Row<'_>) -> rusqlite::Result<Series> {
    let rating: i64 = row.get(12)?;
    Ok(Series {
        id: row.get(0)?,
        primary_language: decode::<Language>("primary_language", row.get(1)?),
        title_en: row.get(2)?,
        title_jp: row.get(3)?,
        description: row.get(4)?,
        book_type: decode::<BookType>("book_type", row.get(5)?),
        author_status: decode::<AuthorStatus>("author_status", row.get(6)?),
        total_volumes: row.get(7)?,
        is_on_wishlist: row.get(8)?,
        user_status: decode::<UserStatus>("user_status", row.get(9)?),
        volumes_owned: row.get(10)?,
        priority: decode::<Priority>("priority", row.get(11)?),
        rating: rating.clamp(0, i64::from(MAX_RATING)) as u8,
        notes: row.get(13)?,
    })
}

/// Decode a stored ordinal, substituting the category default when it is out of range.
fn decode<C: Category>(column: &str, ordinal: i64) -> C {
    C::try_from_ordinal(ordinal).unwrap_or_else(|| {
        log::warn!(
            "series.{column}: unknown {} code {ordinal}, using {:?}",
            C::NAME,
            C::default(),
        );
        C::default()
    })
}
