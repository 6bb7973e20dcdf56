//! Write operations for series records.

use rusqlite::{Connection, ErrorCode, params};
use shelf_catalog::{Category, Series};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Series not found: id {id}")]
    NotFound { id: i64 },
    #[error("Series already exists: id {id}")]
    Conflict { id: i64 },
}

/// Insert a series. Returns the identifier it was stored under.
///
/// A record carrying [`Series::UNASSIGNED_ID`] gets a fresh identifier from
/// the store. Any other identifier is kept as-is and must not exist yet.
pub fn insert_series(conn: &Connection, series: &Series) -> Result<i64, OperationError> {
    let explicit_id = (series.id != Series::UNASSIGNED_ID).then_some(series.id);

    let result = conn.execute(
        "INSERT INTO series (id, primary_language, title_en, title_jp, description,
             book_type, author_status, total_volumes, is_on_wishlist, user_status,
             volumes_owned, priority, rating, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            explicit_id,
            series.primary_language.ordinal(),
            series.title_en,
            series.title_jp,
            series.description,
            series.book_type.ordinal(),
            series.author_status.ordinal(),
            series.total_volumes,
            series.is_on_wishlist,
            series.user_status.ordinal(),
            series.volumes_owned,
            series.priority.ordinal(),
            series.rating,
            series.notes,
        ],
    );

    match result {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            Err(OperationError::Conflict { id: series.id })
        }
        Err(e) => Err(e.into()),
    }
}

/// Replace every field of an existing series, matched by identifier.
pub fn update_series(conn: &Connection, series: &Series) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE series SET
             primary_language = ?2,
             title_en = ?3,
             title_jp = ?4,
             description = ?5,
             book_type = ?6,
             author_status = ?7,
             total_volumes = ?8,
             is_on_wishlist = ?9,
             user_status = ?10,
             volumes_owned = ?11,
             priority = ?12,
             rating = ?13,
             notes = ?14
         WHERE id = ?1",
        params![
            series.id,
            series.primary_language.ordinal(),
            series.title_en,
            series.title_jp,
            series.description,
            series.book_type.ordinal(),
            series.author_status.ordinal(),
            series.total_volumes,
            series.is_on_wishlist,
            series.user_status.ordinal(),
            series.volumes_owned,
            series.priority.ordinal(),
            series.rating,
            series.notes,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound { id: series.id });
    }
    Ok(())
}

/// Delete one series. Returns whether a row was removed.
pub fn delete_series(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM series WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

/// Delete every series. Returns the number of rows removed.
pub fn delete_all_series(conn: &Connection) -> Result<usize, OperationError> {
    let changed = conn.execute("DELETE FROM series", [])?;
    Ok(changed)
}
