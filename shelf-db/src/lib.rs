//! SQLite persistence layer for the series catalog.
//!
//! Provides schema creation, CRUD operations, and the browse query compiler
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod query;
pub mod schema;

pub use operations::{
    OperationError, delete_all_series, delete_series, insert_series, update_series,
};
pub use queries::{
    ShelfStats, count_matching, fetch_all, fetch_by_query, fetch_series, shelf_stats,
};
pub use query::{PAGE_SIZE, SeriesQuery, compile_count, compile_page};
pub use schema::{SchemaError, open_database, open_memory};
