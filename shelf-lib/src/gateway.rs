//! Asynchronous persistence gateway over the series store.
//!
//! [`SeriesGateway`] is the seam between the browse controller and storage.
//! [`SqliteGateway`] implements it on top of `shelf-db`, running each call on
//! tokio's blocking pool so the caller's executor never waits on SQLite.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use shelf_catalog::{FilterState, Series};
use shelf_db::{OperationError, SchemaError, SeriesQuery, ShelfStats};

use crate::error::GatewayError;

/// Storage operations the browse and edit flows depend on.
#[allow(async_fn_in_trait)]
pub trait SeriesGateway {
    /// Every record, in identifier order.
    async fn fetch_all(&self) -> Result<Vec<Series>, GatewayError>;

    /// One record by identifier. Fails with `NotFound` when absent.
    async fn fetch_one(&self, id: i64) -> Result<Series, GatewayError>;

    /// Run a compiled page query.
    async fn fetch_by_query(&self, query: &SeriesQuery) -> Result<Vec<Series>, GatewayError>;

    /// Store a new record and return its identifier.
    async fn insert(&self, series: &Series) -> Result<i64, GatewayError>;

    /// Replace the record with the same identifier.
    async fn update(&self, series: &Series) -> Result<(), GatewayError>;

    /// Remove one record. Returns whether anything was removed.
    async fn delete_one(&self, id: i64) -> Result<bool, GatewayError>;

    /// Remove every record. Returns how many were removed.
    async fn delete_all(&self) -> Result<usize, GatewayError>;

    /// Number of records matching a filter state, ignoring paging.
    async fn count(&self, filters: &FilterState) -> Result<i64, GatewayError>;

    /// Totals per placement and, for the library, per reading status.
    async fn stats(&self) -> Result<ShelfStats, GatewayError>;
}

/// [`SeriesGateway`] backed by a single shared SQLite connection.
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteGateway {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        let conn = shelf_db::open_database(path)?;
        Ok(Self::from_connection(conn))
    }

    /// A fresh in-memory database with the full schema.
    pub fn open_memory() -> Result<Self, SchemaError> {
        let conn = shelf_db::open_memory()?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on the blocking pool.
    async fn run<T, F>(&self, f: F) -> Result<T, GatewayError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, OperationError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| GatewayError::Poisoned)?;
            f(&guard).map_err(GatewayError::from)
        })
        .await?
    }
}

impl SeriesGateway for SqliteGateway {
    async fn fetch_all(&self) -> Result<Vec<Series>, GatewayError> {
        self.run(shelf_db::fetch_all).await
    }

    async fn fetch_one(&self, id: i64) -> Result<Series, GatewayError> {
        self.run(move |conn| shelf_db::fetch_series(conn, id)).await
    }

    async fn fetch_by_query(&self, query: &SeriesQuery) -> Result<Vec<Series>, GatewayError> {
        let query = query.clone();
        self.run(move |conn| shelf_db::fetch_by_query(conn, &query))
            .await
    }

    async fn insert(&self, series: &Series) -> Result<i64, GatewayError> {
        let series = series.clone();
        let id = self
            .run(move |conn| shelf_db::insert_series(conn, &series))
            .await?;
        log::debug!("Inserted series {id}");
        Ok(id)
    }

    async fn update(&self, series: &Series) -> Result<(), GatewayError> {
        let series = series.clone();
        self.run(move |conn| shelf_db::update_series(conn, &series))
            .await
    }

    async fn delete_one(&self, id: i64) -> Result<bool, GatewayError> {
        self.run(move |conn| shelf_db::delete_series(conn, id)).await
    }

    async fn delete_all(&self) -> Result<usize, GatewayError> {
        let removed = self.run(shelf_db::delete_all_series).await?;
        log::debug!("Deleted all {removed} series");
        Ok(removed)
    }

    async fn count(&self, filters: &FilterState) -> Result<i64, GatewayError> {
        let filters = filters.clone();
        self.run(move |conn| shelf_db::count_matching(conn, &filters))
            .await
    }

    async fn stats(&self) -> Result<ShelfStats, GatewayError> {
        self.run(shelf_db::shelf_stats).await
    }
}
