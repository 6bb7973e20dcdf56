//! Paginated browse session over the series store.
//!
//! A [`BrowseController`] owns the filter state, the page offset, the focused
//! series, and the observable list of [`DisplaySeries`] shown to the user.
//! Every operation takes `&self`, so one controller can be shared behind an
//! `Arc` by a single UI event source.
//!
//! Reloads are unguarded and the most recently issued one wins: results of
//! an older reload or page load that finish late are dropped. Loading the
//! next page is single-flight; a second call while one is running returns
//! [`LoadOutcome::Busy`] without touching anything. Pages are only appended
//! to a list produced by the latest reload, so while a reload is pending (or
//! after it failed) [`BrowseController::load_next`] does nothing.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use shelf_catalog::{
    AuthorStatus, BookType, DisplaySeries, FilterState, Priority, RatingRange, ShelfPlacement,
    SortMode, UserStatus,
};
use shelf_db::{PAGE_SIZE, compile_page};
use tokio::sync::watch;

use crate::error::{BrowseError, GatewayError};
use crate::gateway::SeriesGateway;
use crate::observable::Observable;

/// Title returned by [`BrowseController::find_display_title`] for an id that
/// is not in the loaded list.
pub const MISSING_TITLE: &str = "null";

/// Whether a next-page load is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    LoadingMore,
}

/// Result of [`BrowseController::load_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many rows were appended to the list
    Appended(usize),
    /// The next page was empty; list and offset are unchanged
    EndOfData,
    /// Another page load was already running; nothing was done
    Busy,
    /// The list does not reflect the latest reload yet, or one was issued
    /// while this page was loading; nothing was appended
    Superseded,
}

/// Result of a full reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The list was replaced with this many rows
    Loaded(usize),
    /// A newer reload was issued before this one finished; its rows were dropped
    Superseded,
}

#[derive(Debug, Default)]
struct Session {
    filters: FilterState,
    offset: u32,
    focused: Option<i64>,
    /// Bumped by every reload; page results carrying an older value are stale.
    epoch: u64,
    /// Epoch of the reload that produced the current list.
    landed_epoch: u64,
}

/// Clears the loading flag when dropped, whatever happened in between.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct BrowseController<G> {
    gateway: G,
    session: Mutex<Session>,
    series: Observable<Vec<DisplaySeries>>,
    loading_more: AtomicBool,
    shutdown: watch::Sender<bool>,
}

impl<G: SeriesGateway> BrowseController<G> {
    /// A controller with default filters and an empty list. Nothing is
    /// fetched until [`initialize`](Self::initialize) or [`reload`](Self::reload).
    pub fn new(gateway: G) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            gateway,
            session: Mutex::new(Session::default()),
            series: Observable::new(Vec::new()),
            loading_more: AtomicBool::new(false),
            shutdown,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ── Loading ─────────────────────────────────────────────────────────────

    /// Reset filters and focus to their defaults, then reload.
    ///
    /// The reset happens before the fetch. If the fetch fails, filters and
    /// focus are already back to their defaults while the list still shows
    /// the previous query; `load_next` refuses to extend it until a reload
    /// succeeds.
    pub async fn initialize(&self) -> Result<ReloadOutcome, BrowseError> {
        self.ensure_open()?;
        {
            let mut session = self.session();
            session.filters = FilterState::default();
            session.focused = None;
        }
        self.reload().await
    }

    /// Fetch the first page for the current filters and replace the list.
    pub async fn reload(&self) -> Result<ReloadOutcome, BrowseError> {
        self.ensure_open()?;
        let (query, epoch) = {
            let mut session = self.session();
            session.epoch += 1;
            (compile_page(&session.filters, 0), session.epoch)
        };
        log::debug!("reload (epoch {epoch}): {}", query.sql());

        let rows = self
            .until_closed(self.gateway.fetch_by_query(&query))
            .await?;

        let mut session = self.session();
        self.ensure_open()?;
        if session.epoch != epoch {
            log::debug!("reload (epoch {epoch}) superseded by epoch {}", session.epoch);
            return Ok(ReloadOutcome::Superseded);
        }
        session.offset = 0;
        session.landed_epoch = epoch;
        let page: Vec<DisplaySeries> = rows.iter().map(DisplaySeries::from).collect();
        let loaded = page.len();
        self.series.set(page);
        Ok(ReloadOutcome::Loaded(loaded))
    }

    /// Fetch the page after the current one and append it to the list.
    ///
    /// The offset only moves once a non-empty page has been appended, so an
    /// empty page or a failed fetch leaves both list and offset as they were.
    pub async fn load_next(&self) -> Result<LoadOutcome, BrowseError> {
        self.ensure_open()?;
        let Some(_busy) = BusyGuard::acquire(&self.loading_more) else {
            return Ok(LoadOutcome::Busy);
        };

        let (query, next_offset, epoch) = {
            let session = self.session();
            if session.epoch != session.landed_epoch {
                return Ok(LoadOutcome::Superseded);
            }
            let next_offset = session.offset + PAGE_SIZE;
            (
                compile_page(&session.filters, next_offset),
                next_offset,
                session.epoch,
            )
        };
        log::debug!("load_next (offset {next_offset}): {}", query.sql());

        let rows = self
            .until_closed(self.gateway.fetch_by_query(&query))
            .await?;

        let mut session = self.session();
        self.ensure_open()?;
        if session.epoch != epoch {
            return Ok(LoadOutcome::Superseded);
        }
        if rows.is_empty() {
            return Ok(LoadOutcome::EndOfData);
        }
        session.offset = next_offset;
        let appended = rows.len();
        self.series
            .update(|list| list.extend(rows.iter().map(DisplaySeries::from)));
        Ok(LoadOutcome::Appended(appended))
    }

    // ── Deletion & Focus ────────────────────────────────────────────────────

    /// Delete a series, clear the focus if it pointed at it, and reload.
    ///
    /// Returns whether the store actually held that series.
    pub async fn delete(&self, id: i64) -> Result<bool, BrowseError> {
        self.ensure_open()?;
        let removed = self.until_closed(self.gateway.delete_one(id)).await?;
        {
            let mut session = self.session();
            if session.focused == Some(id) {
                session.focused = None;
            }
        }
        log::debug!("delete {id}: removed={removed}");
        self.reload().await?;
        Ok(removed)
    }

    /// Delete the focused series, if any. Returns false when nothing was focused.
    pub async fn delete_focused(&self) -> Result<bool, BrowseError> {
        match self.focused() {
            Some(id) => self.delete(id).await,
            None => Ok(false),
        }
    }

    /// Select a series, typically ahead of a delete confirmation.
    pub fn focus(&self, id: i64) {
        self.session().focused = Some(id);
    }

    pub fn clear_focus(&self) {
        self.session().focused = None;
    }

    pub fn focused(&self) -> Option<i64> {
        self.session().focused
    }

    /// Title of a loaded series, or [`MISSING_TITLE`] when it isn't in the list.
    pub fn find_display_title(&self, id: i64) -> String {
        self.series
            .with(|list| list.iter().find(|s| s.id == id).map(|s| s.title.clone()))
            .unwrap_or_else(|| MISSING_TITLE.to_string())
    }

    // ── Filters ─────────────────────────────────────────────────────────────

    /// Apply `f` to the filter state and reload.
    pub async fn update_filters(
        &self,
        f: impl FnOnce(&mut FilterState),
    ) -> Result<ReloadOutcome, BrowseError> {
        self.ensure_open()?;
        f(&mut self.session().filters);
        self.reload().await
    }

    pub async fn set_search(&self, search: impl Into<String>) -> Result<ReloadOutcome, BrowseError> {
        let search = search.into();
        self.update_filters(|filters| filters.search = search).await
    }

    pub async fn set_sort(&self, sort: SortMode) -> Result<ReloadOutcome, BrowseError> {
        self.update_filters(|filters| filters.sort = sort).await
    }

    /// Bounds are clamped into the rating scale and put in order.
    pub async fn set_rating_range(&self, lo: u8, hi: u8) -> Result<ReloadOutcome, BrowseError> {
        self.update_filters(|filters| filters.rating = RatingRange::new(lo, hi))
            .await
    }

    pub async fn set_placement_filter(
        &self,
        selected: BTreeSet<ShelfPlacement>,
    ) -> Result<ReloadOutcome, BrowseError> {
        self.update_filters(|filters| filters.placements = selected)
            .await
    }

    pub async fn set_book_type_filter(
        &self,
        selected: BTreeSet<BookType>,
    ) -> Result<ReloadOutcome, BrowseError> {
        self.update_filters(|filters| filters.book_types = selected)
            .await
    }

    pub async fn set_author_status_filter(
        &self,
        selected: BTreeSet<AuthorStatus>,
    ) -> Result<ReloadOutcome, BrowseError> {
        self.update_filters(|filters| filters.author_statuses = selected)
            .await
    }

    pub async fn set_user_status_filter(
        &self,
        selected: BTreeSet<UserStatus>,
    ) -> Result<ReloadOutcome, BrowseError> {
        self.update_filters(|filters| filters.user_statuses = selected)
            .await
    }

    pub async fn set_priority_filter(
        &self,
        selected: BTreeSet<Priority>,
    ) -> Result<ReloadOutcome, BrowseError> {
        self.update_filters(|filters| filters.priorities = selected)
            .await
    }

    // ── Observation ─────────────────────────────────────────────────────────

    pub fn filters(&self) -> FilterState {
        self.session().filters.clone()
    }

    pub fn offset(&self) -> u32 {
        self.session().offset
    }

    pub fn state(&self) -> LoadState {
        if self.loading_more.load(Ordering::Acquire) {
            LoadState::LoadingMore
        } else {
            LoadState::Idle
        }
    }

    /// Snapshot of the displayed list.
    pub fn series(&self) -> Vec<DisplaySeries> {
        self.series.get()
    }

    /// Receiver notified on every replacement or extension of the list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<DisplaySeries>> {
        self.series.subscribe()
    }

    // ── Teardown ────────────────────────────────────────────────────────────

    /// End the session. Calls still in flight resolve to
    /// [`BrowseError::SessionClosed`] and write nothing.
    pub fn close(&self) {
        if !self.shutdown.send_replace(true) {
            log::debug!("Browse session closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    fn ensure_open(&self) -> Result<(), BrowseError> {
        if self.is_closed() {
            Err(BrowseError::SessionClosed)
        } else {
            Ok(())
        }
    }

    /// Drive a gateway call, abandoning it if the session closes first.
    async fn until_closed<T>(
        &self,
        call: impl Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, BrowseError> {
        let mut closed = self.shutdown.subscribe();
        tokio::select! {
            result = call => result.map_err(BrowseError::from),
            _ = closed.wait_for(|closed| *closed) => Err(BrowseError::SessionClosed),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
