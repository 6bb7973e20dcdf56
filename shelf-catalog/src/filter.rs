//! Browse configuration: sort mode, facet filters, rating range, and search.
//!
//! Each facet is a set of selected values. A set equal to the category's full
//! label universe means "no restriction"; an empty set matches nothing.

use std::collections::BTreeSet;

use crate::types::{
    AuthorStatus, BookType, Category, MAX_RATING, MIN_RATING, Priority, ShelfPlacement, SortMode,
    UserStatus,
};

/// Every value of a category, selected.
pub fn full_set<C: Category>() -> BTreeSet<C> {
    C::all().iter().copied().collect()
}

/// Whether `set` selects every value of its category.
pub fn is_full_set<C: Category>(set: &BTreeSet<C>) -> bool {
    C::all().iter().all(|c| set.contains(c))
}

// ── Rating Range ────────────────────────────────────────────────────────────

/// Inclusive rating bounds, always within `MIN_RATING..=MAX_RATING` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingRange {
    lo: u8,
    hi: u8,
}

impl RatingRange {
    /// Build a range, clamping both bounds and swapping them if reversed.
    pub fn new(lo: u8, hi: u8) -> Self {
        let lo = lo.clamp(MIN_RATING, MAX_RATING);
        let hi = hi.clamp(MIN_RATING, MAX_RATING);
        if lo <= hi {
            Self { lo, hi }
        } else {
            Self { lo: hi, hi: lo }
        }
    }

    pub fn lo(&self) -> u8 {
        self.lo
    }

    pub fn hi(&self) -> u8 {
        self.hi
    }

    pub fn is_full(&self) -> bool {
        self.lo == MIN_RATING && self.hi == MAX_RATING
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self {
            lo: MIN_RATING,
            hi: MAX_RATING,
        }
    }
}

// ── Filter State ────────────────────────────────────────────────────────────

/// The mutable query configuration of a browse session.
///
/// Fields are replaced whole; there is no validation beyond what
/// [`RatingRange`] enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub sort: SortMode,
    pub placements: BTreeSet<ShelfPlacement>,
    pub book_types: BTreeSet<BookType>,
    pub author_statuses: BTreeSet<AuthorStatus>,
    pub user_statuses: BTreeSet<UserStatus>,
    pub priorities: BTreeSet<Priority>,
    pub rating: RatingRange,
    /// Case-insensitive substring matched against both titles. Blank means no search.
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sort: SortMode::default(),
            placements: full_set(),
            book_types: full_set(),
            author_statuses: full_set(),
            user_statuses: full_set(),
            priorities: full_set(),
            rating: RatingRange::default(),
            search: String::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing narrows the result set (only the sort may differ).
    pub fn is_unfiltered(&self) -> bool {
        is_full_set(&self.placements)
            && is_full_set(&self.book_types)
            && is_full_set(&self.author_statuses)
            && is_full_set(&self.user_statuses)
            && is_full_set(&self.priorities)
            && self.rating.is_full()
            && self.search.trim().is_empty()
    }

    /// Builder-style sort replacement.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Builder-style search replacement.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}
