//! Data model types for the series catalog.
//!
//! A [`Series`] is the persisted record. Every categorical field is one of the
//! small enums below; they are stored as stable integer ordinals (declaration
//! order) and carry the display labels used by front ends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Category Trait ──────────────────────────────────────────────────────────

/// A fixed, ordered set of labelled values stored as integer ordinals.
///
/// `all()` is the facet's label universe. Decoding an ordinal never fails:
/// codes outside the range map to the category's designated default.
pub trait Category: Copy + Eq + Ord + Default + std::fmt::Debug + 'static {
    /// Human-readable name of the category, used in error messages.
    const NAME: &'static str;

    /// Every variant, in ordinal order.
    fn all() -> &'static [Self];

    /// Display label for this variant.
    fn label(self) -> &'static str;

    /// Stable integer code written to the database.
    fn ordinal(self) -> i64;

    /// Decode an ordinal, or `None` if it is out of range.
    fn try_from_ordinal(ordinal: i64) -> Option<Self> {
        let index = usize::try_from(ordinal).ok()?;
        Self::all().get(index).copied()
    }

    /// Decode an ordinal, falling back to `Self::default()` when out of range.
    fn from_ordinal(ordinal: i64) -> Self {
        Self::try_from_ordinal(ordinal).unwrap_or_default()
    }

    /// Find the variant whose label matches (case-insensitive).
    fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }

    /// Labels of every variant, in ordinal order.
    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|c| c.label()).collect()
    }
}

/// Error returned when a string is not a known label of a category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {category}: '{input}' (expected one of: {expected})")]
pub struct CategoryParseError {
    pub category: &'static str,
    pub input: String,
    pub expected: String,
}

/// Parse a label into a category value, for `FromStr` implementations.
///
/// Accepts the display label ("Light Novel") or a dashed/underscored form
/// ("light-novel", "light_novel").
pub fn parse_label<C: Category>(s: &str) -> Result<C, CategoryParseError> {
    let normalized = s.replace(['-', '_'], " ");
    C::from_label(&normalized).ok_or_else(|| CategoryParseError {
        category: C::NAME,
        input: s.to_string(),
        expected: C::labels().join(", "),
    })
}

// ── Language ────────────────────────────────────────────────────────────────

/// Which title field is canonical for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl Category for Language {
    const NAME: &'static str = "language";

    fn all() -> &'static [Self] {
        &[Self::English, Self::Japanese]
    }

    fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Japanese => "Japanese",
        }
    }

    fn ordinal(self) -> i64 {
        self as i64
    }
}

// ── Book Type ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookType {
    #[default]
    Manga,
    LightNovel,
}

impl Category for BookType {
    const NAME: &'static str = "book type";

    fn all() -> &'static [Self] {
        &[Self::Manga, Self::LightNovel]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Manga => "Manga",
            Self::LightNovel => "Light Novel",
        }
    }

    fn ordinal(self) -> i64 {
        self as i64
    }
}

// ── Author Status ───────────────────────────────────────────────────────────

/// Production status of the series on the author's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorStatus {
    #[default]
    InProduction,
    Completed,
    OnHiatus,
}

impl Category for AuthorStatus {
    const NAME: &'static str = "author status";

    fn all() -> &'static [Self] {
        &[Self::InProduction, Self::Completed, Self::OnHiatus]
    }

    fn label(self) -> &'static str {
        match self {
            Self::InProduction => "Ongoing",
            Self::Completed => "Completed",
            Self::OnHiatus => "Hiatus",
        }
    }

    fn ordinal(self) -> i64 {
        self as i64
    }
}

// ── Shelf Placement ─────────────────────────────────────────────────────────

/// Whether a series is owned (library) or only wanted (wishlist).
///
/// Mirrors the record's wishlist flag: `Library` is ordinal 0 (`false`),
/// `Wishlist` is ordinal 1 (`true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfPlacement {
    #[default]
    Library,
    Wishlist,
}

impl ShelfPlacement {
    pub fn from_wishlist_flag(is_on_wishlist: bool) -> Self {
        if is_on_wishlist {
            Self::Wishlist
        } else {
            Self::Library
        }
    }

    pub fn is_wishlist(self) -> bool {
        self == Self::Wishlist
    }
}

impl Category for ShelfPlacement {
    const NAME: &'static str = "placement";

    fn all() -> &'static [Self] {
        &[Self::Library, Self::Wishlist]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Library => "Library",
            Self::Wishlist => "Wishlist",
        }
    }

    fn ordinal(self) -> i64 {
        self as i64
    }
}

// ── User Status ─────────────────────────────────────────────────────────────

/// The user's own reading status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Reading,
    Waiting,
    Completed,
    Planning,
    Unsorted,
    Uninterested,
}

impl UserStatus {
    /// Single-glyph icon shown next to the status in listings.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Reading => "♥",
            Self::Waiting => "◔",
            Self::Completed => "✔",
            Self::Planning => "♡",
            Self::Unsorted => "⚠",
            Self::Uninterested => "✗",
        }
    }
}

impl Category for UserStatus {
    const NAME: &'static str = "user status";

    fn all() -> &'static [Self] {
        &[
            Self::Reading,
            Self::Waiting,
            Self::Completed,
            Self::Planning,
            Self::Unsorted,
            Self::Uninterested,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Waiting => "Waiting",
            Self::Completed => "Completed",
            Self::Planning => "Planning",
            Self::Unsorted => "Unsorted",
            Self::Uninterested => "Uninterested",
        }
    }

    fn ordinal(self) -> i64 {
        self as i64
    }
}

// ── Priority ────────────────────────────────────────────────────────────────

/// How urgently the next volumes should be bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Top,
    Mid,
    Low,
    #[default]
    Nil,
}

impl Category for Priority {
    const NAME: &'static str = "priority";

    fn all() -> &'static [Self] {
        &[Self::Top, Self::Mid, Self::Low, Self::Nil]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Mid => "Mid",
            Self::Low => "Low",
            Self::Nil => "Nil",
        }
    }

    fn ordinal(self) -> i64 {
        self as i64
    }
}

// ── Sort Mode ───────────────────────────────────────────────────────────────

/// Ordering applied to browse queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Id,
    AuthorStatus,
    UserStatus,
    Priority,
    Rating,
}

impl Category for SortMode {
    const NAME: &'static str = "sort mode";

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::AuthorStatus,
            Self::UserStatus,
            Self::Priority,
            Self::Rating,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "Default",
            Self::AuthorStatus => "Author Status",
            Self::UserStatus => "User Status",
            Self::Priority => "Priority",
            Self::Rating => "Rating",
        }
    }

    fn ordinal(self) -> i64 {
        self as i64
    }
}

// ── Display / FromStr ───────────────────────────────────────────────────────

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for BookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for AuthorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for ShelfPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Language {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

impl std::str::FromStr for BookType {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

impl std::str::FromStr for AuthorStatus {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

impl std::str::FromStr for ShelfPlacement {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

impl std::str::FromStr for UserStatus {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

impl std::str::FromStr for Priority {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

impl std::str::FromStr for SortMode {
    type Err = CategoryParseError;

    /// Accepts the display label, plus "id" as an alias for the default order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("id") {
            return Ok(Self::Id);
        }
        parse_label(s)
    }
}

// ── Series ──────────────────────────────────────────────────────────────────

/// Lowest and highest rating a series can carry.
pub const MIN_RATING: u8 = 0;
pub const MAX_RATING: u8 = 10;

/// A tracked manga or light-novel series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Store-assigned identifier. [`Series::UNASSIGNED_ID`] until inserted.
    pub id: i64,
    pub primary_language: Language,
    pub title_en: String,
    pub title_jp: String,
    pub description: String,
    pub book_type: BookType,
    pub author_status: AuthorStatus,
    /// Free text; only meaningful once the author status is completed.
    pub total_volumes: String,
    pub is_on_wishlist: bool,
    pub user_status: UserStatus,
    /// Free text; may be blank for wishlist entries.
    pub volumes_owned: String,
    pub priority: Priority,
    pub rating: u8,
    pub notes: String,
}

impl Series {
    /// Identifier carried by a record that has not been inserted yet.
    pub const UNASSIGNED_ID: i64 = 0;

    /// The title to show for this series.
    ///
    /// Uses the primary language's title, falling back to the other one
    /// when that is blank.
    pub fn display_title(&self) -> &str {
        let (primary, other) = match self.primary_language {
            Language::English => (&self.title_en, &self.title_jp),
            Language::Japanese => (&self.title_jp, &self.title_en),
        };
        if primary.trim().is_empty() {
            other
        } else {
            primary
        }
    }

    pub fn placement(&self) -> ShelfPlacement {
        ShelfPlacement::from_wishlist_flag(self.is_on_wishlist)
    }
}
