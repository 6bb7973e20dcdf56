//! Add/edit form state for a single series.
//!
//! A [`SeriesDraft`] holds what the user has typed so far. It starts from the
//! "new series" defaults, or from an existing record, and turns into a
//! [`Series`] only after [`SeriesDraft::validate`] accepts it.

use serde::{Deserialize, Serialize};
use shelf_catalog::{
    AuthorStatus, BookType, Language, MAX_RATING, Priority, Series, UserStatus,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("A series needs an English or Japanese title")]
    MissingTitle,
    #[error("Volumes owned is required for library series")]
    MissingVolumesOwned,
    #[error("Rating {0} is outside 0-{MAX_RATING}")]
    RatingOutOfRange(u8),
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDraft {
    pub is_on_wishlist: bool,
    pub title_en: String,
    pub title_jp: String,
    pub description: String,
    pub book_type: BookType,
    pub author_status: AuthorStatus,
    pub total_volumes: String,
    pub user_status: UserStatus,
    pub volumes_owned: String,
    pub priority: Priority,
    pub rating: u8,
    pub notes: String,
}

impl Default for SeriesDraft {
    fn default() -> Self {
        Self {
            is_on_wishlist: false,
            title_en: String::new(),
            title_jp: String::new(),
            description: String::new(),
            book_type: BookType::default(),
            author_status: AuthorStatus::default(),
            total_volumes: String::new(),
            user_status: UserStatus::default(),
            volumes_owned: "1".to_string(),
            priority: Priority::default(),
            rating: 0,
            notes: String::new(),
        }
    }
}

impl SeriesDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing record into the form.
    pub fn from_series(series: &Series) -> Self {
        Self {
            is_on_wishlist: series.is_on_wishlist,
            title_en: series.title_en.clone(),
            title_jp: series.title_jp.clone(),
            description: series.description.clone(),
            book_type: series.book_type,
            author_status: series.author_status,
            total_volumes: series.total_volumes.clone(),
            user_status: series.user_status,
            volumes_owned: series.volumes_owned.clone(),
            priority: series.priority,
            rating: series.rating,
            notes: series.notes.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title_en.trim().is_empty() && self.title_jp.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if !self.is_on_wishlist && self.volumes_owned.trim().is_empty() {
            return Err(DraftError::MissingVolumesOwned);
        }
        if self.rating > MAX_RATING {
            return Err(DraftError::RatingOutOfRange(self.rating));
        }
        check_count("volumes owned", &self.volumes_owned)?;
        check_count("total volumes", &self.total_volumes)?;
        Ok(())
    }

    /// A validated record ready for insertion, with no identifier yet.
    ///
    /// English is the primary language whenever an English title was given.
    pub fn into_new_series(self) -> Result<Series, DraftError> {
        let primary_language = if self.title_en.trim().is_empty() {
            Language::Japanese
        } else {
            Language::English
        };
        self.into_series(Series::UNASSIGNED_ID, primary_language)
    }

    /// A validated full replacement for the record `id`.
    pub fn into_updated_series(
        self,
        id: i64,
        primary_language: Language,
    ) -> Result<Series, DraftError> {
        self.into_series(id, primary_language)
    }

    fn into_series(self, id: i64, primary_language: Language) -> Result<Series, DraftError> {
        self.validate()?;
        Ok(Series {
            id,
            primary_language,
            title_en: self.title_en.trim().to_string(),
            title_jp: self.title_jp.trim().to_string(),
            description: self.description,
            book_type: self.book_type,
            author_status: self.author_status,
            total_volumes: self.total_volumes.trim().to_string(),
            is_on_wishlist: self.is_on_wishlist,
            user_status: self.user_status,
            volumes_owned: self.volumes_owned.trim().to_string(),
            priority: self.priority,
            rating: self.rating,
            notes: self.notes,
        })
    }
}

/// Blank is allowed; anything else must parse as a non-negative integer.
fn check_count(field: &'static str, value: &str) -> Result<(), DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
        Ok(())
    } else {
        Err(DraftError::NotANumber {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
