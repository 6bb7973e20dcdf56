//! Render-ready projection of a series for list views.

use serde::Serialize;

use crate::types::{BookType, Series, UserStatus};

/// The reduced view of a [`Series`] shown in browse lists.
///
/// Derived on every fetch and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySeries {
    pub id: i64,
    pub title: String,
    pub book_type: BookType,
    pub is_on_wishlist: bool,
    pub user_status: UserStatus,
    pub volumes_owned: String,
}

impl DisplaySeries {
    /// Icon of the user status, for compact rendering.
    pub fn icon(&self) -> &'static str {
        self.user_status.icon()
    }
}

impl From<&Series> for DisplaySeries {
    fn from(series: &Series) -> Self {
        Self {
            id: series.id,
            title: series.display_title().to_string(),
            book_type: series.book_type,
            is_on_wishlist: series.is_on_wishlist,
            user_status: series.user_status,
            volumes_owned: series.volumes_owned.clone(),
        }
    }
}

impl From<Series> for DisplaySeries {
    fn from(series: Series) -> Self {
        Self::from(&series)
    }
}
