//! Application layer for the series catalog: the async persistence gateway,
//! the paginated browse controller, the add/edit draft, and shared settings.
//!
//! Front ends build a [`SqliteGateway`] from the resolved database path, wrap
//! it in a [`BrowseController`], and drive it from their event loop.

pub mod browse;
pub mod editor;
pub mod error;
pub mod gateway;
pub mod observable;
pub mod settings;

pub use browse::{BrowseController, LoadOutcome, LoadState, MISSING_TITLE, ReloadOutcome};
pub use editor::{DraftError, SeriesDraft};
pub use error::{BrowseError, GatewayError};
pub use gateway::{SeriesGateway, SqliteGateway};
pub use observable::Observable;
