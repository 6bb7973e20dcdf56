//! Series catalog data model: records, category enums, list projections,
//! and browse filter state.
//!
//! This crate has no database dependencies. Consumers pass these types to
//! `shelf-db` for persistence and to `shelf-lib` for browsing.

pub mod display;
pub mod filter;
pub mod types;

pub use display::DisplaySeries;
pub use filter::{FilterState, RatingRange, full_set, is_full_set};
pub use types::*;
