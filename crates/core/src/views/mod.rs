//! Per-view UI state.
//!
//! Each view fetches what it needs through a [`ProductRepository`] when it is
//! rendered and keeps the result locally. Fetch failures are logged and
//! collapse to an empty result; no view retries or surfaces the error.
//!
//! [`ProductRepository`]: crate::ProductRepository

pub mod auth;
pub mod catalog;
pub mod comparison;
pub mod search;
pub mod theme;

pub use auth::AuthSession;
pub use catalog::{CatalogView, ScrollDirection, Shelf, ShelfScroll};
pub use comparison::{ComparisonView, Slot};
pub use search::{SearchLayout, SearchPhase, SearchWidget};
pub use theme::Theme;
