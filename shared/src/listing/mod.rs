//! Client-side product listing
//!
//! The displayed list is always a pure function of the fetched products and
//! the page-local criteria; it is never edited directly.

mod filter;
mod selection;
mod view;

pub use filter::{FilterCriteria, StockFilter, derive_view, matches_search};
pub use selection::SelectionSet;
pub use view::{ListConfig, ProductListView};
