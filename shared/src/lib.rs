//! Shared types for the catalog frontend
//!
//! Wire models of the catalog backend, the client-side listing engine and
//! the small pure helpers used by both the client library and the CLI.

pub mod client;
pub mod error;
pub mod listing;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::ValidationError;
pub use listing::{FilterCriteria, ListConfig, ProductListView, SelectionSet, StockFilter};
pub use models::{Catalog, CatalogSummary, Product, ProductStats, catalog_link};
