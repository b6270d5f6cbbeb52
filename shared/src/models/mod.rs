//! Data models
//!
//! Wire types of the catalog backend. The backend owns these records; the
//! frontend only holds read-through copies.

pub mod catalog;
pub mod product;
pub mod stats;

// Re-exports
pub use catalog::*;
pub use product::*;
pub use stats::*;
