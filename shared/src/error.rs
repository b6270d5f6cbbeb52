//! Error types for the shared crate
//!
//! Local validation failures. These short-circuit before any request is sent.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required form field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Stock cannot be negative: {0}")]
    NegativeStock(i64),

    /// Catalog creation or bulk delete with nothing checked
    #[error("Select at least one item")]
    EmptySelection,

    /// The list was configured without selection support
    #[error("Selection is disabled for this list")]
    SelectionDisabled,
}
