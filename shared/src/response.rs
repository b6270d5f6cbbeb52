//! API Response types
//!
//! The catalog backend answers with the bare resource on success and with a
//! small JSON error object otherwise:
//! ```json
//! { "error": "Catalog not found" }
//! ```

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse a response body; `None` when it carries no usable message.
    pub fn parse(text: &str) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(text).ok()?;
        body.error
            .or(body.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
