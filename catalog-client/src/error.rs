//! Client error types

use shared::ValidationError;
use thiserror::Error;

use crate::session::SessionError;

/// Failure classes surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or transport failure
    Transport,
    /// Missing or expired session
    Authentication,
    /// Rejected input, local or server-side
    Validation,
    /// Unknown product or catalog
    NotFound,
    /// Any other backend failure
    Server,
    /// Local I/O or configuration problem
    Local,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or session expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server-side validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local validation, checked before any request is sent
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session storage error
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Http(_) => ErrorKind::Transport,
            ClientError::Unauthorized(_) => ErrorKind::Authentication,
            ClientError::Validation(_) | ClientError::Invalid(_) => ErrorKind::Validation,
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::InvalidResponse(_)
            | ClientError::Forbidden(_)
            | ClientError::Internal(_)
            | ClientError::Serialization(_) => ErrorKind::Server,
            ClientError::Config(_) | ClientError::Session(_) | ClientError::Io(_) => {
                ErrorKind::Local
            }
        }
    }

    /// Whether the session must be dropped and the user sent to login
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }

    /// Message for inline display: the backend's own text when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthorized(msg)
            | ClientError::Forbidden(msg)
            | ClientError::NotFound(msg)
            | ClientError::Validation(msg)
            | ClientError::Internal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_message() {
        let err = ClientError::NotFound("Catalog not found".into());
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.user_message(), "Catalog not found");

        let err = ClientError::from(ValidationError::EmptySelection);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.user_message(), "Select at least one item");

        assert!(ClientError::Unauthorized("Token expired".into()).is_auth_failure());
        assert!(!ClientError::Internal("boom".into()).is_auth_failure());
    }
}
