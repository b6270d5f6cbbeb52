//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CATALOG_API_URL | http://localhost:5000 | Backend base URL |
//! | CATALOG_APP_ORIGIN | http://localhost:3000 | Origin used in shareable catalog links |
//! | CATALOG_DATA_DIR | .catalog | Directory holding the persisted session |
//! | CATALOG_REQUEST_TIMEOUT | 30 | Request timeout in seconds |

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DATA_DIR: &str = ".catalog";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the catalog backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Public origin of the frontend, prefix of shareable catalog links
    pub app_origin: String,

    /// Directory of the persisted session file
    pub data_dir: PathBuf,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_origin(base_url.into()),
            app_origin: DEFAULT_APP_ORIGIN.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
        );
        if let Ok(origin) = std::env::var("CATALOG_APP_ORIGIN") {
            config = config.with_app_origin(origin);
        }
        if let Ok(dir) = std::env::var("CATALOG_DATA_DIR") {
            config = config.with_data_dir(dir);
        }
        config.timeout = std::env::var("CATALOG_REQUEST_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        config
    }

    /// Set the frontend origin used for catalog links
    pub fn with_app_origin(mut self, origin: impl Into<String>) -> Self {
        self.app_origin = trim_origin(origin.into());
        self
    }

    /// Set the session directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn trim_origin(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = ClientConfig::new("http://api.local/")
            .with_app_origin("https://shop.local/")
            .with_data_dir("/tmp/catalog")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://api.local");
        assert_eq!(config.app_origin, "https://shop.local");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/catalog"));
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.app_origin, DEFAULT_APP_ORIGIN);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_from_env() {
        // SAFETY: no other test in this crate touches these variables
        unsafe {
            std::env::set_var("CATALOG_API_URL", "http://env.local:5000/");
            std::env::set_var("CATALOG_REQUEST_TIMEOUT", "soon");
        }
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://env.local:5000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        unsafe {
            std::env::remove_var("CATALOG_API_URL");
            std::env::remove_var("CATALOG_REQUEST_TIMEOUT");
        }
    }
}
