//! Catalog Client - HTTP client for the catalog backend
//!
//! Provides the session context, typed REST calls, page-level controllers
//! and the catalog creation workflow used by the frontends.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod page;
pub mod presence;
pub mod session;
pub mod workflow;

pub use api::{CatalogApi, ImageUpload, LoginOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use http::{FormBody, FormValue, HttpClient, NetworkHttpClient};
pub use page::{CatalogViewer, CatalogsPage, Dashboard, LoadState, ProductsPage};
pub use session::{Landing, SessionContext, SessionError, UserSession};
pub use workflow::{CatalogCreation, CreationState, WorkflowError};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, UserInfo};
