//! Typed access to the catalog backend
//!
//! [`CatalogApi`] pairs an [`HttpClient`] with the [`SessionContext`]. Every
//! authenticated call checks the session first, and a 401 from the backend
//! logs the user out (session storage cleared, token dropped).

mod auth;
mod catalogs;
mod products;
mod stats;

pub use auth::LoginOutcome;
pub use products::ImageUpload;

use crate::http::{HttpClient, NetworkHttpClient};
use crate::session::SessionContext;
use crate::{ClientConfig, ClientResult};

/// Backend client bound to a session
#[derive(Debug)]
pub struct CatalogApi<H: HttpClient = NetworkHttpClient> {
    config: ClientConfig,
    http: H,
    session: SessionContext,
}

impl CatalogApi<NetworkHttpClient> {
    /// Build the network client and restore the persisted session.
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(&config)?;
        let session = SessionContext::open(&config.data_dir)?;
        Ok(Self::with_http(config, http, session))
    }
}

impl<H: HttpClient> CatalogApi<H> {
    pub fn with_http(config: ClientConfig, mut http: H, session: SessionContext) -> Self {
        http.set_token(session.token().map(str::to_string));
        Self {
            config,
            http,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Shareable link of a catalog
    pub fn catalog_link(&self, uuid: &str) -> String {
        shared::catalog_link(&self.config.app_origin, uuid)
    }

    fn ensure_auth(&self) -> ClientResult<()> {
        self.session.require().map(|_| ())
    }

    /// Pass a result through, logging out first when it is a 401.
    fn check_auth<T>(&mut self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result
            && e.is_auth_failure()
        {
            self.force_logout();
        }
        result
    }

    fn force_logout(&mut self) {
        tracing::warn!("Session rejected by backend, logging out");
        self.http.set_token(None);
        if let Err(e) = self.session.clear() {
            tracing::error!(error = %e, "Failed to clear session storage");
        }
    }
}
