//! Public catalog page; works without a session.

use shared::models::Catalog;

use super::LoadState;
use crate::api::CatalogApi;
use crate::http::HttpClient;

pub const CATALOG_LOAD_FAILED: &str = "Catalog could not be loaded";

#[derive(Debug, Clone)]
pub struct CatalogViewer {
    uuid: String,
    state: LoadState<Catalog>,
}

impl CatalogViewer {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            state: LoadState::Loading,
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Resolve the uuid. An unknown uuid ends in `Failed` with the server's message.
    pub async fn load<H: HttpClient>(&mut self, api: &CatalogApi<H>) -> &LoadState<Catalog> {
        self.state = LoadState::Loading;
        self.state = match api.get_catalog(&self.uuid).await {
            Ok(catalog) => LoadState::Ready(catalog),
            Err(e) => {
                tracing::debug!(uuid = %self.uuid, error = %e, "Catalog lookup failed");
                let message = e.user_message();
                LoadState::Failed(if message.trim().is_empty() {
                    CATALOG_LOAD_FAILED.to_string()
                } else {
                    message
                })
            }
        };
        &self.state
    }

    pub fn state(&self) -> &LoadState<Catalog> {
        &self.state
    }
}
