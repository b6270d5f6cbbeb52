//! Dashboard statistics page.

use shared::models::ProductStats;

use super::LoadState;
use crate::api::CatalogApi;
use crate::http::HttpClient;

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    stats: LoadState<ProductStats>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<H: HttpClient>(&mut self, api: &mut CatalogApi<H>) -> &LoadState<ProductStats> {
        self.stats = match api.product_stats().await {
            Ok(stats) => LoadState::Ready(stats),
            Err(e) => LoadState::Failed(e.user_message()),
        };
        &self.stats
    }

    pub fn stats(&self) -> &LoadState<ProductStats> {
        &self.stats
    }
}
