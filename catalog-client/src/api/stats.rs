//! Dashboard statistics

use shared::models::ProductStats;

use super::CatalogApi;
use crate::ClientResult;
use crate::http::HttpClient;

pub const PRODUCT_STATS_PATH: &str = "/api/users/stats/products";

impl<H: HttpClient> CatalogApi<H> {
    pub async fn product_stats(&mut self) -> ClientResult<ProductStats> {
        self.ensure_auth()?;
        let result = self.http.get(PRODUCT_STATS_PATH).await;
        self.check_auth(result)
    }
}
