//! Catalog endpoints

use shared::ValidationError;
use shared::models::{
    BulkDeleteCatalogsRequest, Catalog, CatalogCreated, CatalogList, CatalogSummary,
    CreateCatalogRequest,
};

use super::CatalogApi;
use crate::ClientResult;
use crate::http::HttpClient;

pub const CATALOGS_PATH: &str = "/api/catalogs";
pub const MY_CATALOGS_PATH: &str = "/api/catalogs/my-catalogs";
pub const BULK_DELETE_PATH: &str = "/api/catalogs/bulk-delete";

fn catalog_path(uuid: &str) -> String {
    format!("{}/{}", CATALOGS_PATH, uuid)
}

impl<H: HttpClient> CatalogApi<H> {
    /// Create a catalog from product ids, in the given order.
    ///
    /// An empty list is rejected locally, without a request.
    pub async fn create_catalog(&mut self, product_ids: &[String]) -> ClientResult<CatalogCreated> {
        if product_ids.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        self.ensure_auth()?;

        let req = CreateCatalogRequest {
            product_ids: product_ids.to_vec(),
        };
        let result = self.http.post(CATALOGS_PATH, &req).await;
        let created: CatalogCreated = self.check_auth(result)?;
        tracing::info!(uuid = %created.uuid, products = product_ids.len(), "Catalog created");
        Ok(created)
    }

    /// Public catalog by uuid; no session needed.
    pub async fn get_catalog(&self, uuid: &str) -> ClientResult<Catalog> {
        self.http.get(&catalog_path(uuid)).await
    }

    /// Catalogs owned by the logged-in user
    pub async fn my_catalogs(&mut self) -> ClientResult<Vec<CatalogSummary>> {
        self.ensure_auth()?;
        let result = self.http.get::<CatalogList>(MY_CATALOGS_PATH).await;
        Ok(self.check_auth(result)?.into_vec())
    }

    pub async fn delete_catalog(&mut self, uuid: &str) -> ClientResult<()> {
        self.ensure_auth()?;
        let result = self.http.delete::<serde_json::Value>(&catalog_path(uuid)).await;
        self.check_auth(result)?;
        tracing::info!(uuid = %uuid, "Catalog deleted");
        Ok(())
    }

    /// Delete several catalogs at once. An empty list is rejected locally.
    pub async fn bulk_delete_catalogs(&mut self, uuids: &[String]) -> ClientResult<()> {
        if uuids.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }
        self.ensure_auth()?;

        let req = BulkDeleteCatalogsRequest {
            uuids: uuids.to_vec(),
        };
        let result = self
            .http
            .delete_with_body::<serde_json::Value, _>(BULK_DELETE_PATH, &req)
            .await;
        self.check_auth(result)?;
        tracing::info!(count = uuids.len(), "Catalogs deleted");
        Ok(())
    }
}
