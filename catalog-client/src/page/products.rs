//! Product management page: fetch, filter, delete, build catalogs.

use shared::models::{Product, ProductPayload};
use shared::{ListConfig, ProductListView};

use super::LoadState;
use crate::ClientResult;
use crate::api::{CatalogApi, ImageUpload};
use crate::http::HttpClient;
use crate::workflow::{CatalogCreation, WorkflowError};

#[derive(Debug, Clone)]
pub struct ProductsPage {
    view: ProductListView,
    status: LoadState<()>,
    creation: CatalogCreation,
}

impl ProductsPage {
    pub fn new(config: ListConfig, app_origin: impl Into<String>) -> Self {
        Self {
            view: ProductListView::new(config),
            status: LoadState::Loading,
            creation: CatalogCreation::new(app_origin),
        }
    }

    /// Fetch the product list into the view.
    pub async fn load<H: HttpClient>(&mut self, api: &mut CatalogApi<H>) -> ClientResult<()> {
        self.status = LoadState::Loading;
        match api.list_products().await {
            Ok(products) => {
                self.view.set_products(products);
                self.status = LoadState::Ready(());
                Ok(())
            }
            Err(e) => {
                self.status = LoadState::Failed(e.user_message());
                Err(e)
            }
        }
    }

    /// Re-fetch the list; filters and selection survive.
    pub async fn refresh<H: HttpClient>(&mut self, api: &mut CatalogApi<H>) -> ClientResult<()> {
        self.load(api).await
    }

    /// Create (`id == None`) or update a product, then show it in the list.
    pub async fn save_product<H: HttpClient>(
        &mut self,
        api: &mut CatalogApi<H>,
        id: Option<&str>,
        payload: &ProductPayload,
        image: Option<ImageUpload>,
    ) -> ClientResult<Product> {
        let product = match id {
            Some(id) => api.update_product(id, payload, image).await?,
            None => api.create_product(payload, image).await?,
        };
        self.view.upsert_product(product.clone());
        Ok(product)
    }

    /// Delete on the backend, then drop the row locally.
    pub async fn delete<H: HttpClient>(
        &mut self,
        api: &mut CatalogApi<H>,
        id: &str,
    ) -> ClientResult<()> {
        api.delete_product(id).await?;
        self.view.remove_product(id);
        Ok(())
    }

    /// Create a catalog from the current selection.
    pub async fn create_catalog<H: HttpClient>(
        &mut self,
        api: &mut CatalogApi<H>,
    ) -> Result<String, WorkflowError> {
        self.creation.submit(api, self.view.selection_mut()).await
    }

    pub fn status(&self) -> &LoadState<()> {
        &self.status
    }

    pub fn view(&self) -> &ProductListView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ProductListView {
        &mut self.view
    }

    pub fn creation(&self) -> &CatalogCreation {
        &self.creation
    }
}
