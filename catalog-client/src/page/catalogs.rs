//! "My catalogs" page: list, delete, bulk delete.

use shared::models::CatalogSummary;
use shared::{SelectionSet, ValidationError, catalog_link};

use super::LoadState;
use crate::api::CatalogApi;
use crate::http::HttpClient;
use crate::ClientResult;

#[derive(Debug, Clone)]
pub struct CatalogsPage {
    origin: String,
    catalogs: Vec<CatalogSummary>,
    selection: SelectionSet,
    status: LoadState<()>,
}

impl CatalogsPage {
    pub fn new(app_origin: impl Into<String>) -> Self {
        Self {
            origin: app_origin.into(),
            catalogs: Vec::new(),
            selection: SelectionSet::new(),
            status: LoadState::Loading,
        }
    }

    pub async fn load<H: HttpClient>(&mut self, api: &mut CatalogApi<H>) -> ClientResult<()> {
        self.status = LoadState::Loading;
        match api.my_catalogs().await {
            Ok(catalogs) => {
                self.catalogs = catalogs;
                self.status = LoadState::Ready(());
                Ok(())
            }
            Err(e) => {
                self.status = LoadState::Failed(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn delete<H: HttpClient>(
        &mut self,
        api: &mut CatalogApi<H>,
        uuid: &str,
    ) -> ClientResult<()> {
        api.delete_catalog(uuid).await?;
        self.catalogs.retain(|c| c.uuid != uuid);
        self.selection.set(uuid, false);
        Ok(())
    }

    pub fn select(&mut self, uuid: &str, checked: bool) {
        self.selection.set(uuid, checked);
    }

    /// Delete every checked catalog in one request.
    ///
    /// Nothing checked is a local warning; no request is sent. A failed or
    /// cancelled request leaves the rows and the selection untouched.
    pub async fn bulk_delete<H: HttpClient>(&mut self, api: &mut CatalogApi<H>) -> ClientResult<usize> {
        if self.selection.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }

        let uuids = self.selection.ids().to_vec();
        api.bulk_delete_catalogs(&uuids).await?;

        self.catalogs.retain(|c| !uuids.contains(&c.uuid));
        self.selection.clear();
        Ok(uuids.len())
    }

    pub fn catalogs(&self) -> &[CatalogSummary] {
        &self.catalogs
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn status(&self) -> &LoadState<()> {
        &self.status
    }

    /// Shareable link of one row
    pub fn link(&self, uuid: &str) -> String {
        catalog_link(&self.origin, uuid)
    }
}
