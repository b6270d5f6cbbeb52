//! Product CRUD

use std::path::Path;

use shared::models::{Product, ProductPayload};

use super::CatalogApi;
use crate::http::{FormBody, HttpClient};
use crate::{ClientError, ClientResult};

pub const PRODUCTS_PATH: &str = "/api/products";

/// Image file attached to a product form
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Read an image from disk; the content type is guessed from the extension.
    pub async fn from_path(path: &Path) -> ClientResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::Config(format!("Invalid image path: {}", path.display())))?
            .to_string();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }
}

/// Multipart body of a create/update request
pub(crate) fn product_form(payload: &ProductPayload, image: Option<ImageUpload>) -> FormBody {
    let mut form = FormBody::new()
        .text("name", payload.name.clone())
        .text("price", payload.price.normalize().to_string())
        .text("stock", payload.stock.to_string());
    if let Some(barcode) = &payload.barcode {
        form = form.text("barcode", barcode.clone());
    }
    if let Some(image) = image {
        form = form.file("image", image.file_name, image.mime, image.bytes);
    }
    form
}

fn product_path(id: &str) -> String {
    format!("{}/{}", PRODUCTS_PATH, id)
}

impl<H: HttpClient> CatalogApi<H> {
    /// The user's products in backend (insertion) order
    pub async fn list_products(&mut self) -> ClientResult<Vec<Product>> {
        self.ensure_auth()?;
        let result = self.http.get(PRODUCTS_PATH).await;
        let products: Vec<Product> = self.check_auth(result)?;
        tracing::debug!(count = products.len(), "Products fetched");
        Ok(products)
    }

    pub async fn get_product(&mut self, id: &str) -> ClientResult<Product> {
        self.ensure_auth()?;
        let result = self.http.get(&product_path(id)).await;
        self.check_auth(result)
    }

    pub async fn create_product(
        &mut self,
        payload: &ProductPayload,
        image: Option<ImageUpload>,
    ) -> ClientResult<Product> {
        self.ensure_auth()?;
        let result = self
            .http
            .post_form(PRODUCTS_PATH, product_form(payload, image))
            .await;
        let product: Product = self.check_auth(result)?;
        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub async fn update_product(
        &mut self,
        id: &str,
        payload: &ProductPayload,
        image: Option<ImageUpload>,
    ) -> ClientResult<Product> {
        self.ensure_auth()?;
        let result = self
            .http
            .put_form(&product_path(id), product_form(payload, image))
            .await;
        let product: Product = self.check_auth(result)?;
        tracing::info!(product_id = %id, "Product updated");
        Ok(product)
    }

    pub async fn delete_product(&mut self, id: &str) -> ClientResult<()> {
        self.ensure_auth()?;
        let result = self.http.delete::<serde_json::Value>(&product_path(id)).await;
        self.check_auth(result)?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
