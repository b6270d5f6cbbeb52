//! Catalog Model
//!
//! A catalog is a server-side snapshot of a product subset, addressed by an
//! opaque uuid and readable without authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Product;

/// Path segment of the public catalog page
pub const CATALOG_PATH: &str = "catalog";

/// Public catalog view (`GET /api/catalogs/{uuid}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Entry of the owner's catalog list (`GET /api/catalogs/my-catalogs`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub uuid: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The owner's list is sent either bare or wrapped in `{ "catalogs": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogList {
    Wrapped { catalogs: Vec<CatalogSummary> },
    Bare(Vec<CatalogSummary>),
}

impl CatalogList {
    pub fn into_vec(self) -> Vec<CatalogSummary> {
        match self {
            CatalogList::Wrapped { catalogs } => catalogs,
            CatalogList::Bare(catalogs) => catalogs,
        }
    }
}

/// Create catalog payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatalogRequest {
    pub product_ids: Vec<String>,
}

/// Create catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCreated {
    pub uuid: String,
}

/// Bulk delete payload (`DELETE /api/catalogs/bulk-delete`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteCatalogsRequest {
    pub uuids: Vec<String>,
}

/// Shareable link of a catalog: `{origin}/catalog/{uuid}`.
///
/// Plain concatenation; the uuid format is not checked.
pub fn catalog_link(origin: &str, uuid: &str) -> String {
    format!("{}/{}/{}", origin, CATALOG_PATH, uuid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_link() {
        assert_eq!(
            catalog_link("https://shop.example.com", "0b6f3c"),
            "https://shop.example.com/catalog/0b6f3c"
        );
        // no validation of the identifier
        assert_eq!(catalog_link("http://localhost:3000", "not a uuid"), "http://localhost:3000/catalog/not a uuid");
    }

    #[test]
    fn test_create_request_wire_format() {
        let req = CreateCatalogRequest {
            product_ids: vec!["p1".into(), "p2".into()],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "productIds": ["p1", "p2"] })
        );
    }

    #[test]
    fn test_catalog_list_both_shapes() {
        let wrapped: CatalogList = serde_json::from_str(
            r#"{"catalogs":[{"uuid":"a","createdAt":"2025-01-02T10:00:00Z"}]}"#,
        )
        .unwrap();
        let bare: CatalogList = serde_json::from_str(r#"[{"uuid":"b"}]"#).unwrap();

        let wrapped = wrapped.into_vec();
        assert_eq!(wrapped[0].uuid, "a");
        assert!(wrapped[0].created_at.is_some());
        assert_eq!(bare.into_vec()[0].uuid, "b");
    }

    #[test]
    fn test_catalog_without_products_field() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.products.is_empty());
    }
}
