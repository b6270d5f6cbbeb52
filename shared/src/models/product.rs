//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Product entity as returned by the backend.
///
/// `price` and `stock` fall back to zero when a record omits them or sends
/// `null`, so a malformed row still renders and filters instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
    /// URL or data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, stock: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            image: None,
            barcode: None,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Decimal string form of the price, without currency symbol or trailing zeros.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use shared::models::Product;
    ///
    /// let p = Product::new("p1", "Chair", Decimal::new(1250, 2), 1);
    /// assert_eq!(p.price_text(), "12.5");
    /// ```
    pub fn price_text(&self) -> String {
        self.price.normalize().to_string()
    }
}

/// Validated product fields sent as multipart form data on create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
    pub barcode: Option<String>,
}

/// Raw product form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    /// Price as typed; `,` and `.` are both accepted as decimal separator
    pub price_input: String,
    pub stock: Option<i64>,
    pub barcode: Option<String>,
}

impl ProductDraft {
    /// Prefill a draft from an existing product (edit form).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price_input: product.price_text().replace('.', ","),
            stock: Some(product.stock),
            barcode: product.barcode.clone(),
        }
    }

    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        let price = parse_price(&self.price_input)?;

        let stock = self.stock.ok_or(ValidationError::MissingField("stock"))?;
        if stock < 0 {
            return Err(ValidationError::NegativeStock(stock));
        }

        let barcode = self
            .barcode
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);

        Ok(ProductPayload {
            name: name.to_string(),
            price,
            stock,
            barcode,
        })
    }
}

/// Parse a typed price. Accepts digits with at most one `,` or `.` separator.
pub fn parse_price(input: &str) -> Result<Decimal, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingField("price"));
    }

    let separators = input.chars().filter(|c| *c == ',' || *c == '.').count();
    let only_allowed = input.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.');
    if !only_allowed || separators > 1 {
        return Err(ValidationError::InvalidPrice(input.to_string()));
    }

    let normalized = input.replace(',', ".");
    normalized
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidPrice(input.to_string()))
}
