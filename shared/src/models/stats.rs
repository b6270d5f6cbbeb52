//! Product statistics shown on the dashboard

use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub in_stock: u64,
    #[serde(default)]
    pub out_of_stock: u64,
}

impl ProductStats {
    /// Compute the counters from an in-memory product list.
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |mut acc, p| {
            acc.total_products += 1;
            if p.is_in_stock() {
                acc.in_stock += 1;
            } else if p.is_out_of_stock() {
                acc.out_of_stock += 1;
            }
            acc
        })
    }
}
