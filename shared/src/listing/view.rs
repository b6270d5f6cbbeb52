//! Parameterized product list.
//!
//! One list type covers every page: search box, stock filter and selection
//! checkboxes are switched on through [`ListConfig`] instead of separate
//! list variants.

use crate::error::ValidationError;
use crate::models::{Product, ProductStats};

use super::filter::{FilterCriteria, derive_view};
use super::selection::SelectionSet;

/// Capabilities of a list instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Free-text search box
    pub searchable: bool,
    /// Stock-status filter menu
    pub filterable: bool,
    /// Catalog selection checkboxes
    pub selectable: bool,
}

impl ListConfig {
    /// Owner's product management page
    pub const fn full() -> Self {
        Self {
            searchable: true,
            filterable: true,
            selectable: true,
        }
    }

    /// Plain table, e.g. the public catalog page
    pub const fn read_only() -> Self {
        Self {
            searchable: false,
            filterable: false,
            selectable: false,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::full()
    }
}

/// In-memory product list plus its page-local criteria and selection.
#[derive(Debug, Clone, Default)]
pub struct ProductListView {
    config: ListConfig,
    products: Vec<Product>,
    criteria: FilterCriteria,
    selection: SelectionSet,
}

impl ProductListView {
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_products(config: ListConfig, products: Vec<Product>) -> Self {
        Self {
            config,
            products,
            ..Default::default()
        }
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    /// Replace the source list (after a fetch). Criteria and selection are kept.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Source list in backend order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Drop a product after the backend confirmed its deletion.
    pub fn remove_product(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        self.selection.set(id, false);
        Some(self.products.remove(index))
    }

    /// Replace a product after the backend confirmed an update.
    pub fn upsert_product(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_in_stock(&mut self, checked: bool) {
        self.criteria.set_in_stock(checked);
    }

    pub fn set_out_of_stock(&mut self, checked: bool) {
        self.criteria.set_out_of_stock(checked);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.set_search(search);
    }

    /// Replace the whole criteria at once (e.g. from command-line flags).
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// The rows to render, recomputed from the source on every call.
    pub fn visible(&self) -> Vec<&Product> {
        let criteria = self.effective_criteria();
        derive_view(&self.products, &criteria)
    }

    /// Criteria with disabled capabilities masked out.
    fn effective_criteria(&self) -> FilterCriteria {
        let (in_stock, out_of_stock) = if self.config.filterable {
            (self.criteria.in_stock(), self.criteria.out_of_stock())
        } else {
            (false, false)
        };
        let criteria = FilterCriteria::with_flags(in_stock, out_of_stock);
        if self.config.searchable {
            criteria.with_search(self.criteria.search())
        } else {
            criteria
        }
    }

    /// Check or uncheck a product for the catalog being built.
    pub fn select(&mut self, id: &str, checked: bool) -> Result<(), ValidationError> {
        if !self.config.selectable {
            return Err(ValidationError::SelectionDisabled);
        }
        self.selection.set(id, checked);
        Ok(())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub fn stats(&self) -> ProductStats {
        ProductStats::from_products(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn products() -> Vec<Product> {
        vec![
            Product::new("p1", "Chair", Decimal::from(100), 5),
            Product::new("p2", "Desk", Decimal::ZERO, 0),
            Product::new("p3", "Lamp", Decimal::from(45), 2),
        ]
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut view = ProductListView::with_products(ListConfig::full(), products());
        view.select("p2", true).unwrap();

        view.set_in_stock(true);
        view.set_search("lamp");
        assert!(view.visible().iter().all(|p| p.id != "p2"));
        assert!(view.is_selected("p2"));

        view.set_search("");
        view.set_in_stock(false);
        assert!(view.is_selected("p2"));
    }

    #[test]
    fn test_read_only_ignores_criteria_and_selection() {
        let mut view = ProductListView::with_products(ListConfig::read_only(), products());
        view.set_out_of_stock(true);
        view.set_search("desk");
        assert_eq!(view.visible().len(), 3);
        assert_eq!(view.select("p1", true), Err(ValidationError::SelectionDisabled));
        assert!(view.selection().is_empty());
    }

    #[test]
    fn test_search_only_list() {
        let config = ListConfig {
            searchable: true,
            filterable: false,
            selectable: false,
        };
        let mut view = ProductListView::with_products(config, products());
        view.set_in_stock(true);
        view.set_search("de");
        let visible: Vec<_> = view.visible().into_iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, vec!["p2"]);
    }

    #[test]
    fn test_remove_product_after_delete() {
        let mut view = ProductListView::with_products(ListConfig::full(), products());
        view.select("p1", true).unwrap();
        let removed = view.remove_product("p1").unwrap();
        assert_eq!(removed.name, "Chair");
        assert!(!view.is_selected("p1"));
        assert_eq!(view.products().len(), 2);
        assert!(view.remove_product("missing").is_none());
    }

    #[test]
    fn test_upsert_product() {
        let mut view = ProductListView::with_products(ListConfig::full(), products());
        let mut updated = view.find("p2").cloned().unwrap();
        updated.stock = 7;
        view.upsert_product(updated);
        assert_eq!(view.find("p2").unwrap().stock, 7);
        assert_eq!(view.stats().in_stock, 3);

        view.upsert_product(Product::new("p4", "Rug", Decimal::from(80), 0));
        assert_eq!(view.visible()[0].id, "p4");
    }

    #[test]
    fn test_empty_list_renders_empty() {
        let view = ProductListView::new(ListConfig::full());
        assert!(view.visible().is_empty());
    }
}
