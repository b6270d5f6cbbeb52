//! Stock filter and free-text search over the in-memory product list.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Stock-status predicate of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockFilter {
    #[default]
    All,
    /// `stock > 0`
    InStock,
    /// `stock == 0`
    OutOfStock,
}

impl StockFilter {
    /// Map the two checkbox flags to a filter.
    ///
    /// Both flags set means the same as none set: every product is shown.
    pub fn from_flags(in_stock: bool, out_of_stock: bool) -> Self {
        match (in_stock, out_of_stock) {
            (true, false) => StockFilter::InStock,
            (false, true) => StockFilter::OutOfStock,
            (true, true) | (false, false) => StockFilter::All,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStock => product.is_in_stock(),
            StockFilter::OutOfStock => product.is_out_of_stock(),
        }
    }
}

/// Page-local filter state: two stock checkboxes plus the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    in_stock: bool,
    out_of_stock: bool,
    search: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw flags without enforcing mutual exclusion.
    pub fn with_flags(in_stock: bool, out_of_stock: bool) -> Self {
        Self {
            in_stock,
            out_of_stock,
            search: String::new(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Toggle the in-stock checkbox; checking it unchecks out-of-stock.
    pub fn set_in_stock(&mut self, checked: bool) {
        self.in_stock = checked;
        self.out_of_stock = false;
    }

    /// Toggle the out-of-stock checkbox; checking it unchecks in-stock.
    pub fn set_out_of_stock(&mut self, checked: bool) {
        self.out_of_stock = checked;
        self.in_stock = false;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn out_of_stock(&self) -> bool {
        self.out_of_stock
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn stock_filter(&self) -> StockFilter {
        StockFilter::from_flags(self.in_stock, self.out_of_stock)
    }

    /// Lower-cased search text, or `None` when the box is blank.
    pub fn search_needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}

/// Name (case-insensitive) or price string contains the needle.
///
/// `needle` must already be lower-cased.
pub fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle) || product.price_text().contains(needle)
}

/// Derive the displayed list: stock filter, then search, then newest first.
///
/// The source slice is never modified and items are borrowed, not copied.
pub fn derive_view<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let stock = criteria.stock_filter();
    let needle = criteria.search_needle();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| stock.matches(p))
        .filter(|p| needle.as_deref().is_none_or(|n| matches_search(p, n)))
        .collect();

    // backend returns insertion order; newest is shown first
    view.reverse();
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, price: i64, stock: i64) -> Product {
        Product::new(id, name, Decimal::from(price), stock)
    }

    fn ids(view: &[&Product]) -> Vec<String> {
        view.iter().map(|p| p.id.clone()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Chair", 100, 5),
            product("2", "Desk", 0, 0),
            product("3", "Armchair", 250, 1),
            product("4", "Bookshelf", 1000, 0),
        ]
    }

    #[test]
    fn test_out_of_stock_scenario() {
        let products = vec![product("1", "Chair", 100, 5), product("2", "Desk", 0, 0)];
        let mut criteria = FilterCriteria::new();
        criteria.set_out_of_stock(true);

        let view = derive_view(&products, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Desk");
        assert_eq!(view[0].price, Decimal::ZERO);
        assert_eq!(view[0].stock, 0);
    }

    #[test]
    fn test_price_substring_search() {
        let products = vec![product("1", "A", 100, 1), product("2", "B", 250, 1)];
        let criteria = FilterCriteria::new().with_search("10");
        assert_eq!(ids(&derive_view(&products, &criteria)), vec!["1"]);
    }

    #[test]
    fn test_no_criteria_reverses_order() {
        let products = sample();
        let view = derive_view(&products, &FilterCriteria::new());
        assert_eq!(ids(&view), vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_in_stock_filter() {
        let products = sample();
        let mut criteria = FilterCriteria::new();
        criteria.set_in_stock(true);
        assert_eq!(ids(&derive_view(&products, &criteria)), vec!["3", "1"]);
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let products = sample();
        let criteria = FilterCriteria::new().with_search("CHAIR");
        assert_eq!(ids(&derive_view(&products, &criteria)), vec!["3", "1"]);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let products = sample();
        let criteria = FilterCriteria::new().with_search("   ");
        assert_eq!(derive_view(&products, &criteria).len(), 4);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let products = sample();
        let mut criteria = FilterCriteria::new().with_search("0");
        criteria.set_out_of_stock(true);
        // "Desk" price 0, "Bookshelf" price 1000, both out of stock
        assert_eq!(ids(&derive_view(&products, &criteria)), vec!["4", "2"]);
    }

    #[test]
    fn test_zero_and_negative_price_search() {
        let products = vec![product("1", "Gift", 0, 1), product("2", "Refund", -15, 1)];
        assert_eq!(ids(&derive_view(&products, &FilterCriteria::new().with_search("0"))), vec!["1"]);
        assert_eq!(ids(&derive_view(&products, &FilterCriteria::new().with_search("-1"))), vec!["2"]);
    }

    #[test]
    fn test_fractional_price_search_has_no_currency() {
        let products = vec![Product::new("1", "Pen", Decimal::new(1250, 2), 1)];
        assert_eq!(derive_view(&products, &FilterCriteria::new().with_search("12.5")).len(), 1);
        assert!(derive_view(&products, &FilterCriteria::new().with_search("12.50")).is_empty());
        assert!(derive_view(&products, &FilterCriteria::new().with_search("₺")).is_empty());
    }

    #[test]
    fn test_both_flags_show_all() {
        let products = sample();
        let criteria = FilterCriteria::with_flags(true, true);
        assert_eq!(criteria.stock_filter(), StockFilter::All);
        assert_eq!(
            derive_view(&products, &criteria),
            derive_view(&products, &FilterCriteria::new())
        );
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let mut criteria = FilterCriteria::new();
        criteria.set_in_stock(true);
        criteria.set_out_of_stock(true);
        assert!(!criteria.in_stock());
        assert_eq!(criteria.stock_filter(), StockFilter::OutOfStock);

        criteria.set_in_stock(true);
        assert!(!criteria.out_of_stock());
        assert_eq!(criteria.stock_filter(), StockFilter::InStock);
    }

    #[test]
    fn test_derivation_is_idempotent_and_pure() {
        let products = sample();
        let before = products.clone();
        let mut criteria = FilterCriteria::new().with_search("a");
        criteria.set_in_stock(true);

        let first = derive_view(&products, &criteria);
        let second = derive_view(&products, &criteria);
        assert_eq!(first, second);
        assert_eq!(products, before);
        // borrowed from the source, not copied
        assert!(std::ptr::eq(first[0], &products[2]));
    }

    #[test]
    fn test_view_matches_predicate_exactly() {
        let products = sample();
        for (in_stock, out_of_stock) in [(false, false), (true, false), (false, true), (true, true)] {
            for search in ["", "ch", "00", "zzz"] {
                let criteria = FilterCriteria::with_flags(in_stock, out_of_stock).with_search(search);
                let stock = criteria.stock_filter();
                let expected: Vec<&Product> = products
                    .iter()
                    .rev()
                    .filter(|p| stock.matches(p))
                    .filter(|p| search.is_empty() || matches_search(p, &search.to_lowercase()))
                    .collect();
                assert_eq!(derive_view(&products, &criteria), expected);
            }
        }
    }

    #[test]
    fn test_empty_list() {
        assert!(derive_view(&[], &FilterCriteria::new().with_search("x")).is_empty());
    }
}
