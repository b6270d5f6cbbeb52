//! Plain-text rendering of command results

use std::fmt::Write;

use shared::models::{Catalog, CatalogSummary};
use shared::{Product, ProductStats, SelectionSet};

const NO_PRODUCTS: &str = "No products";

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

/// Product table in the given row order. Selected rows are marked `[x]`.
pub fn product_table(rows: &[&Product], selection: Option<&SelectionSet>) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_PRODUCTS);
    }

    let id_width = rows.iter().map(|p| p.id.len()).max().unwrap_or(0).max(2);
    let name_width = rows
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let mark_header = if selection.is_some() { "    " } else { "" };
    let _ = writeln!(
        out,
        "{}{:<id_width$}  {:<name_width$}  {:>10}  {:>6}  BARCODE",
        mark_header, "ID", "NAME", "PRICE", "STOCK"
    );
    for p in rows {
        let mark = match selection {
            Some(sel) if sel.contains(&p.id) => "[x] ",
            Some(_) => "[ ] ",
            None => "",
        };
        let _ = writeln!(
            out,
            "{}{:<id_width$}  {:<name_width$}  {:>10}  {:>6}  {}",
            mark,
            p.id,
            p.name,
            p.price_text(),
            p.stock,
            or_dash(p.barcode.as_deref())
        );
    }
    out
}

/// Detail block of one product
pub fn product_detail(p: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:      {}", p.id);
    let _ = writeln!(out, "Name:    {}", p.name);
    let _ = writeln!(out, "Price:   {}", p.price_text());
    let _ = writeln!(out, "Stock:   {}", p.stock);
    let _ = writeln!(out, "Barcode: {}", or_dash(p.barcode.as_deref()));
    let _ = writeln!(out, "Image:   {}", or_dash(p.image.as_deref()));
    out
}

/// Owner's catalog list with one link per row
pub fn catalog_rows(catalogs: &[CatalogSummary], link: impl Fn(&str) -> String) -> String {
    if catalogs.is_empty() {
        return "No catalogs\n".to_string();
    }
    let mut out = String::new();
    for c in catalogs {
        let created = c
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{}  {:<16}  {}", c.uuid, created, link(&c.uuid));
    }
    out
}

/// Public catalog: image, name, price and stock of every product
pub fn catalog_view(catalog: &Catalog) -> String {
    if catalog.products.is_empty() {
        return "This catalog has no products\n".to_string();
    }
    let mut out = String::new();
    for p in &catalog.products {
        let _ = writeln!(
            out,
            "{}  {}  stock {}  {}",
            p.name,
            p.price_text(),
            p.stock,
            or_dash(p.image.as_deref())
        );
    }
    out
}

pub fn stats_block(stats: &ProductStats) -> String {
    format!(
        "Total products: {}\nIn stock:       {}\nOut of stock:   {}\n",
        stats.total_products, stats.in_stock, stats.out_of_stock
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn products() -> Vec<Product> {
        let mut lamp = Product::new("p1", "Lamp", Decimal::new(1250, 2), 3);
        lamp.barcode = Some("8690000000001".into());
        vec![lamp, Product::new("p2", "Desk", Decimal::ZERO, 0)]
    }

    #[test]
    fn test_product_table_marks_selection() {
        let products = products();
        let rows: Vec<&Product> = products.iter().collect();
        let selection: SelectionSet = ["p2"].into_iter().collect();

        let table = product_table(&rows, Some(&selection));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("[ ] p1"));
        assert!(lines[1].contains("12.5"));
        assert!(lines[1].ends_with("8690000000001"));
        assert!(lines[2].starts_with("[x] p2"));
        assert!(lines[2].ends_with('-'));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(product_table(&[], None), "No products\n");
    }

    #[test]
    fn test_catalog_rows_include_links() {
        let catalogs = vec![CatalogSummary {
            uuid: "c1".into(),
            created_at: None,
        }];
        let text = catalog_rows(&catalogs, |uuid| shared::catalog_link("https://shop.local", uuid));
        assert_eq!(text, format!("c1  {:<16}  https://shop.local/catalog/c1\n", "-"));
    }

    #[test]
    fn test_stats_block() {
        let stats = ProductStats::from_products(&products());
        assert!(stats_block(&stats).contains("Out of stock:   1"));
    }
}
