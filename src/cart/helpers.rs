//! Shopping Cart Helpers
//!
//! This module contains small formatting helpers used in log lines.

use super::models::Product;

/// Produces a human-readable one-line summary for a list of products.
///
/// Example output: `"Lamp (25), Chair [Furniture] (15.5)"`.
pub fn format_product_summary(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| match &p.collection {
            Some(collection) => format!("{} [{}] ({})", p.name, collection, p.price),
            None => format!("{} ({})", p.name, p.price),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
