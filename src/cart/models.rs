//! Shopping Cart Domain Models
//!
//! This module contains the data structures returned by the remote cart
//! service.

use serde::Deserialize;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Represents a product in the shopping cart
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    /// Name of the product (not unique within a cart)
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Collection the product belongs to, if any
    #[serde(default)]
    pub collection: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, collection: Option<&str>) -> Self {
        Self {
            name: name.into(),
            price,
            collection: collection.map(str::to_string),
        }
    }

    /// True when the product belongs to `collection`
    pub fn in_collection(&self, collection: &str) -> bool {
        self.collection.as_deref() == Some(collection)
    }
}

/// Pagination metadata attached to every cart page
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: i64,
    pub per_page: i64,
    /// Number of products in the whole cart
    pub total: i64,
}

/// One page of `GET /carts.json`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CartPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}
