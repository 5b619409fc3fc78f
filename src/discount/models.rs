//! Discount Request Models
//!
//! This module contains the data structures describing which discount to
//! apply and to what.

use serde::Deserialize;
use std::fmt;

// =============================================================================
// Discount Domain Models
// =============================================================================

/// Whether the discount targets the cart total or individual products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    Cart,
    /// Any value other than `"cart"` is treated as a product discount
    Product,
}

impl From<String> for DiscountType {
    fn from(value: String) -> Self {
        if value == "cart" {
            DiscountType::Cart
        } else {
            DiscountType::Product
        }
    }
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Cart => "cart",
            DiscountType::Product => "product",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field that decides which products (or which carts) qualify
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Products belonging to this collection
    Collection(String),
    /// Products priced at or above this value
    ProductValue(f64),
    /// Carts whose total exceeds this value
    CartValue(f64),
}

impl Criterion {
    /// Name of the input field this criterion was read from
    pub fn field_name(&self) -> &'static str {
        match self {
            Criterion::Collection(_) => "collection",
            Criterion::ProductValue(_) => "product_value",
            Criterion::CartValue(_) => "cart_value",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Collection(name) => write!(f, "collection={name}"),
            Criterion::ProductValue(v) => write!(f, "product_value={v}"),
            Criterion::CartValue(v) => write!(f, "cart_value={v}"),
        }
    }
}

/// A fully decoded discount request
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRequest {
    /// Cart identifier on the remote service
    pub id: i64,
    pub discount_type: DiscountType,
    /// Amount subtracted from the cart total or from each qualifying price
    pub discount_value: f64,
    pub criterion: Criterion,
}

impl fmt::Display for DiscountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cart #{} {} discount of {} where {}",
            self.id, self.discount_type, self.discount_value, self.criterion
        )
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Request as it appears on stdin: every criterion field is optional
#[derive(Debug, Deserialize)]
pub struct RawDiscountRequest {
    pub id: i64,

    #[serde(deserialize_with = "discount_type_from_string")]
    pub discount_type: DiscountType,

    pub discount_value: f64,

    #[serde(default)]
    pub collection: Option<String>,

    #[serde(default)]
    pub product_value: Option<f64>,

    #[serde(default)]
    pub cart_value: Option<f64>,
}

fn discount_type_from_string<'de, D>(deserializer: D) -> Result<DiscountType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer).map(DiscountType::from)
}
