//! Cart totals and discount application
//!
//! All amounts are `f64` and never rounded.

use crate::cart::Product;
use crate::discount::{Criterion, DiscountRequest, DiscountType};
use crate::error::{Error, Result};

/// Outcome of applying a discount
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountedCart {
    /// Products with discounted prices, in the original order
    pub products: Vec<Product>,
    /// Total after the discount
    pub total: f64,
}

/// Sum of all product prices; `0.0` for an empty cart.
pub fn cart_total(products: &[Product]) -> f64 {
    products.iter().map(|p| p.price).sum()
}

/// Applies `request` to `products` without touching the input slice.
///
/// A cart discount compares `original_total` against `cart_value` but
/// subtracts `discount_value`; the result is not clamped. Product discounts
/// clamp each qualifying price at zero.
///
/// A cart discount with a `collection` or `product_value` criterion is a
/// no-op. A product discount with a `cart_value` criterion has no rule to
/// apply and fails with [`Error::AmbiguousDiscount`].
pub fn apply_discount(
    products: &[Product],
    request: &DiscountRequest,
    original_total: f64,
) -> Result<DiscountedCart> {
    match (request.discount_type, &request.criterion) {
        (DiscountType::Cart, Criterion::CartValue(threshold)) => {
            let total = if original_total > *threshold {
                original_total - request.discount_value
            } else {
                original_total
            };
            Ok(DiscountedCart {
                products: products.to_vec(),
                total,
            })
        }
        (DiscountType::Product, Criterion::Collection(collection)) => Ok(discount_products(
            products,
            request.discount_value,
            |p| p.in_collection(collection),
        )),
        (DiscountType::Product, Criterion::ProductValue(threshold)) => Ok(discount_products(
            products,
            request.discount_value,
            |p| p.price >= *threshold,
        )),
        (DiscountType::Cart, criterion) => {
            tracing::warn!(
                "cart discount needs a cart_value criterion, got {}; no discount applied",
                criterion.field_name()
            );
            Ok(DiscountedCart {
                products: products.to_vec(),
                total: original_total,
            })
        }
        (DiscountType::Product, Criterion::CartValue(_)) => Err(Error::AmbiguousDiscount {
            discount_type: request.discount_type.as_str(),
            criterion: request.criterion.field_name(),
        }),
    }
}

fn discount_products<F>(products: &[Product], amount: f64, qualifies: F) -> DiscountedCart
where
    F: Fn(&Product) -> bool,
{
    let products: Vec<Product> = products
        .iter()
        .map(|p| {
            if qualifies(p) {
                Product {
                    price: (p.price - amount).max(0.0),
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect();

    let total = cart_total(&products);
    DiscountedCart { products, total }
}
