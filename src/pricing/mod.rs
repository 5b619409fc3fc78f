//! Pricing Module
//!
//! Cart totals and discount rules.

pub mod engine;

pub use engine::{apply_discount, cart_total, DiscountedCart};
