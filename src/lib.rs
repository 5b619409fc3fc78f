//! Cart Discount Library
//!
//! This library reads a discount request, fetches a paginated cart from the
//! remote cart service and computes the totals before and after discount.

// Domain modules
pub mod cart;
pub mod discount;
pub mod pricing;

// Infrastructure
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use error::{Error, Result};
