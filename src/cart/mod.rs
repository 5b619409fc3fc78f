//! Shopping Cart Domain Module
//!
//! This module contains everything about the remote cart, including:
//! - Domain models (Product, Pagination, CartPage)
//! - The paginated HTTP client
//! - Formatting helpers

pub mod client;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use client::CartClient;
pub use models::{CartPage, Pagination, Product};
