//! Discount Request Module
//!
//! This module contains:
//! - Request models (DiscountType, Criterion, DiscountRequest)
//! - The stdin decoder

pub mod decoder;
pub mod models;

// Re-export commonly used types for convenience
pub use decoder::{decode_request, read_request};
pub use models::{Criterion, DiscountRequest, DiscountType};
