//! Error Types
//!
//! Every failure in the pipeline aborts the run, so a single enum covers
//! input decoding, cart fetching, response schema and discount resolution.

use thiserror::Error;

/// Convenience alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Standard input could not be read.
    #[error("failed to read discount request: {0}")]
    Input(#[from] std::io::Error),

    /// Input is not valid JSON or lacks `id`, `discount_type` or `discount_value`.
    #[error("malformed discount request: {0}")]
    Decode(#[source] serde_json::Error),

    /// None of `collection`, `product_value` or `cart_value` was given.
    #[error("discount request has no criterion (expected collection, product_value or cart_value)")]
    MissingCriterion,

    /// Invalid runtime setting.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure while requesting a cart page.
    #[error("request for cart page {page} failed: {source}")]
    Fetch {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Cart service answered with a non-success status.
    #[error("cart service returned {status} for page {page}")]
    HttpStatus {
        page: u32,
        status: reqwest::StatusCode,
    },

    /// Response body is not JSON.
    #[error("cart page {page} is not valid JSON: {source}")]
    MalformedBody {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    /// Response body is JSON but lacks the expected fields.
    #[error("cart page {page} has an unexpected shape: {source}")]
    Schema {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    /// Pagination metadata that would never let the fetch terminate.
    #[error("cart page {page} reports per_page={per_page}, expected a positive value")]
    InvalidPagination { page: u32, per_page: i64 },

    #[error("failed to encode totals: {0}")]
    Encode(#[source] serde_json::Error),

    /// Discount type and criterion do not combine into a known rule.
    #[error("{discount_type} discount cannot be applied with a {criterion} criterion")]
    AmbiguousDiscount {
        discount_type: &'static str,
        criterion: &'static str,
    },
}
