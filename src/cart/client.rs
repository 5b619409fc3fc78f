//! HTTP client for the remote cart service
//!
//! Pages are requested one at a time: page N+1 is only requested after the
//! body of page N has been read and decoded.

use super::{helpers::format_product_summary, models::*};
use crate::config::Config;
use crate::error::{Error, Result};
use serde_json::Value;

/// Client for `GET <base>/carts.json?id=<id>&page=<n>`
pub struct CartClient {
    client: reqwest::Client,
    base_url: String,
}

impl CartClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every page of cart `id` and returns the products in page order.
    ///
    /// After each page `per_page` is added to a running count; fetching stops
    /// once that count reaches the reported `total`.
    pub async fn fetch_cart(&self, id: i64) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut processed: i64 = 0;
        let mut page: u32 = 1;

        loop {
            let cart_page = self.fetch_page(id, page).await?;
            let pagination = cart_page.pagination;
            products.extend(cart_page.products);

            processed = processed.saturating_add(pagination.per_page);
            if processed >= pagination.total {
                break;
            }
            page += 1;
        }

        tracing::info!(cart_id = id, pages = page, products = products.len(), "cart fetched");
        Ok(products)
    }

    /// Fetches and decodes a single page.
    pub async fn fetch_page(&self, id: i64, page: u32) -> Result<CartPage> {
        let url = format!("{}/carts.json", self.base_url);
        tracing::debug!("GET {} id={} page={}", url, id, page);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&[("id", id.to_string()), ("page", page.to_string())])
            .send()
            .await
            .map_err(|source| Error::Fetch { page, source })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("cart service request for page {} failed with {}", page, status);
            return Err(Error::HttpStatus { page, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| Error::Fetch { page, source })?;

        let cart_page = parse_page(&body, page)?;
        tracing::debug!(
            "page {} of cart {}: {}",
            page,
            id,
            format_product_summary(&cart_page.products)
        );
        Ok(cart_page)
    }
}

/// Decodes a page body, telling apart non-JSON bodies from JSON of the
/// wrong shape.
pub fn parse_page(body: &str, page: u32) -> Result<CartPage> {
    let value: Value =
        serde_json::from_str(body).map_err(|source| Error::MalformedBody { page, source })?;
    let cart_page: CartPage =
        serde_json::from_value(value).map_err(|source| Error::Schema { page, source })?;

    if cart_page.pagination.per_page <= 0 {
        return Err(Error::InvalidPagination {
            page,
            per_page: cart_page.pagination.per_page,
        });
    }
    Ok(cart_page)
}
