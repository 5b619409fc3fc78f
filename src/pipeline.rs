//! End-to-end flow: request → cart → totals

use crate::cart::{CartClient, Product};
use crate::config::Config;
use crate::discount::DiscountRequest;
use crate::error::Result;
use crate::output::Totals;
use crate::pricing::{apply_discount, cart_total};

/// Fetches the cart named by `request` and prices it.
pub async fn run(request: &DiscountRequest, config: &Config) -> Result<Totals> {
    let client = CartClient::new(config)?;
    tracing::info!("fetching cart {} from {}", request.id, client.base_url());

    let products = client.fetch_cart(request.id).await?;
    compute_totals(&products, request)
}

/// Prices a fully fetched cart.
pub fn compute_totals(products: &[Product], request: &DiscountRequest) -> Result<Totals> {
    let total_amount = cart_total(products);

    let total_after_discount = apply_discount(products, request, total_amount)?.total;

    tracing::info!(
        total_amount,
        total_after_discount,
        products = products.len(),
        "cart priced"
    );
    Ok(Totals {
        total_amount,
        total_after_discount,
    })
}
