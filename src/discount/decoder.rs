//! Input decoding for discount requests

use super::models::{Criterion, DiscountRequest, RawDiscountRequest};
use crate::error::{Error, Result};
use std::io::BufRead;

/// Reads every line from `reader` and decodes the concatenation.
///
/// Line breaks are dropped before decoding, so a request may be spread over
/// several lines.
pub fn read_request<R: BufRead>(reader: R) -> Result<DiscountRequest> {
    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(&line?);
    }
    decode_request(&text)
}

/// Decodes a discount request from JSON text.
///
/// The criterion is picked by precedence: `collection`, then
/// `product_value`, then `cart_value`. Extra criterion fields are ignored.
pub fn decode_request(text: &str) -> Result<DiscountRequest> {
    let raw: RawDiscountRequest = serde_json::from_str(text).map_err(Error::Decode)?;
    let request = DiscountRequest::try_from(raw)?;
    tracing::debug!("decoded request: {}", request);
    Ok(request)
}

impl TryFrom<RawDiscountRequest> for DiscountRequest {
    type Error = Error;

    fn try_from(raw: RawDiscountRequest) -> Result<Self> {
        let criterion = match (raw.collection, raw.product_value, raw.cart_value) {
            (Some(name), _, _) => Criterion::Collection(name),
            (None, Some(value), _) => Criterion::ProductValue(value),
            (None, None, Some(value)) => Criterion::CartValue(value),
            (None, None, None) => return Err(Error::MissingCriterion),
        };

        Ok(DiscountRequest {
            id: raw.id,
            discount_type: raw.discount_type,
            discount_value: raw.discount_value,
            criterion,
        })
    }
}
