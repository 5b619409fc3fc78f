//! Result formatting

use crate::error::{Error, Result};
use serde::Serialize;

/// Totals printed on stdout, keys in this order
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Totals {
    pub total_amount: f64,
    pub total_after_discount: f64,
}

/// Renders totals as pretty-printed JSON with two-space indentation.
///
/// Integral amounts keep a trailing `.0` (`70.0`, not `70`).
pub fn format_totals(totals: &Totals) -> Result<String> {
    serde_json::to_string_pretty(totals).map_err(Error::Encode)
}
