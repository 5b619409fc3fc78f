//! Runtime settings
//!
//! The discount request always comes from stdin; these only steer where and
//! how the cart service is reached.

use crate::error::{Error, Result};
use std::time::Duration;

/// Public cart service used when `CART_API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://backend-challenge-fall-2018.herokuapp.com";
/// Per-request timeout used when `CART_API_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the cart service, without trailing slash
    pub base_url: String,
    /// Timeout applied to each page request
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("CART_API_BASE_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                return Err(Error::Config("CART_API_BASE_URL is empty".into()));
            }
            config.base_url = url.to_string();
        }

        if let Some(raw) = lookup("CART_API_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "CART_API_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    ))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("CART_API_BASE_URL", "http://127.0.0.1:9000/"),
            ("CART_API_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for vars in [
            [("CART_API_TIMEOUT_SECS", "0")],
            [("CART_API_TIMEOUT_SECS", "soon")],
            [("CART_API_BASE_URL", "  ")],
        ] {
            let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{vars:?} gave {err}");
        }
    }
}
