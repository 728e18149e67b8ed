//! Configuration surface for the price resolution layer.
//!
//! Only the equity/bond provider requires a credential; its absence degrades
//! that one category and leaves the others untouched.

use std::env;
use std::time::Duration;

/// Environment variable holding the Twelve Data API key.
pub const TWELVE_DATA_API_KEY_ENV: &str = "TWELVE_DATA_API_KEY";

/// Settings for building a [`PriceResolver`](crate::resolver::PriceResolver)
/// against the real providers.
#[derive(Clone, Debug)]
pub struct MarketDataConfig {
    /// Twelve Data API key; `None` disables equity/bond resolution.
    pub twelve_data_api_key: Option<String>,

    /// Currency crypto spot prices are requested in.
    pub target_currency: String,

    /// Country hint applied to equity lookups without an exchange hint.
    pub default_country: String,

    /// Price cache freshness window.
    pub cache_ttl: Duration,

    /// Per-request timeout for every outbound provider call. An unresponsive
    /// provider must not stall a batch refresh.
    pub request_timeout: Duration,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            twelve_data_api_key: None,
            target_currency: "inr".to_string(),
            default_country: "India".to_string(),
            cache_ttl: crate::cache::DEFAULT_TTL,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl MarketDataConfig {
    /// Build a config from the environment, using defaults for everything
    /// but the credential.
    pub fn from_env() -> Self {
        Self {
            twelve_data_api_key: sanitize_key(env::var(TWELVE_DATA_API_KEY_ENV).ok()),
            ..Self::default()
        }
    }
}

/// An unset or blank credential counts as absent.
fn sanitize_key(value: Option<String>) -> Option<String> {
    value
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key_rejects_blank_values() {
        assert_eq!(sanitize_key(None), None);
        assert_eq!(sanitize_key(Some("".to_string())), None);
        assert_eq!(sanitize_key(Some("   ".to_string())), None);
    }

    #[test]
    fn test_sanitize_key_trims() {
        assert_eq!(
            sanitize_key(Some("  abc123  ".to_string())),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_defaults() {
        let config = MarketDataConfig::default();
        assert_eq!(config.target_currency, "inr");
        assert_eq!(config.default_country, "India");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert!(config.twelve_data_api_key.is_none());
    }
}
