//! Mutual-fund NAV provider backed by mfapi.in.
//!
//! The NAV-by-scheme endpoint returns the full published NAV series,
//! most-recent-first; the adapter takes the first entry as the current unit
//! price and passes the NAV date through verbatim (dd-mm-yyyy). The scheme
//! code is echoed back as the canonical identifier so callers can persist it
//! in place of a free-text fund name.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::QuoteError;
use crate::models::{PriceRequest, ProviderQuote};
use crate::provider::PriceProvider;

const BASE_URL: &str = "https://api.mfapi.in/mf";
const PROVIDER_ID: &str = "MFAPI";

// ============================================================================
// Response structures for the mfapi.in API
// ============================================================================

/// NAV-by-scheme response: `{meta: {...}, data: [{date, nav}, ...]}`.
#[derive(Debug, Deserialize)]
struct NavHistoryResponse {
    #[serde(default)]
    data: Vec<NavEntry>,
}

#[derive(Debug, Deserialize)]
struct NavEntry {
    date: String,
    nav: String,
}

impl NavHistoryResponse {
    /// Take the most recent series entry as the current price.
    fn latest(self, scheme_code: &str) -> Result<ProviderQuote, QuoteError> {
        let entry = self.data.into_iter().next().ok_or_else(|| {
            QuoteError::SymbolNotFound(format!("no NAV series for scheme {}", scheme_code))
        })?;

        let price = Decimal::from_str(entry.nav.trim()).map_err(|_| QuoteError::Malformed {
            provider: PROVIDER_ID.to_string(),
            message: format!("non-numeric NAV '{}' for scheme {}", entry.nav, scheme_code),
        })?;

        Ok(ProviderQuote {
            price,
            quote_date: Some(entry.date),
            canonical_id: Some(scheme_code.to_string()),
        })
    }
}

// ============================================================================
// MfapiProvider implementation
// ============================================================================

/// NAV provider for Indian mutual funds.
pub struct MfapiProvider {
    client: Client,
}

impl MfapiProvider {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

#[async_trait]
impl PriceProvider for MfapiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn quote(&self, request: &PriceRequest) -> Result<ProviderQuote, QuoteError> {
        let scheme_code = request.symbol.as_str();
        let url = format!("{}/{}", BASE_URL, scheme_code);
        debug!("mfapi request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                QuoteError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                QuoteError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body: NavHistoryResponse =
            response.json().await.map_err(|e| QuoteError::Malformed {
                provider: PROVIDER_ID.to_string(),
                message: format!("NAV response did not parse: {}", e),
            })?;

        body.latest(scheme_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> NavHistoryResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_latest_takes_first_series_entry() {
        let response = parse(
            r#"{
                "meta": {"fund_house": "SBI Mutual Fund", "scheme_name": "SBI Small Cap Fund Regular Growth"},
                "data": [
                    {"date": "17-01-2025", "nav": "212.4567"},
                    {"date": "16-01-2025", "nav": "210.9912"}
                ]
            }"#,
        );

        let quote = response.latest("118825").unwrap();
        assert_eq!(quote.price, dec!(212.4567));
        assert_eq!(quote.quote_date.as_deref(), Some("17-01-2025"));
        assert_eq!(quote.canonical_id.as_deref(), Some("118825"));
    }

    #[test]
    fn test_empty_series_is_not_found() {
        let response = parse(r#"{"meta": {}, "data": []}"#);
        let err = response.latest("118825").unwrap_err();
        assert!(matches!(err, QuoteError::SymbolNotFound(_)));
    }

    #[test]
    fn test_missing_data_field_is_not_found() {
        let response = parse(r#"{"status": "SUCCESS"}"#);
        let err = response.latest("999999").unwrap_err();
        assert!(matches!(err, QuoteError::SymbolNotFound(_)));
    }

    #[test]
    fn test_non_numeric_nav_is_malformed() {
        let response = parse(r#"{"data": [{"date": "17-01-2025", "nav": "N.A."}]}"#);
        let err = response.latest("118825").unwrap_err();
        assert!(matches!(err, QuoteError::Malformed { .. }));
    }

    #[test]
    fn test_provider_id() {
        let provider = MfapiProvider::new(Duration::from_secs(10));
        assert_eq!(provider.id(), "MFAPI");
    }
}
