//! Crypto spot-price provider backed by the CoinGecko simple/price endpoint.
//!
//! Coin ids are lower-cased CoinGecko identifiers ("bitcoin", "ethereum"),
//! not exchange tickers. Quotes are real time, so there is never a quote
//! date. The target currency is fixed at construction (the dashboard quotes
//! everything in INR).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::errors::QuoteError;
use crate::models::{PriceRequest, ProviderQuote};
use crate::provider::{lenient_decimal, PriceProvider};

const BASE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
const PROVIDER_ID: &str = "COINGECKO";

/// Spot-price provider for crypto assets.
pub struct CoinGeckoProvider {
    client: Client,
    vs_currency: String,
}

impl CoinGeckoProvider {
    pub fn new(timeout: Duration, vs_currency: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            vs_currency: vs_currency.into().to_lowercase(),
        }
    }

    /// Pull the single coin/currency price out of the response body:
    /// a mapping from coin id to a mapping of currency code to price.
    fn extract_price(
        body: &HashMap<String, HashMap<String, Value>>,
        coin_id: &str,
        vs_currency: &str,
    ) -> Result<ProviderQuote, QuoteError> {
        let price = body
            .get(coin_id)
            .and_then(|currencies| currencies.get(vs_currency))
            .and_then(lenient_decimal)
            .ok_or_else(|| {
                QuoteError::SymbolNotFound(format!(
                    "no {} price for coin id '{}'",
                    vs_currency, coin_id
                ))
            })?;

        Ok(ProviderQuote {
            price,
            quote_date: None,
            canonical_id: None,
        })
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn quote(&self, request: &PriceRequest) -> Result<ProviderQuote, QuoteError> {
        let coin_id = request.symbol.to_lowercase();

        let url = reqwest::Url::parse_with_params(
            BASE_URL,
            &[
                ("ids", coin_id.as_str()),
                ("vs_currencies", self.vs_currency.as_str()),
            ],
        )
        .map_err(|e| QuoteError::Provider {
            provider: PROVIDER_ID.to_string(),
            message: format!("failed to build URL: {}", e),
        })?;

        debug!("coingecko request: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
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

        let body: HashMap<String, HashMap<String, Value>> =
            response.json().await.map_err(|e| QuoteError::Malformed {
                provider: PROVIDER_ID.to_string(),
                message: format!("spot price response did not parse: {}", e),
            })?;

        Self::extract_price(&body, &coin_id, &self.vs_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> HashMap<String, HashMap<String, Value>> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_price() {
        let body = parse(r#"{"bitcoin": {"inr": 8198234.12}}"#);
        let quote = CoinGeckoProvider::extract_price(&body, "bitcoin", "inr").unwrap();
        assert_eq!(quote.price, dec!(8198234.12));
        assert!(quote.quote_date.is_none());
        assert!(quote.canonical_id.is_none());
    }

    #[test]
    fn test_extract_price_tolerates_stringified_numbers() {
        let body = parse(r#"{"ethereum": {"inr": "284512.5"}}"#);
        let quote = CoinGeckoProvider::extract_price(&body, "ethereum", "inr").unwrap();
        assert_eq!(quote.price, dec!(284512.5));
    }

    #[test]
    fn test_unknown_coin_id_is_not_found() {
        let body = parse(r#"{}"#);
        let err = CoinGeckoProvider::extract_price(&body, "notacoin", "inr").unwrap_err();
        assert!(matches!(err, QuoteError::SymbolNotFound(_)));
    }

    #[test]
    fn test_missing_currency_is_not_found() {
        let body = parse(r#"{"bitcoin": {"usd": 97123.0}}"#);
        let err = CoinGeckoProvider::extract_price(&body, "bitcoin", "inr").unwrap_err();
        assert!(matches!(err, QuoteError::SymbolNotFound(_)));
    }

    #[test]
    fn test_provider_id_and_currency_normalization() {
        let provider = CoinGeckoProvider::new(Duration::from_secs(10), "INR");
        assert_eq!(provider.id(), "COINGECKO");
        assert_eq!(provider.vs_currency, "inr");
    }
}
