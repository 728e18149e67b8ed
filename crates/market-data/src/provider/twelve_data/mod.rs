//! Equity and fixed-income quote provider backed by the Twelve Data
//! `/price` endpoint.
//!
//! Requires an API key. Without one the adapter fails fast with a
//! configuration error and never touches the network, so a missing
//! credential degrades equity/bond resolution only and is distinguishable
//! from a provider outage in logs.
//!
//! An exchange hint is passed through when present; otherwise a default
//! country hint is applied, and only for the equity category (fixed income
//! symbols are looked up globally).

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::QuoteError;
use crate::models::{AssetCategory, PriceRequest, ProviderQuote};
use crate::provider::{lenient_decimal, PriceProvider};

const BASE_URL: &str = "https://api.twelvedata.com/price";
const PROVIDER_ID: &str = "TWELVE_DATA";

// ============================================================================
// Response structures for the Twelve Data API
// ============================================================================

/// `/price` response: `{"price": "178.25"}` on success, or an error payload
/// `{"code": 404, "message": "...", "status": "error"}` with HTTP 200.
#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl PriceResponse {
    fn into_quote(self, symbol: &str) -> Result<ProviderQuote, QuoteError> {
        if self.status.as_deref() == Some("error") {
            let message = self
                .message
                .unwrap_or_else(|| "unspecified error".to_string());
            return Err(match self.code {
                Some(404) => QuoteError::SymbolNotFound(message),
                _ => QuoteError::Provider {
                    provider: PROVIDER_ID.to_string(),
                    message,
                },
            });
        }

        let price = self
            .price
            .as_ref()
            .and_then(lenient_decimal)
            .ok_or_else(|| QuoteError::Malformed {
                provider: PROVIDER_ID.to_string(),
                message: format!("missing or non-numeric price field for {}", symbol),
            })?;

        Ok(ProviderQuote {
            price,
            quote_date: None,
            canonical_id: None,
        })
    }
}

// ============================================================================
// TwelveDataProvider implementation
// ============================================================================

/// Quote provider for listed equities and bonds.
pub struct TwelveDataProvider {
    client: Client,
    api_key: Option<String>,
    default_country: String,
}

impl TwelveDataProvider {
    pub fn new(
        timeout: Duration,
        api_key: Option<String>,
        default_country: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            default_country: default_country.into(),
        }
    }
}

#[async_trait]
impl PriceProvider for TwelveDataProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn quote(&self, request: &PriceRequest) -> Result<ProviderQuote, QuoteError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| QuoteError::MissingCredential {
                provider: PROVIDER_ID.to_string(),
            })?;

        let mut params: Vec<(&str, &str)> = vec![("symbol", request.symbol.as_str())];
        match request.exchange.as_deref() {
            Some(exchange) => params.push(("exchange", exchange)),
            None if request.category == AssetCategory::Equity => {
                params.push(("country", self.default_country.as_str()))
            }
            None => {}
        }
        params.push(("apikey", api_key));

        let url =
            reqwest::Url::parse_with_params(BASE_URL, &params).map_err(|e| QuoteError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("failed to build URL: {}", e),
            })?;

        debug!(
            "twelve data request: {}",
            url.as_str().replace(api_key, "***")
        );

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

        let body: PriceResponse = response.json().await.map_err(|e| QuoteError::Malformed {
            provider: PROVIDER_ID.to_string(),
            message: format!("price response did not parse: {}", e),
        })?;

        body.into_quote(&request.symbol)
    }
}
