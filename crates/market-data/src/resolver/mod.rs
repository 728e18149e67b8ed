//! Price resolution orchestrator.
//!
//! [`PriceResolver`] is the sole entry point of this crate: given an asset
//! identifier and its category, it consults the cache, dispatches to the
//! matching provider on a miss, enforces the positive-price invariant, and
//! writes the result back through the cache. Every failure mode - unknown
//! symbol, provider outage, malformed payload, missing credential -
//! collapses to `None` at this boundary; the caller's remedial action is the
//! same in every case (fall back to manual price entry), so no error detail
//! crosses it.
//!
//! Two concurrent resolutions of the same key may both miss the cache and
//! both call the provider; there is no in-flight deduplication. Price data
//! is idempotent and the cache is last-write-wins, so the race costs a
//! request, not correctness.


use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::cache::PriceCache;
use crate::config::MarketDataConfig;
use crate::directory::{MfapiCatalog, SchemeDirectory};
use crate::errors::{FailureClass, QuoteError};
use crate::models::{AssetCategory, PriceKey, PriceQuery, PriceRequest, ResolvedPrice};
use crate::provider::coingecko::CoinGeckoProvider;
use crate::provider::mfapi::MfapiProvider;
use crate::provider::twelve_data::TwelveDataProvider;
use crate::provider::PriceProvider;

/// Resolves current unit prices across asset categories.
pub struct PriceResolver {
    cache: PriceCache,
    directory: Arc<SchemeDirectory>,
    mutual_fund: Arc<dyn PriceProvider>,
    crypto: Arc<dyn PriceProvider>,
    equity: Arc<dyn PriceProvider>,
}

impl PriceResolver {
    /// Create a resolver with the default cache TTL.
    pub fn new(
        directory: Arc<SchemeDirectory>,
        mutual_fund: Arc<dyn PriceProvider>,
        crypto: Arc<dyn PriceProvider>,
        equity: Arc<dyn PriceProvider>,
    ) -> Self {
        Self::with_cache(PriceCache::new(), directory, mutual_fund, crypto, equity)
    }

    /// Create a resolver around an explicit cache.
    pub fn with_cache(
        cache: PriceCache,
        directory: Arc<SchemeDirectory>,
        mutual_fund: Arc<dyn PriceProvider>,
        crypto: Arc<dyn PriceProvider>,
        equity: Arc<dyn PriceProvider>,
    ) -> Self {
        Self {
            cache,
            directory,
            mutual_fund,
            crypto,
            equity,
        }
    }

    /// Assemble a resolver against the real providers.
    pub fn from_config(config: &MarketDataConfig) -> Self {
        let directory = Arc::new(SchemeDirectory::new(Arc::new(MfapiCatalog::new(
            config.request_timeout,
        ))));

        Self::with_cache(
            PriceCache::with_ttl(config.cache_ttl),
            directory,
            Arc::new(MfapiProvider::new(config.request_timeout)),
            Arc::new(CoinGeckoProvider::new(
                config.request_timeout,
                config.target_currency.clone(),
            )),
            Arc::new(TwelveDataProvider::new(
                config.request_timeout,
                config.twelve_data_api_key.clone(),
                config.default_country.clone(),
            )),
        )
    }

    /// Resolve the current unit price of one asset.
    ///
    /// A fresh cache hit returns immediately with no network traffic - and
    /// therefore without scheme-code discovery, so `resolved_ticker` is only
    /// ever present on a fresh resolution.
    pub async fn resolve(
        &self,
        ticker: &str,
        category: AssetCategory,
        exchange: Option<&str>,
    ) -> Option<ResolvedPrice> {
        if ticker.is_empty() {
            return None;
        }

        let symbol = ticker.trim().to_uppercase();
        let exchange_code = exchange
            .map(|e| e.trim().to_uppercase())
            .unwrap_or_default();
        let key = PriceKey::new(category, symbol.clone(), exchange_code.clone());

        if let Some(entry) = self.cache.get(&key).await {
            debug!("cache hit for {} ({})", symbol, category);
            return Some(ResolvedPrice {
                price: entry.price,
                quote_date: entry.quote_date,
                resolved_ticker: None,
            });
        }

        match self
            .fetch_fresh(ticker, &symbol, category, &exchange_code)
            .await
        {
            Ok(resolved) => {
                // Write-through on the lookup key, not on any canonical
                // ticker the provider discovered.
                self.cache
                    .put(key, resolved.price, resolved.quote_date.clone())
                    .await;
                Some(resolved)
            }
            Err(err) => {
                match err.failure_class() {
                    FailureClass::Configuration => {
                        warn!("price lookup for {} skipped: {}", symbol, err)
                    }
                    _ => debug!("no price for {} ({}): {}", symbol, category, err),
                }
                None
            }
        }
    }

    /// Resolve a batch of assets concurrently.
    ///
    /// Resolutions are independent: results come back in query order, and a
    /// failure or timeout in one slot leaves every other slot unaffected.
    pub async fn resolve_many(&self, queries: &[PriceQuery]) -> Vec<Option<ResolvedPrice>> {
        join_all(queries.iter().map(|query| {
            self.resolve(&query.ticker, query.category, query.exchange.as_deref())
        }))
        .await
    }

    async fn fetch_fresh(
        &self,
        raw_ticker: &str,
        symbol: &str,
        category: AssetCategory,
        exchange_code: &str,
    ) -> Result<ResolvedPrice, QuoteError> {
        let (provider, request) = match category {
            AssetCategory::MutualFund => {
                let scheme_code = if is_numeric(symbol) {
                    symbol.to_string()
                } else {
                    // A non-numeric ticker is a fund name; search the
                    // directory with the raw ticker (matching lower-cases).
                    self.directory
                        .find_scheme(raw_ticker)
                        .await
                        .map(|scheme| scheme.scheme_code)
                        .ok_or_else(|| {
                            QuoteError::SymbolNotFound(format!(
                                "no scheme matching '{}'",
                                raw_ticker
                            ))
                        })?
                };
                (
                    &self.mutual_fund,
                    PriceRequest {
                        category,
                        symbol: scheme_code,
                        exchange: None,
                    },
                )
            }
            AssetCategory::Crypto => (
                &self.crypto,
                PriceRequest {
                    category,
                    symbol: symbol.to_string(),
                    exchange: None,
                },
            ),
            AssetCategory::Equity | AssetCategory::FixedIncome => (
                &self.equity,
                PriceRequest {
                    category,
                    symbol: symbol.to_string(),
                    exchange: (!exchange_code.is_empty()).then(|| exchange_code.to_string()),
                },
            ),
            other => return Err(QuoteError::UnsupportedCategory(other.to_string())),
        };

        let quote = provider.quote(&request).await?;

        // A zero or negative price is absence of data, never a valid quote.
        if quote.price <= Decimal::ZERO {
            return Err(QuoteError::Malformed {
                provider: provider.id().to_string(),
                message: format!("non-positive price {}", quote.price),
            });
        }

        Ok(ResolvedPrice {
            price: quote.price,
            quote_date: quote.quote_date,
            resolved_ticker: quote.canonical_id,
        })
    }
}

fn is_numeric(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("118825"));
        assert!(!is_numeric("SBI SMALL CAP"));
        assert!(!is_numeric("12A34"));
        assert!(!is_numeric(""));
    }
}
