//! Time-bounded in-memory price cache.
//!
//! Freshness-bounded, not capacity-bounded: the key space is the user's
//! portfolio, which is small. Entries are never evicted; `get` simply stops
//! returning them once they are older than the TTL, and `put` overwrites
//! last-write-wins. Concurrent refreshes of the same key are possible and
//! benign (see the resolver docs), so `get`/`put` only need per-key
//! atomicity, which the single `RwLock` provides.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::models::PriceKey;

/// Freshness window after which a cached price is considered stale.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A cached price with its resolution time.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    /// Last resolved unit price, always positive.
    pub price: Decimal,

    /// Provider-reported as-of date, if the source had one.
    pub quote_date: Option<String>,

    /// Monotonic resolution time.
    as_of: Instant,
}

impl CacheEntry {
    /// Time elapsed since this entry was written.
    pub fn age(&self) -> Duration {
        self.as_of.elapsed()
    }
}

/// Process-lifetime price cache keyed by [`PriceKey`].
pub struct PriceCache {
    ttl: Duration,
    entries: RwLock<HashMap<PriceKey, CacheEntry>>,
}

impl PriceCache {
    /// Create a cache with the default 5 minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a fresh entry.
    ///
    /// Returns `None` if the key is absent or the entry has outlived the
    /// TTL. Expired entries are left in place; expiry is a read-side check,
    /// not an eviction.
    pub async fn get(&self, key: &PriceKey) -> Option<CacheEntry> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.age() < self.ttl)
            .cloned()
    }

    /// Store a price, unconditionally overwriting any prior entry.
    pub async fn put(&self, key: PriceKey, price: Decimal, quote_date: Option<String>) {
        let entry = CacheEntry {
            price,
            quote_date,
            as_of: Instant::now(),
        };
        self.entries.write().await.insert(key, entry);
    }
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetCategory;
    use rust_decimal_macros::dec;

    fn key(ticker: &str) -> PriceKey {
        PriceKey::new(AssetCategory::Equity, ticker, "")
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = PriceCache::new();
        assert!(cache.get(&key("INFY")).await.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = PriceCache::new();
        cache.put(key("INFY"), dec!(1450.50), None).await;

        let entry = cache.get(&key("INFY")).await.unwrap();
        assert_eq!(entry.price, dec!(1450.50));
        assert!(entry.quote_date.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_last_write_wins() {
        let cache = PriceCache::new();
        cache
            .put(key("120503"), dec!(100), Some("16-01-2025".to_string()))
            .await;
        cache
            .put(key("120503"), dec!(101), Some("17-01-2025".to_string()))
            .await;

        let entry = cache.get(&key("120503")).await.unwrap();
        assert_eq!(entry.price, dec!(101));
        assert_eq!(entry.quote_date.as_deref(), Some("17-01-2025"));
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache = PriceCache::with_ttl(Duration::from_millis(40));
        cache.put(key("INFY"), dec!(1450), None).await;

        assert!(cache.get(&key("INFY")).await.is_some());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(cache.get(&key("INFY")).await.is_none());
    }

    #[tokio::test]
    async fn test_keys_differing_by_exchange_are_distinct() {
        let cache = PriceCache::new();
        cache
            .put(
                PriceKey::new(AssetCategory::Equity, "INFY", "NSE"),
                dec!(1450),
                None,
            )
            .await;

        assert!(cache
            .get(&PriceKey::new(AssetCategory::Equity, "INFY", "BSE"))
            .await
            .is_none());
    }
}
