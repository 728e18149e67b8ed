//! Dhanam Market Data Crate
//!
//! This crate resolves current unit prices for the heterogeneous asset
//! identifiers tracked by the Dhanam dashboard: equity tickers, mutual-fund
//! scheme names or codes, and crypto coin ids.
//!
//! # Overview
//!
//! The crate supports:
//! - One price source per market-linked asset category (equity/fixed income,
//!   mutual funds, crypto)
//! - Fuzzy mutual-fund name lookup against a memoized scheme catalog
//! - A time-bounded in-memory price cache (5 minute freshness window)
//! - Total collapse of every failure mode to "no price available"
//!
//! # Architecture
//!
//! ```text
//! caller
//!    |
//!    v
//! +---------------+  fresh hit   +-------------+
//! | PriceResolver | -----------> | PriceCache  |
//! +---------------+              +-------------+
//!    | miss                             ^
//!    v                                  | write-through
//! +-----------------+  (MF names)       |
//! | SchemeDirectory | ----+             |
//! +-----------------+     |             |
//!                         v             |
//!                 +---------------+     |
//!                 | PriceProvider | ----+
//!                 +---------------+
//!                 (mfapi / CoinGecko / Twelve Data)
//! ```
//!
//! # Core Types
//!
//! - [`AssetCategory`] - Dashboard asset classification; four categories are
//!   market-linked, the rest never reach a provider
//! - [`PriceKey`] - Cache identity: category + normalized ticker + exchange
//! - [`ResolvedPrice`] - The external-facing result, including a canonical
//!   identifier the caller may persist for future direct lookups
//! - [`PriceProvider`] - The single-capability adapter trait all providers
//!   implement
//! - [`QuoteError`] - Tagged failure at the adapter boundary; collapsed to
//!   `Option` only at the resolver's outer edge

pub mod cache;
pub mod config;
pub mod directory;
pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

// Re-export all public types from models
pub use models::{
    AssetCategory, PriceKey, PriceQuery, PriceRequest, ProviderQuote, ResolvedPrice, SchemeRecord,
};

// Re-export the cache and directory resources
pub use cache::{CacheEntry, PriceCache};
pub use directory::{LoadState, MfapiCatalog, SchemeCatalog, SchemeDirectory};

// Re-export provider types
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::mfapi::MfapiProvider;
pub use provider::twelve_data::TwelveDataProvider;
pub use provider::PriceProvider;

// Re-export error and config types
pub use config::MarketDataConfig;
pub use errors::{FailureClass, QuoteError};

// Re-export the resolver
pub use resolver::PriceResolver;
