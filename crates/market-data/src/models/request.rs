use super::AssetCategory;

/// Normalized input to a provider adapter.
///
/// Built by the resolver after ticker normalization and (for mutual funds)
/// scheme-code discovery; adapters never see raw user input.
#[derive(Clone, Debug)]
pub struct PriceRequest {
    pub category: AssetCategory,

    /// Normalized symbol: an upper-cased ticker, a numeric scheme code, or a
    /// coin id (adapters lower-case coin ids themselves).
    pub symbol: String,

    /// Normalized exchange hint, only ever set for equity/fixed income.
    pub exchange: Option<String>,
}

/// One entry of a batch price refresh.
#[derive(Clone, Debug)]
pub struct PriceQuery {
    pub ticker: String,
    pub category: AssetCategory,
    pub exchange: Option<String>,
}

impl PriceQuery {
    pub fn new(ticker: impl Into<String>, category: AssetCategory) -> Self {
        Self {
            ticker: ticker.into(),
            category,
            exchange: None,
        }
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }
}
