use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a provider adapter returns on success.
///
/// `quote_date` is the provider-reported as-of date (a NAV date for mutual
/// funds), passed through verbatim; real-time sources leave it empty.
/// `canonical_id` is a provider-verified identifier (the numeric scheme code
/// discovered from a name search) that callers can persist for future direct
/// lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderQuote {
    pub price: Decimal,
    pub quote_date: Option<String>,
    pub canonical_id: Option<String>,
}

/// The external-facing result of a price resolution.
///
/// Serialized field names match the shape the dashboard persists
/// (`price` / `date` / `ticker`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    /// Resolved unit price, always positive.
    pub price: Decimal,

    /// Provider-reported as-of date, verbatim (e.g. "17-01-2025" for a NAV).
    #[serde(rename = "date", skip_serializing_if = "Option::is_none")]
    pub quote_date: Option<String>,

    /// Canonical identifier discovered during resolution, if any. Absent on
    /// cache hits and for providers that echo the input unchanged.
    #[serde(rename = "ticker", skip_serializing_if = "Option::is_none")]
    pub resolved_ticker: Option<String>,
}
