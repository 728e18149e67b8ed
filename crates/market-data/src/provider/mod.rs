//! Price provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` trait every adapter implements
//! - Concrete adapters: mfapi.in (mutual fund NAV), CoinGecko (crypto spot),
//!   Twelve Data (equity and fixed income quotes)
//!
//! Adapters receive a normalized [`PriceRequest`](crate::models::PriceRequest)
//! built by the resolver; mutual-fund name-to-code discovery happens in the
//! directory module, not here. Every adapter converts provider-side type
//! looseness (stringified numbers) and reports failures as tagged
//! [`QuoteError`](crate::errors::QuoteError) values rather than panicking.

mod traits;

pub mod coingecko;
pub mod mfapi;
pub mod twelve_data;

pub use traits::PriceProvider;

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a price field that may arrive as a JSON string or number.
pub(crate) fn lenient_decimal(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok(),
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lenient_decimal_from_string() {
        let value = serde_json::json!("212.4567");
        assert_eq!(lenient_decimal(&value), Some(dec!(212.4567)));
    }

    #[test]
    fn test_lenient_decimal_from_number() {
        let value = serde_json::json!(98123.5);
        assert_eq!(lenient_decimal(&value), Some(dec!(98123.5)));
    }

    #[test]
    fn test_lenient_decimal_rejects_non_numeric() {
        assert_eq!(lenient_decimal(&serde_json::json!("N.A.")), None);
        assert_eq!(lenient_decimal(&serde_json::json!(null)), None);
        assert_eq!(lenient_decimal(&serde_json::json!({"v": 1})), None);
    }
}
