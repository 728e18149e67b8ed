use super::AssetCategory;

/// Cache identity for a resolved price.
///
/// Two requests with the same (category, ticker, exchange) triple observe the
/// same cache entry; fields that do not affect the quoted unit price (such as
/// holding quantity) are deliberately not part of the key.
///
/// `ticker` and `exchange` are stored already normalized (trimmed,
/// upper-cased; empty string when no exchange hint was given). The resolver
/// owns normalization so the key type stays a plain value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PriceKey {
    pub category: AssetCategory,
    pub ticker: String,
    pub exchange: String,
}

impl PriceKey {
    pub fn new(
        category: AssetCategory,
        ticker: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            category,
            ticker: ticker.into(),
            exchange: exchange.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_triple_is_equal() {
        let a = PriceKey::new(AssetCategory::Equity, "INFY", "NSE");
        let b = PriceKey::new(AssetCategory::Equity, "INFY", "NSE");
        assert_eq!(a, b);
    }

    #[test]
    fn test_exchange_is_part_of_identity() {
        let nse = PriceKey::new(AssetCategory::Equity, "INFY", "NSE");
        let bse = PriceKey::new(AssetCategory::Equity, "INFY", "BSE");
        assert_ne!(nse, bse);
    }

    #[test]
    fn test_category_is_part_of_identity() {
        let equity = PriceKey::new(AssetCategory::Equity, "SBIN", "");
        let bond = PriceKey::new(AssetCategory::FixedIncome, "SBIN", "");
        assert_ne!(equity, bond);
    }
}
