use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset classification used across the dashboard.
///
/// Serialized forms match the labels the dashboard stores in user profiles.
/// Only four categories are market-linked; the rest are valued manually and
/// must never reach a price provider.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AssetCategory {
    #[serde(rename = "Cash & Bank")]
    Cash,
    #[serde(rename = "Equity (Stocks)")]
    Equity,
    #[serde(rename = "Mutual Funds")]
    MutualFund,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Vehicles")]
    Vehicle,
    #[serde(rename = "Crypto")]
    Crypto,
    #[serde(rename = "Other Assets")]
    Other,
}

impl AssetCategory {
    /// Whether assets in this category carry a market price that can be
    /// resolved from an external provider.
    pub fn is_market_linked(&self) -> bool {
        matches!(
            self,
            Self::Equity | Self::MutualFund | Self::FixedIncome | Self::Crypto
        )
    }

    /// The dashboard display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash & Bank",
            Self::Equity => "Equity (Stocks)",
            Self::MutualFund => "Mutual Funds",
            Self::FixedIncome => "Fixed Income",
            Self::RealEstate => "Real Estate",
            Self::Vehicle => "Vehicles",
            Self::Crypto => "Crypto",
            Self::Other => "Other Assets",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
