use serde::{Deserialize, Serialize};

/// Instrument category. Only Crypto matters to the simulator (it gets the
/// higher volatility tier); the rest are display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Crypto,
    Fund,
    Commodity,
    Currency,
    Index,
}

impl AssetType {
    /// Category slug used by the dashboard tabs (`?kind=crypto` etc).
    pub fn from_slug(s: &str) -> Option<AssetType> {
        match s.to_lowercase().as_str() {
            "crypto" => Some(AssetType::Crypto),
            "funds" | "fund" => Some(AssetType::Fund),
            "commodities" | "commodity" => Some(AssetType::Commodity),
            "currencies" | "currency" => Some(AssetType::Currency),
            "indices" | "index" => Some(AssetType::Index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AssetType,

    pub price: f64,

    #[serde(rename = "change24h")]
    pub change_24h: f64,

    // Static display fields, never touched by the simulator.
    #[serde(rename = "volume24h")]
    pub volume_24h: String,
    pub description: String,
    pub delay: String,
}
