use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCondition {
    Above,
    Below,
}

impl AlertCondition {
    pub fn parse(s: &str) -> Option<AlertCondition> {
        match s.to_lowercase().as_str() {
            "above" => Some(AlertCondition::Above),
            "below" => Some(AlertCondition::Below),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: Uuid,

    // Weak reference: the symbol may not match any asset, in which case
    // the alert simply never evaluates.
    pub symbol: String,

    #[serde(rename = "targetPrice")]
    pub target_price: f64,

    #[serde(rename = "type")]
    pub condition: AlertCondition,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    // One-way latch; only a false->true toggle of `is_active` resets it.
    #[serde(rename = "isTriggered")]
    pub is_triggered: bool,

    // Epoch millis, used for newest-first display ordering.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}
