use chrono::Utc;
use uuid::Uuid;

use crate::models::{AlertCondition, Asset, PriceAlert};

/// Record of an alert that transitioned to triggered during one
/// evaluation pass. Exactly one is produced per transition.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertTrigger {
    pub alert_id: Uuid,
    pub symbol: String,
    pub target_price: f64,
}

/// Run one evaluation pass over the alert list against the given asset
/// snapshot.
///
/// Inactive alerts and already-triggered alerts are skipped outright, so a
/// second pass over an unchanged snapshot yields nothing. Alerts whose
/// symbol matches no asset are silently ignored. Comparisons are
/// inclusive: Above fires at `price >= target`, Below at `price <= target`.
pub fn evaluate(alerts: &mut [PriceAlert], assets: &[Asset]) -> Vec<AlertTrigger> {
    let mut transitions = Vec::new();

    for alert in alerts.iter_mut() {
        if !alert.is_active || alert.is_triggered {
            continue;
        }

        let Some(asset) = assets.iter().find(|a| a.symbol == alert.symbol) else {
            continue;
        };

        let hit = match alert.condition {
            AlertCondition::Above => asset.price >= alert.target_price,
            AlertCondition::Below => asset.price <= alert.target_price,
        };

        if hit {
            alert.is_triggered = true;
            transitions.push(AlertTrigger {
                alert_id: alert.id,
                symbol: alert.symbol.clone(),
                target_price: alert.target_price,
            });
        }
    }

    transitions
}

/// Append a fresh alert: new id, created now, armed and untriggered.
pub fn create(
    alerts: &mut Vec<PriceAlert>,
    symbol: &str,
    condition: AlertCondition,
    target_price: f64,
) -> PriceAlert {
    let alert = PriceAlert {
        id: Uuid::new_v4(),
        symbol: symbol.to_uppercase(),
        target_price,
        condition,
        is_active: true,
        is_triggered: false,
        created_at: Utc::now().timestamp_millis(),
    };

    alerts.push(alert.clone());
    alert
}

/// Delete by id. Returns false when no such alert existed.
pub fn remove(alerts: &mut Vec<PriceAlert>, id: Uuid) -> bool {
    let before = alerts.len();
    alerts.retain(|a| a.id != id);
    alerts.len() < before
}

/// Flip `is_active`. Re-enabling is the only re-arm path: a false->true
/// toggle also clears the triggered latch. Returns the new active state.
pub fn toggle(alerts: &mut [PriceAlert], id: Uuid) -> Option<bool> {
    let alert = alerts.iter_mut().find(|a| a.id == id)?;

    alert.is_active = !alert.is_active;
    if alert.is_active {
        alert.is_triggered = false;
    }

    Some(alert.is_active)
}
