use uuid::Uuid;

use crate::models::{AlertCondition, PriceAlert};
use crate::AppState;

pub async fn list_alerts(state: &AppState) -> Vec<PriceAlert> {
    state.hub.alerts().await
}

pub async fn create_alert(
    state: &AppState,
    symbol: &str,
    condition: AlertCondition,
    target_price: f64,
) -> PriceAlert {
    let alert = state.hub.create_alert(symbol, condition, target_price).await;

    let _ = state.events_tx.send("alertsUpdated".to_string());

    alert
}

pub async fn delete_alert(state: &AppState, id: Uuid) -> bool {
    let removed = state.hub.remove_alert(id).await;

    if removed {
        let _ = state.events_tx.send("alertsUpdated".to_string());
    }

    removed
}

/// Returns the new active state, or None for an unknown id. A false->true
/// flip re-arms the alert (the hub clears its triggered latch).
pub async fn toggle_alert(state: &AppState, id: Uuid) -> Option<bool> {
    let active = state.hub.toggle_alert(id).await;

    if active.is_some() {
        let _ = state.events_tx.send("alertsUpdated".to_string());
    }

    active
}
