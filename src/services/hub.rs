use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{AlertCondition, Asset, Notification, PriceAlert};
use crate::services::{alert_engine, alert_engine::AlertTrigger, market_data, simulator};

struct HubState {
    assets: Vec<Asset>,
    alerts: Vec<PriceAlert>,
    notifications: Vec<Notification>,
}

/// Shared owner of the session's market state: the asset snapshot, the
/// alert list and the toast queue, behind one lock so a tick (simulate,
/// evaluate, enqueue) is atomic with respect to every reader.
#[derive(Clone)]
pub struct MarketHub {
    inner: Arc<RwLock<HubState>>,
    notification_ttl_ms: i64,
}

impl MarketHub {
    pub fn new(notification_ttl_ms: i64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HubState {
                assets: market_data::seed_assets(),
                alerts: Vec::new(),
                notifications: Vec::new(),
            })),
            notification_ttl_ms,
        }
    }

    /// One simulation step: perturb prices, run the alert pass, queue a
    /// toast per transition, drop expired toasts. Returns this tick's
    /// transitions so the caller can broadcast.
    pub async fn tick<R: Rng>(&self, rng: &mut R) -> Vec<AlertTrigger> {
        let mut guard = self.inner.write().await;
        let state = &mut *guard;
        let now = Utc::now().timestamp_millis();

        simulator::apply_tick(&mut state.assets, rng);

        let triggers = alert_engine::evaluate(&mut state.alerts, &state.assets);
        for t in &triggers {
            let message = format!("Alert: {} reached {}", t.symbol, t.target_price);
            state.notifications.push(Notification {
                id: Uuid::new_v4(),
                message,
                expires_at: now + self.notification_ttl_ms,
            });
        }

        state.notifications.retain(|n| n.expires_at > now);

        triggers
    }

    pub async fn snapshot(&self) -> Vec<Asset> {
        self.inner.read().await.assets.clone()
    }

    pub async fn asset(&self, symbol: &str) -> Option<Asset> {
        let sym = symbol.to_uppercase();
        self.inner
            .read()
            .await
            .assets
            .iter()
            .find(|a| a.symbol == sym)
            .cloned()
    }

    /// Alerts sorted newest first, matching the dashboard's list order.
    pub async fn alerts(&self) -> Vec<PriceAlert> {
        let mut alerts = self.inner.read().await.alerts.clone();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        alerts
    }

    pub async fn create_alert(
        &self,
        symbol: &str,
        condition: AlertCondition,
        target_price: f64,
    ) -> PriceAlert {
        let mut state = self.inner.write().await;
        alert_engine::create(&mut state.alerts, symbol, condition, target_price)
    }

    pub async fn remove_alert(&self, id: Uuid) -> bool {
        let mut state = self.inner.write().await;
        alert_engine::remove(&mut state.alerts, id)
    }

    pub async fn toggle_alert(&self, id: Uuid) -> Option<bool> {
        let mut state = self.inner.write().await;
        alert_engine::toggle(&mut state.alerts, id)
    }

    /// Live (unexpired) notifications. Expired entries are pruned here as
    /// well as on tick, so a reader never sees a stale toast.
    pub async fn notifications(&self) -> Vec<Notification> {
        let now = Utc::now().timestamp_millis();
        let mut state = self.inner.write().await;
        state.notifications.retain(|n| n.expires_at > now);
        state.notifications.clone()
    }

    pub async fn dismiss_notification(&self, id: Uuid) -> bool {
        let mut state = self.inner.write().await;
        let before = state.notifications.len();
        state.notifications.retain(|n| n.id != id);
        state.notifications.len() < before
    }
}
