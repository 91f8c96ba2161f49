use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time;

use crate::AppState;

/// Background driver for the simulation: one tick every
/// `tick_interval_ms`, each running simulate + alert evaluation
/// atomically inside the hub. Ticks never overlap; `interval` waits out
/// a slow tick before starting the next.
pub fn spawn_market_loop(state: AppState) {
    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_millis(state.settings.tick_interval_ms));
        let mut rng = StdRng::from_entropy();

        loop {
            interval.tick().await;

            let triggers = state.hub.tick(&mut rng).await;

            let _ = state.events_tx.send("marketUpdated".to_string());

            if !triggers.is_empty() {
                for t in &triggers {
                    tracing::info!(
                        "alert triggered: {} reached {}",
                        t.symbol,
                        t.target_price
                    );
                }
                let _ = state.events_tx.send("alertsUpdated".to_string());
            }
        }
    });
}
