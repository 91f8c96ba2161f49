//! Library entrypoint for TradePulse.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod models;
pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub hub: services::hub::MarketHub,
    pub gemini: services::gemini::AnalysisClient,
    pub news: services::news::NewsClient,
    pub events_tx: tokio::sync::broadcast::Sender<String>,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        let hub = services::hub::MarketHub::new(settings.notification_ttl_ms);
        let gemini = services::gemini::AnalysisClient::new(
            settings.gemini_api_key.clone(),
            settings.gemini_model.clone(),
        );
        let news = services::news::NewsClient::new(
            settings.gemini_api_key.clone(),
            settings.gemini_model.clone(),
        );
        let (events_tx, _events_rx) = tokio::sync::broadcast::channel::<String>(64);

        Self {
            settings,
            hub,
            gemini,
            news,
            events_tx,
        }
    }
}
