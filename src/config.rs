use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub tick_interval_ms: u64,
    pub notification_ttl_ms: i64,

    pub gemini_api_key: String,
    pub gemini_model: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let tick_interval_ms = env::var("TICK_INTERVAL_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(4000);

    let notification_ttl_ms = env::var("NOTIFICATION_TTL_MS")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(6000);

    let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
    let gemini_model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

    Settings {
        host,
        port,
        tick_interval_ms,
        notification_ttl_ms,
        gemini_api_key,
        gemini_model,
    }
}
