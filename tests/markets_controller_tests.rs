use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tradepulse::{config, routes, AppState};

fn test_state() -> AppState {
    AppState::new(config::Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        tick_interval_ms: 4000,
        notification_ttl_ms: 6000,
        gemini_api_key: String::new(),
        gemini_model: "gemini-2.0-flash".to_string(),
    })
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let app = routes::app(state);
    let req = Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn markets_lists_the_full_seed_universe() {
    let (status, body) = get_json(test_state(), "/api/markets").await;
    assert_eq!(status, StatusCode::OK);

    let assets = body.as_array().unwrap();
    assert_eq!(assets.len(), 11);
    assert!(assets.iter().any(|a| a["symbol"] == "BTCUSD"));
}

#[tokio::test]
async fn markets_filters_by_category() {
    let (status, body) = get_json(test_state(), "/api/markets?kind=crypto").await;
    assert_eq!(status, StatusCode::OK);

    let assets = body.as_array().unwrap();
    assert_eq!(assets.len(), 3);
    assert!(assets.iter().all(|a| a["type"] == "Crypto"));
}

#[tokio::test]
async fn markets_searches_symbol_and_name() {
    let (status, body) = get_json(test_state(), "/api/markets?q=bitcoin").await;
    assert_eq!(status, StatusCode::OK);

    let assets = body.as_array().unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0]["symbol"], "BTCUSD");

    let (_, by_symbol) = get_json(test_state(), "/api/markets?q=eurusd").await;
    assert_eq!(by_symbol.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn markets_sorts_by_price() {
    let (status, body) = get_json(test_state(), "/api/markets?sort=price").await;
    assert_eq!(status, StatusCode::OK);

    // Default direction is descending; IBOV has the largest seed price.
    let assets = body.as_array().unwrap();
    assert_eq!(assets[0]["symbol"], "IBOV");

    let (_, asc) = get_json(test_state(), "/api/markets?sort=price&dir=asc").await;
    assert_eq!(asc.as_array().unwrap()[0]["symbol"], "EURUSD");
}

#[tokio::test]
async fn markets_rejects_unknown_sort_key() {
    let (status, _) = get_json(test_state(), "/api/markets?sort=volume").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn single_market_lookup_is_case_insensitive() {
    let (status, body) = get_json(test_state(), "/api/markets/btcusd").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "BTCUSD");
    assert_eq!(body["name"], "Bitcoin");
}

#[tokio::test]
async fn unknown_symbol_is_404() {
    let (status, body) = get_json(test_state(), "/api/markets/NOPE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("NOPE"));
}

#[tokio::test]
async fn convert_uses_the_simulated_usdbrl_rate() {
    let (status, body) = get_json(test_state(), "/api/convert?amount=100&from=USD&to=BRL").await;
    assert_eq!(status, StatusCode::OK);

    let result = body["result"].as_f64().unwrap();
    assert!((result - 512.0).abs() < 1e-9);
}

#[tokio::test]
async fn convert_rejects_negative_amounts() {
    let (status, _) = get_json(test_state(), "/api/convert?amount=-5&from=USD&to=BRL").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unmatched_route_returns_json_404() {
    let (status, body) = get_json(test_state(), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found");
}
