use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::services::ServeDir;

use crate::AppState;

pub mod markets_routes;
pub mod alerts_routes;
pub mod notifications_routes;
pub mod insights_routes;
pub mod realtime_routes;

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = markets_routes::add_routes(router);
    let router = alerts_routes::add_routes(router);
    let router = notifications_routes::add_routes(router);
    let router = insights_routes::add_routes(router);
    let router = realtime_routes::add_routes(router);

    router
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .with_state(state)
}
