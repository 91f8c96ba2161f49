use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

#[derive(Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

// GET /api/analysis/:symbol?lang=en
//
// Upstream failure degrades to a 502 with an error body; the simulator
// and evaluator are untouched either way.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(q): Query<LangQuery>,
) -> Response {
    let Some(asset) = state.hub.asset(&symbol).await else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown symbol: {}", symbol.to_uppercase()) })),
        )
            .into_response();
    };

    let lang = q.lang.unwrap_or_else(|| "pt".to_string());

    match state.gemini.analyze(&asset.symbol, &asset.name, &lang).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::error!("analysis lookup failed for {}: {}", asset.symbol, e);
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e }))).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct NewsQuery {
    pub q: String,
    pub lang: Option<String>,
}

// GET /api/news?q=Bitcoin+day+trading&lang=en
pub async fn get_news(State(state): State<AppState>, Query(query): Query<NewsQuery>) -> Response {
    if query.q.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "q is required" })),
        )
            .into_response();
    }

    let lang = query.lang.unwrap_or_else(|| "pt".to_string());

    match state.news.fetch(query.q.trim(), &lang).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            tracing::error!("news lookup failed: {}", e);
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e }))).into_response()
        }
    }
}
