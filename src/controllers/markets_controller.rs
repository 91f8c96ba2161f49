use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{models::AssetType, services::converter, AppState};

#[derive(Deserialize)]
pub struct MarketsQuery {
    /// Free-text match against symbol or name.
    pub q: Option<String>,
    /// Category slug: crypto, funds, commodities, currencies, indices.
    pub kind: Option<String>,
    /// "price" or "change24h".
    pub sort: Option<String>,
    /// "asc" or "desc" (default desc).
    pub dir: Option<String>,
}

// GET /api/markets
pub async fn get_markets(
    State(state): State<AppState>,
    Query(q): Query<MarketsQuery>,
) -> Response {
    let mut assets = state.hub.snapshot().await;

    if let Some(kind) = q.kind.as_deref().and_then(AssetType::from_slug) {
        assets.retain(|a| a.kind == kind);
    }

    if let Some(needle) = q.q.as_deref().filter(|s| !s.trim().is_empty()) {
        let needle = needle.trim().to_lowercase();
        assets.retain(|a| {
            a.name.to_lowercase().contains(&needle) || a.symbol.to_lowercase().contains(&needle)
        });
    }

    match q.sort.as_deref() {
        Some("price") | Some("change24h") => {
            let by_price = q.sort.as_deref() == Some("price");
            let asc = q.dir.as_deref() == Some("asc");

            assets.sort_by(|a, b| {
                let (va, vb) = if by_price {
                    (a.price, b.price)
                } else {
                    (a.change_24h, b.change_24h)
                };
                let ord = va.total_cmp(&vb);
                if asc { ord } else { ord.reverse() }
            });
        }
        Some(other) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("unknown sort key: {other}") })),
            )
                .into_response();
        }
        None => {}
    }

    Json(assets).into_response()
}

// GET /api/markets/:symbol
pub async fn get_market(State(state): State<AppState>, Path(symbol): Path<String>) -> Response {
    match state.hub.asset(&symbol).await {
        Some(asset) => Json(asset).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown symbol: {}", symbol.to_uppercase()) })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub struct ConvertQuery {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

// GET /api/convert?amount=100&from=USD&to=BRL
pub async fn get_convert(State(state): State<AppState>, Query(q): Query<ConvertQuery>) -> Response {
    if !q.amount.is_finite() || q.amount < 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "amount must be a non-negative number" })),
        )
            .into_response();
    }

    let assets = state.hub.snapshot().await;
    Json(converter::convert(&assets, q.amount, &q.from, &q.to)).into_response()
}
