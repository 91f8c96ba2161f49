use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{models::AlertCondition, services::alerts_service, AppState};

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message })),
    )
        .into_response()
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

// GET /api/alerts
pub async fn get_alerts(State(state): State<AppState>) -> Response {
    Json(alerts_service::list_alerts(&state).await).into_response()
}

#[derive(Deserialize)]
pub struct CreateAlertBody {
    pub symbol: String,

    #[serde(rename = "targetPrice")]
    pub target_price: f64,

    /// "above" | "below"
    #[serde(rename = "type")]
    pub condition: String,
}

// POST /api/alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Json(body): Json<CreateAlertBody>,
) -> Response {
    let symbol = body.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return bad_request("symbol is required");
    }

    if !body.target_price.is_finite() || body.target_price <= 0.0 {
        return bad_request("targetPrice must be a positive number");
    }

    let Some(condition) = AlertCondition::parse(&body.condition) else {
        return bad_request("type must be \"above\" or \"below\"");
    };

    // The symbol is a weak reference: one that matches no asset is
    // accepted and simply never evaluates.
    let alert = alerts_service::create_alert(&state, &symbol, condition, body.target_price).await;

    (StatusCode::CREATED, Json(alert)).into_response()
}

// POST /api/alerts/:id/toggle
pub async fn post_toggle_alert(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match alerts_service::toggle_alert(&state, id).await {
        Some(is_active) => Json(json!({ "id": id, "isActive": is_active })).into_response(),
        None => not_found("no alert with that id"),
    }
}

// POST /api/alerts/:id/delete
pub async fn post_delete_alert(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    if alerts_service::delete_alert(&state, id).await {
        Json(json!({ "deleted": id })).into_response()
    } else {
        not_found("no alert with that id")
    }
}
