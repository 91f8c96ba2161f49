use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::AppState;

// GET /api/notifications
pub async fn get_notifications(State(state): State<AppState>) -> Response {
    Json(state.hub.notifications().await).into_response()
}

// POST /api/notifications/:id/dismiss
pub async fn post_dismiss(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    if state.hub.dismiss_notification(id).await {
        Json(json!({ "dismissed": id })).into_response()
    } else {
        // Already expired or never existed; either way there is nothing
        // left to dismiss.
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no notification with that id" })),
        )
            .into_response()
    }
}
