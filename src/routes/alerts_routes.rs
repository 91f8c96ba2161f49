use crate::{controllers::alerts_controller, AppState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/alerts",
            get(alerts_controller::get_alerts).post(alerts_controller::post_create_alert),
        )
        .route("/api/alerts/:id/toggle", post(alerts_controller::post_toggle_alert))
        .route("/api/alerts/:id/delete", post(alerts_controller::post_delete_alert))
}
