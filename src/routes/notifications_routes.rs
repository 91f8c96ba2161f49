use crate::{controllers::notifications_controller, AppState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/notifications",
            get(notifications_controller::get_notifications),
        )
        .route(
            "/api/notifications/:id/dismiss",
            post(notifications_controller::post_dismiss),
        )
}
