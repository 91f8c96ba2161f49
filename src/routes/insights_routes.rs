use crate::{controllers::insights_controller, AppState};
use axum::{routing::get, Router};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/analysis/:symbol", get(insights_controller::get_analysis))
        .route("/api/news", get(insights_controller::get_news))
}
