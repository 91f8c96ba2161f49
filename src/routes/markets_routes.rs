use crate::{controllers::markets_controller, AppState};
use axum::{routing::get, Router};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/markets", get(markets_controller::get_markets))
        .route("/api/markets/:symbol", get(markets_controller::get_market))
        .route("/api/convert", get(markets_controller::get_convert))
}
