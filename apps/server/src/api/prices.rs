use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tharwa_core::market_data::PriceState;

use crate::main_lib::AppState;

async fn get_prices(State(state): State<Arc<AppState>>) -> Json<PriceState> {
    Json(state.price_service.current())
}

/// Fetches fresh prices now. Never fails; a failed fetch reports stale or fallback prices.
async fn refresh_prices(State(state): State<Arc<AppState>>) -> Json<PriceState> {
    Json(state.price_service.refresh().await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/prices/refresh", post(refresh_prices))
}
