use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tharwa_core::{
    constants::{DEFAULT_PROJECTION_MONTHS, MAX_PROJECTION_MONTHS},
    portfolio::{
        allocation::PortfolioAllocation, projection::PortfolioProjection,
        summary::PortfolioSummary, valuation::AssetValuation,
    },
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct ProjectionQuery {
    months: Option<u32>,
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSummary>> {
    Ok(Json(state.portfolio_service.get_summary(Utc::now())?))
}

async fn get_allocation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioAllocation>> {
    Ok(Json(state.portfolio_service.get_allocation(Utc::now())?))
}

/// `months` defaults to 12 and is clamped to 1..=120.
async fn get_projection(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
) -> ApiResult<Json<PortfolioProjection>> {
    let Query(query) = query?;
    let months = query
        .months
        .unwrap_or(DEFAULT_PROJECTION_MONTHS)
        .clamp(1, MAX_PROJECTION_MONTHS);
    Ok(Json(
        state.portfolio_service.get_projection(Utc::now(), months)?,
    ))
}

async fn get_valuations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AssetValuation>>> {
    Ok(Json(
        state.portfolio_service.get_asset_valuations(Utc::now())?,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(get_summary))
        .route("/portfolio/allocation", get(get_allocation))
        .route("/portfolio/projection", get(get_projection))
        .route("/portfolio/valuations", get(get_valuations))
}
