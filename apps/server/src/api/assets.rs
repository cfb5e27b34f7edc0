use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tharwa_core::{
    assets::{Asset, AssetId, AssetUpdate, NewAsset},
    portfolio::valuation::AssetValuation,
};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    Ok(Json(state.asset_service.get_assets()?))
}

async fn create_asset(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewAsset>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let Json(new_asset) = payload?;
    let created = state.asset_service.create_asset(new_asset).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replaces the whole collection (backup import).
async fn replace_assets(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<Asset>>, JsonRejection>,
) -> ApiResult<Json<Vec<Asset>>> {
    let Json(assets) = payload?;
    Ok(Json(state.asset_service.replace_assets(assets).await?))
}

async fn get_asset(
    State(state): State<Arc<AppState>>,
    id: Result<Path<AssetId>, PathRejection>,
) -> ApiResult<Json<Asset>> {
    let Path(id) = id?;
    Ok(Json(state.asset_service.get_asset(id)?))
}

async fn update_asset(
    State(state): State<Arc<AppState>>,
    id: Result<Path<AssetId>, PathRejection>,
    payload: Result<Json<AssetUpdate>, JsonRejection>,
) -> ApiResult<Json<Asset>> {
    let Path(id) = id?;
    let Json(update) = payload?;
    Ok(Json(state.asset_service.update_asset(id, update).await?))
}

async fn delete_asset(
    State(state): State<Arc<AppState>>,
    id: Result<Path<AssetId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.asset_service.delete_asset(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_asset_valuation(
    State(state): State<Arc<AppState>>,
    id: Result<Path<AssetId>, PathRejection>,
) -> ApiResult<Json<AssetValuation>> {
    let Path(id) = id?;
    let valuation = state
        .portfolio_service
        .get_asset_valuation(id, Utc::now())?;
    Ok(Json(valuation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/assets",
            get(list_assets).post(create_asset).put(replace_assets),
        )
        .route(
            "/assets/{id}",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
        .route("/assets/{id}/valuation", get(get_asset_valuation))
}
