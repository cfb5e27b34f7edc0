use std::sync::Arc;

use crate::config::Config;
use tharwa_core::{
    assets::{AssetService, AssetServiceTrait},
    market_data::{PriceService, PriceServiceTrait},
    portfolio::summary::{PortfolioService, PortfolioServiceTrait},
};
use tharwa_market_data::{
    ExchangeRateApiProvider, GoldApiProvider, MarketDataProvider, ProviderRegistry,
};
use tharwa_storage_sqlite::{assets::AssetRepository, db};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait>,
    pub price_service: Arc<dyn PriceServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires the state against the public price providers.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let providers: Vec<Arc<dyn MarketDataProvider>> = vec![
        Arc::new(GoldApiProvider::new(config.gold_api_key.clone())),
        Arc::new(ExchangeRateApiProvider::new()),
    ];
    build_state_with_providers(config, providers).await
}

pub async fn build_state_with_providers(
    config: &Config,
    providers: Vec<Arc<dyn MarketDataProvider>>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer));
    let asset_service: Arc<dyn AssetServiceTrait> = Arc::new(AssetService::new(asset_repository));

    if config.gold_api_key.is_none() {
        tracing::warn!("TH_GOLD_API_KEY is not set; metal prices will use fallback values");
    }
    let registry = Arc::new(ProviderRegistry::new(providers));
    let price_service: Arc<dyn PriceServiceTrait> = Arc::new(PriceService::new(registry));

    let portfolio_service: Arc<dyn PortfolioServiceTrait> = Arc::new(PortfolioService::new(
        asset_service.clone(),
        price_service.clone(),
        config.timezone,
    ));

    Ok(Arc::new(AppState {
        asset_service,
        price_service,
        portfolio_service,
    }))
}
