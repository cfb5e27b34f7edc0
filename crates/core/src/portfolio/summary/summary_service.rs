use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;
use std::sync::Arc;

use super::summary_model::PortfolioSummary;
use super::summary_traits::PortfolioServiceTrait;
use crate::assets::{AssetId, AssetServiceTrait};
use crate::constants::{BASE_CURRENCY, DISPLAY_DECIMAL_PRECISION};
use crate::errors::Result;
use crate::market_data::PriceServiceTrait;
use crate::portfolio::allocation::{calculate_allocation, PortfolioAllocation};
use crate::portfolio::projection::{project, PortfolioProjection};
use crate::portfolio::valuation::{asset_valuation, total_value_at, AssetValuation};

/// Service answering portfolio-level questions.
pub struct PortfolioService {
    asset_service: Arc<dyn AssetServiceTrait>,
    price_service: Arc<dyn PriceServiceTrait>,
    timezone: Tz,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance.
    ///
    /// `timezone` decides where calendar months begin for projections.
    pub fn new(
        asset_service: Arc<dyn AssetServiceTrait>,
        price_service: Arc<dyn PriceServiceTrait>,
        timezone: Tz,
    ) -> Self {
        Self {
            asset_service,
            price_service,
            timezone,
        }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_summary(&self, now: DateTime<Utc>) -> Result<PortfolioSummary> {
        let assets = self.asset_service.get_assets()?;
        let prices = self.price_service.current();

        let total = total_value_at(&assets, &prices.snapshot, now);
        debug!(
            "Portfolio total {} {} over {} assets ({:?} prices)",
            total,
            BASE_CURRENCY,
            assets.len(),
            prices.source
        );

        Ok(PortfolioSummary {
            total_value: total.round_dp(DISPLAY_DECIMAL_PRECISION),
            asset_count: assets.len(),
            currency: BASE_CURRENCY.to_string(),
            as_of: now,
            price_source: prices.source,
            prices_fetched_at: prices.fetched_at,
        })
    }

    fn get_allocation(&self, now: DateTime<Utc>) -> Result<PortfolioAllocation> {
        let assets = self.asset_service.get_assets()?;
        let prices = self.price_service.snapshot();
        Ok(calculate_allocation(&assets, &prices, now))
    }

    fn get_projection(
        &self,
        now: DateTime<Utc>,
        horizon_months: u32,
    ) -> Result<PortfolioProjection> {
        let assets = self.asset_service.get_assets()?;
        let prices = self.price_service.snapshot();
        Ok(project(&assets, &prices, now, horizon_months, self.timezone))
    }

    fn get_asset_valuation(
        &self,
        asset_id: AssetId,
        now: DateTime<Utc>,
    ) -> Result<AssetValuation> {
        let asset = self.asset_service.get_asset(asset_id)?;
        let prices = self.price_service.snapshot();
        Ok(asset_valuation(&asset, &prices, now))
    }

    fn get_asset_valuations(&self, now: DateTime<Utc>) -> Result<Vec<AssetValuation>> {
        let prices = self.price_service.snapshot();
        Ok(self
            .asset_service
            .get_assets()?
            .iter()
            .map(|asset| asset_valuation(asset, &prices, now))
            .collect())
    }
}
