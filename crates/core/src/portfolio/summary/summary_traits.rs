use chrono::{DateTime, Utc};

use super::summary_model::PortfolioSummary;
use crate::assets::AssetId;
use crate::errors::Result;
use crate::portfolio::allocation::PortfolioAllocation;
use crate::portfolio::projection::PortfolioProjection;
use crate::portfolio::valuation::AssetValuation;

/// Trait defining the contract for portfolio read operations.
///
/// Every call values the collection at the single instant `now`.
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_summary(&self, now: DateTime<Utc>) -> Result<PortfolioSummary>;

    fn get_allocation(&self, now: DateTime<Utc>) -> Result<PortfolioAllocation>;

    /// Forecast for the next `horizon_months` calendar months.
    fn get_projection(
        &self,
        now: DateTime<Utc>,
        horizon_months: u32,
    ) -> Result<PortfolioProjection>;

    fn get_asset_valuation(&self, asset_id: AssetId, now: DateTime<Utc>)
        -> Result<AssetValuation>;

    /// Valuations for every asset, in collection order.
    fn get_asset_valuations(&self, now: DateTime<Utc>) -> Result<Vec<AssetValuation>>;
}
