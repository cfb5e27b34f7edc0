use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market_data::PriceSource;

/// Headline numbers for the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Total value in EGP, two decimal places
    pub total_value: Decimal,
    pub asset_count: usize,
    pub currency: String,
    pub as_of: DateTime<Utc>,
    /// Provenance of the prices the total was computed with
    pub price_source: PriceSource,
    pub prices_fetched_at: Option<DateTime<Utc>>,
}
