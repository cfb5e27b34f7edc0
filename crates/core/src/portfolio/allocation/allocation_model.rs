//! Allocation models for portfolio breakdown by asset kind.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetKind;

/// Share of the portfolio held in one asset kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub kind: AssetKind,
    /// Display name of the kind
    pub label: String,
    /// Color for visualization (hex code)
    pub color: String,
    /// Number of assets of this kind
    pub asset_count: usize,
    /// Total value in EGP, whole units
    pub value: Decimal,
    /// Percentage of total portfolio (0-100), one decimal place
    pub percentage: Decimal,
}

/// Complete allocation breakdown, slices sorted by value descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocation {
    pub currency: String,
    pub total_value: Decimal,
    pub slices: Vec<AllocationSlice>,
    pub as_of: DateTime<Utc>,
}
