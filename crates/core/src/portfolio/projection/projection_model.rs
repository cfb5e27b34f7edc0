use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the forecast, valued in whole EGP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Short month name (`Jan`..`Dec`), or `Now` for the reference point
    pub label: String,
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
    /// Instant the point is valued at
    pub date: DateTime<Utc>,
    pub value: Decimal,
    pub change_from_now: Decimal,
    pub change_from_previous: Decimal,
}

/// Forecast for the next `horizon_months` calendar months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProjection {
    pub currency: String,
    pub horizon_months: u32,
    /// Total value at the moment the projection was built
    pub now: ProjectionPoint,
    /// One point per month, starting with the first day of next month
    pub points: Vec<ProjectionPoint>,
    /// Last point minus the now point
    pub total_growth: Decimal,
    /// Growth as a percentage of the now point, one decimal place
    pub total_growth_pct: Decimal,
}
