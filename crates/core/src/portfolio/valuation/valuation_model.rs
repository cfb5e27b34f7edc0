use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, AssetDetails, AssetId, AssetKind, InterestType};

/// Metal priced per troy ounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metal {
    Gold,
    Silver,
}

/// Everything needed to value an asset, with optional fields already
/// defaulted. Built once per asset; the arithmetic only looks at this.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuationBasis {
    /// Worth its face amount in EGP
    Face(Decimal),
    /// US dollars converted at the snapshot rate
    Dollars(Decimal),
    /// Grams of metal at a purity fraction (1 for silver)
    Metal {
        metal: Metal,
        grams: Decimal,
        purity: Decimal,
    },
    /// A fixed amount earned per complete month
    Accrual {
        monthly: Decimal,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    },
    /// Principal growing at a monthly rate
    Interest {
        principal: Decimal,
        monthly_rate: Decimal,
        interest_type: InterestType,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    },
    /// A time-based asset without enough data to accrue anything
    Nothing,
}

impl ValuationBasis {
    pub fn resolve(asset: &Asset) -> Self {
        match &asset.details {
            AssetDetails::Cash | AssetDetails::Other(_) => Self::Face(asset.amount),
            AssetDetails::Usd => Self::Dollars(asset.amount),
            AssetDetails::Gold { purity } => Self::Metal {
                metal: Metal::Gold,
                grams: asset.amount,
                purity: purity.fraction(),
            },
            AssetDetails::Silver => Self::Metal {
                metal: Metal::Silver,
                grams: asset.amount,
                purity: Decimal::ONE,
            },
            AssetDetails::Rent {
                monthly_rent: monthly,
                start_date,
                end_date,
            }
            | AssetDetails::Salary {
                monthly_salary: monthly,
                start_date,
                end_date,
            } => match (non_zero(*monthly), *start_date) {
                (Some(monthly), Some(start)) => Self::Accrual {
                    monthly,
                    start,
                    end: *end_date,
                },
                _ => Self::Nothing,
            },
            AssetDetails::Interest {
                principal,
                interest_rate,
                interest_type,
                start_date,
                end_date,
            } => match (
                non_zero(*principal),
                non_zero(*interest_rate),
                *interest_type,
                *start_date,
            ) {
                (Some(principal), Some(rate), Some(interest_type), Some(start)) => {
                    Self::Interest {
                        principal,
                        monthly_rate: rate / Decimal::ONE_HUNDRED / Decimal::from(12),
                        interest_type,
                        start,
                        end: *end_date,
                    }
                }
                _ => Self::Face(asset.amount),
            },
        }
    }
}

/// Zero counts as "not provided".
fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Per-asset view for cards and detail screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    pub asset_id: AssetId,
    pub kind: AssetKind,
    pub label: String,
    pub icon: String,
    pub color: String,
    /// Value now, in EGP
    pub value: Decimal,
    /// Value once the accrual period ends (or now, when open-ended).
    /// Only set for time-based kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_at_end: Option<Decimal>,
    pub days_held: i64,
    pub as_of: DateTime<Utc>,
}
