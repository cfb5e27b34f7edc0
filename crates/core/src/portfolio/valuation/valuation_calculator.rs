use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::{Decimal, MathematicalOps};

use super::valuation_model::{AssetValuation, Metal, ValuationBasis};
use crate::assets::{Asset, InterestType};
use crate::constants::{GRAMS_PER_TROY_OUNCE, MILLIS_PER_MONTH};
use crate::market_data::PriceSnapshot;

/// Whole 30.44-day periods between `start` and `end`, floored.
///
/// Zero when `end` is not after `start`.
pub fn complete_months_elapsed(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let elapsed_ms = (end - start).num_milliseconds();
    if elapsed_ms <= 0 {
        0
    } else {
        elapsed_ms / MILLIS_PER_MONTH
    }
}

/// Value of `asset` in EGP at `as_of`. Accrual ignores any end date.
pub fn value_of(asset: &Asset, prices: &PriceSnapshot, as_of: DateTime<Utc>) -> Decimal {
    value_of_basis(&ValuationBasis::resolve(asset), prices, as_of, false)
}

/// Value of `asset` in EGP at `as_of`, with accrual frozen at the asset's
/// end date when that comes first. Used for forecasting.
pub fn projected_value_of(asset: &Asset, prices: &PriceSnapshot, as_of: DateTime<Utc>) -> Decimal {
    value_of_basis(&ValuationBasis::resolve(asset), prices, as_of, true)
}

/// Sum of [`value_of`] over `assets` at one instant.
pub fn total_value_at(assets: &[Asset], prices: &PriceSnapshot, as_of: DateTime<Utc>) -> Decimal {
    assets
        .iter()
        .map(|asset| value_of(asset, prices, as_of))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of [`value_of`] over `assets` right now.
pub fn total_value(assets: &[Asset], prices: &PriceSnapshot) -> Decimal {
    total_value_at(assets, prices, Utc::now())
}

/// Card-style valuation of one asset.
pub fn asset_valuation(asset: &Asset, prices: &PriceSnapshot, now: DateTime<Utc>) -> AssetValuation {
    let kind = asset.kind();
    let value_at_end = kind.is_time_based().then(|| {
        let end = asset.details.end_date().unwrap_or(now);
        projected_value_of(asset, prices, end)
    });

    AssetValuation {
        asset_id: asset.id,
        kind,
        label: kind.label().to_string(),
        icon: kind.icon().to_string(),
        color: kind.color().to_string(),
        value: value_of(asset, prices, now),
        value_at_end,
        days_held: asset.days_held(now),
        as_of: now,
    }
}

fn value_of_basis(
    basis: &ValuationBasis,
    prices: &PriceSnapshot,
    as_of: DateTime<Utc>,
    stop_at_end: bool,
) -> Decimal {
    let accrual_end = |end: Option<DateTime<Utc>>| match end {
        Some(end) if stop_at_end => end.min(as_of),
        _ => as_of,
    };

    match basis {
        ValuationBasis::Face(amount) => *amount,
        ValuationBasis::Dollars(amount) => amount.saturating_mul(prices.usd_to_egp),
        ValuationBasis::Metal {
            metal,
            grams,
            purity,
        } => {
            let ounce_price = match metal {
                Metal::Gold => prices.gold.egp,
                Metal::Silver => prices.silver.egp,
            };
            (grams.saturating_mul(ounce_price) / GRAMS_PER_TROY_OUNCE).saturating_mul(*purity)
        }
        ValuationBasis::Accrual {
            monthly,
            start,
            end,
        } => {
            let months = complete_months_elapsed(*start, accrual_end(*end));
            monthly.saturating_mul(Decimal::from(months))
        }
        ValuationBasis::Interest {
            principal,
            monthly_rate,
            interest_type,
            start,
            end,
        } => {
            let months = complete_months_elapsed(*start, accrual_end(*end));
            interest_value(*principal, *monthly_rate, *interest_type, months)
        }
        ValuationBasis::Nothing => Decimal::ZERO,
    }
}

fn interest_value(
    principal: Decimal,
    monthly_rate: Decimal,
    interest_type: InterestType,
    months: i64,
) -> Decimal {
    match interest_type {
        InterestType::Simple => principal.saturating_add(
            principal
                .saturating_mul(monthly_rate)
                .saturating_mul(Decimal::from(months)),
        ),
        InterestType::Compound => {
            let growth = Decimal::ONE
                .saturating_add(monthly_rate)
                .checked_powi(months);
            match growth {
                Some(growth) => principal.saturating_mul(growth),
                None => {
                    warn!(
                        "Compound growth overflowed after {} months at {} per month",
                        months, monthly_rate
                    );
                    if principal.is_sign_negative() {
                        Decimal::MIN
                    } else {
                        Decimal::MAX
                    }
                }
            }
        }
    }
}
