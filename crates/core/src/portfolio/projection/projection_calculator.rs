use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use super::projection_model::{PortfolioProjection, ProjectionPoint};
use crate::assets::Asset;
use crate::constants::BASE_CURRENCY;
use crate::market_data::PriceSnapshot;
use crate::portfolio::valuation::{projected_value_of, total_value_at};
use crate::utils::time_utils::{
    add_months, first_instant_of_month, local_year_month, month_abbreviation,
};

const NOW_LABEL: &str = "Now";

/// Rounds to whole currency units, halves away from zero.
pub fn round_to_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Projects the portfolio over the next `horizon_months` calendar months.
///
/// Point `i` is valued at the first instant of the month `i + 1` months after
/// `now`'s month, with month boundaries taken in `tz`. Prices stay constant;
/// only time-based assets change.
pub fn project(
    assets: &[Asset],
    prices: &PriceSnapshot,
    now: DateTime<Utc>,
    horizon_months: u32,
    tz: Tz,
) -> PortfolioProjection {
    let (year, month) = local_year_month(now, tz);
    let now_value = round_to_whole(total_value_at(assets, prices, now));

    let now_point = ProjectionPoint {
        label: NOW_LABEL.to_string(),
        year,
        month,
        date: now,
        value: now_value,
        change_from_now: Decimal::ZERO,
        change_from_previous: Decimal::ZERO,
    };

    let mut points = Vec::with_capacity(horizon_months as usize);
    let mut previous = now_value;
    for offset in 1..=horizon_months {
        let (target_year, target_month) = add_months(year, month, offset);
        let target = first_instant_of_month(target_year, target_month, tz);

        let value = round_to_whole(
            assets
                .iter()
                .map(|asset| projected_value_of(asset, prices, target))
                .fold(Decimal::ZERO, Decimal::saturating_add),
        );

        points.push(ProjectionPoint {
            label: month_abbreviation(target_month).to_string(),
            year: target_year,
            month: target_month,
            date: target,
            value,
            change_from_now: value.saturating_sub(now_value),
            change_from_previous: value.saturating_sub(previous),
        });
        previous = value;
    }

    let total_growth = previous.saturating_sub(now_value);
    let total_growth_pct = if now_value > Decimal::ZERO {
        total_growth
            .checked_div(now_value)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    debug!(
        "Projected {} assets over {} months: {} -> {} {}",
        assets.len(),
        horizon_months,
        now_value,
        previous,
        BASE_CURRENCY
    );

    PortfolioProjection {
        currency: BASE_CURRENCY.to_string(),
        horizon_months,
        now: now_point,
        points,
        total_growth,
        total_growth_pct,
    }
}
