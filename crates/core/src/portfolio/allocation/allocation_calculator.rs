use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use super::allocation_model::{AllocationSlice, PortfolioAllocation};
use crate::assets::{Asset, AssetKind};
use crate::constants::BASE_CURRENCY;
use crate::market_data::PriceSnapshot;
use crate::portfolio::projection::round_to_whole;
use crate::portfolio::valuation::value_of;

/// Groups current values by asset kind.
///
/// Percentages are taken from unrounded values and are zero when the total
/// is not positive.
pub fn calculate_allocation(
    assets: &[Asset],
    prices: &PriceSnapshot,
    as_of: DateTime<Utc>,
) -> PortfolioAllocation {
    let mut by_kind: BTreeMap<AssetKind, (usize, Decimal)> = BTreeMap::new();
    for asset in assets {
        let entry = by_kind.entry(asset.kind()).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(value_of(asset, prices, as_of));
    }

    let total = by_kind
        .values()
        .map(|(_, value)| *value)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let mut slices: Vec<AllocationSlice> = by_kind
        .into_iter()
        .map(|(kind, (asset_count, value))| AllocationSlice {
            kind,
            label: kind.label().to_string(),
            color: kind.color().to_string(),
            asset_count,
            value: round_to_whole(value),
            percentage: percentage_of(value, total),
        })
        .collect();

    // Stable sort keeps kind order for equal values
    slices.sort_by(|a, b| b.value.cmp(&a.value));

    PortfolioAllocation {
        currency: BASE_CURRENCY.to_string(),
        total_value: round_to_whole(total),
        slices,
        as_of,
    }
}

fn percentage_of(value: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    value
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}
