//! Property-based integration tests for the valuation engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tharwa_core::assets::{Asset, AssetDetails, InterestType, Purity};
use tharwa_core::market_data::{MetalPrice, PriceSnapshot};
use tharwa_core::portfolio::allocation::calculate_allocation;
use tharwa_core::portfolio::projection::project;
use tharwa_core::portfolio::valuation::{
    complete_months_elapsed, projected_value_of, total_value_at, value_of,
};

// =============================================================================
// Generators
// =============================================================================

/// Non-negative decimal with up to four decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strictly positive decimal.
fn arb_positive() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000, 0u32..=2).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Instant between 2000 and roughly 2063.
fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..2_000_000_000).prop_map(|secs| {
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
    })
}

fn arb_prices() -> impl Strategy<Value = PriceSnapshot> {
    (arb_positive(), arb_positive(), arb_positive(), arb_positive(), arb_positive()).prop_map(
        |(gold_usd, gold_egp, silver_usd, silver_egp, rate)| PriceSnapshot {
            gold: MetalPrice {
                usd: gold_usd,
                egp: gold_egp,
                change: Decimal::ZERO,
            },
            silver: MetalPrice {
                usd: silver_usd,
                egp: silver_egp,
                change: Decimal::ZERO,
            },
            usd_to_egp: rate,
        },
    )
}

fn arb_purity() -> impl Strategy<Value = Purity> {
    prop_oneof![
        Just(Purity::K18),
        Just(Purity::K21),
        Just(Purity::K22),
        Just(Purity::K24),
    ]
}

fn arb_details() -> impl Strategy<Value = AssetDetails> {
    prop_oneof![
        Just(AssetDetails::Cash),
        Just(AssetDetails::Usd),
        Just(AssetDetails::Silver),
        arb_purity().prop_map(|purity| AssetDetails::Gold { purity }),
        (
            proptest::option::of(arb_amount()),
            proptest::option::of(arb_instant()),
            proptest::option::of(arb_instant())
        )
            .prop_map(|(monthly_rent, start_date, end_date)| AssetDetails::Rent {
                monthly_rent,
                start_date,
                end_date,
            }),
        (
            proptest::option::of(arb_amount()),
            proptest::option::of(arb_instant()),
            proptest::option::of(arb_instant())
        )
            .prop_map(|(monthly_salary, start_date, end_date)| AssetDetails::Salary {
                monthly_salary,
                start_date,
                end_date,
            }),
        (
            proptest::option::of(arb_amount()),
            proptest::option::of(0i64..30),
            prop_oneof![
                Just(None),
                Just(Some(InterestType::Simple)),
                Just(Some(InterestType::Compound))
            ],
            proptest::option::of(arb_instant())
        )
            .prop_map(
                |(principal, rate, interest_type, start_date)| AssetDetails::Interest {
                    principal,
                    interest_rate: rate.map(Decimal::from),
                    interest_type,
                    start_date,
                    end_date: None,
                }
            ),
    ]
}

fn arb_asset() -> impl Strategy<Value = Asset> {
    (any::<i64>(), arb_amount(), arb_details()).prop_map(|(id, amount, details)| Asset {
        id,
        name: "Generated".to_string(),
        amount,
        unit: String::new(),
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        details,
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Cash is worth its face amount whatever the prices or instant.
    #[test]
    fn prop_cash_ignores_prices_and_time(
        amount in arb_amount(),
        prices in arb_prices(),
        as_of in arb_instant(),
    ) {
        let cash = Asset {
            id: 1,
            name: "Cash".to_string(),
            amount,
            unit: "EGP".to_string(),
            created_at: as_of,
            details: AssetDetails::Cash,
        };
        prop_assert_eq!(value_of(&cash, &prices, as_of), amount);
    }

    /// Dollars are always amount times the exchange rate.
    #[test]
    fn prop_usd_is_amount_times_rate(amount in arb_amount(), prices in arb_prices()) {
        let usd = Asset {
            id: 1,
            name: "USD".to_string(),
            amount,
            unit: "USD".to_string(),
            created_at: Utc::now(),
            details: AssetDetails::Usd,
        };
        prop_assert_eq!(value_of(&usd, &prices, Utc::now()), amount * prices.usd_to_egp);
    }

    /// Elapsed months are never negative and never decrease as time moves on.
    #[test]
    fn prop_months_elapsed_monotonic(
        start in arb_instant(),
        end in arb_instant(),
        extra_secs in 0i64..100_000_000,
    ) {
        let months = complete_months_elapsed(start, end);
        prop_assert!(months >= 0);
        prop_assert!(complete_months_elapsed(start, end + Duration::seconds(extra_secs)) >= months);
    }

    /// Projection never accrues past what current valuation shows for
    /// non-negative monthly amounts.
    #[test]
    fn prop_projection_never_exceeds_open_ended_accrual(
        asset in arb_asset(),
        prices in arb_prices(),
        as_of in arb_instant(),
    ) {
        let current = value_of(&asset, &prices, as_of);
        let projected = projected_value_of(&asset, &prices, as_of);
        prop_assert!(projected <= current, "projected {} > current {}", projected, current);
    }

    /// The total is the sum of the parts.
    #[test]
    fn prop_total_is_sum_of_values(
        assets in proptest::collection::vec(arb_asset(), 0..8),
        prices in arb_prices(),
        as_of in arb_instant(),
    ) {
        let expected: Decimal = assets.iter().map(|a| value_of(a, &prices, as_of)).sum();
        prop_assert_eq!(total_value_at(&assets, &prices, as_of), expected);
    }

    /// A projection has exactly one point per requested month, in order.
    #[test]
    fn prop_projection_shape(
        assets in proptest::collection::vec(arb_asset(), 0..6),
        prices in arb_prices(),
        now in arb_instant(),
        horizon in 0u32..36,
    ) {
        let projection = project(&assets, &prices, now, horizon, chrono_tz::Africa::Cairo);
        prop_assert_eq!(projection.points.len(), horizon as usize);
        for pair in projection.points.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
        if let Some(first) = projection.points.first() {
            prop_assert!(first.date > now);
        }
    }

    /// Allocation percentages add up to roughly 100 when anything is held.
    #[test]
    fn prop_allocation_sums_to_hundred(
        assets in proptest::collection::vec(arb_asset(), 1..10),
        prices in arb_prices(),
        as_of in arb_instant(),
    ) {
        let allocation = calculate_allocation(&assets, &prices, as_of);
        let total: Decimal = allocation.slices.iter().map(|s| s.percentage).sum();
        if total_value_at(&assets, &prices, as_of) > Decimal::ZERO {
            prop_assert!((total - Decimal::ONE_HUNDRED).abs() <= Decimal::new(5, 1));
        } else {
            prop_assert_eq!(total, Decimal::ZERO);
        }
    }
}
