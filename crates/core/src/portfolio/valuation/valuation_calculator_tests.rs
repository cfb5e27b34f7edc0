use super::*;
use crate::assets::{Asset, AssetDetails, AssetKind, InterestType, Purity};
use crate::constants::MILLIS_PER_MONTH;
use crate::market_data::{MetalPrice, PriceSnapshot};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn prices() -> PriceSnapshot {
    PriceSnapshot {
        gold: MetalPrice {
            usd: dec!(40),
            egp: dec!(2000),
            change: dec!(0),
        },
        silver: MetalPrice {
            usd: dec!(1),
            egp: dec!(50),
            change: dec!(0),
        },
        usd_to_egp: dec!(50),
    }
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// An instant a little over `months` complete periods after `start()`.
fn after_months(months: i64) -> DateTime<Utc> {
    start() + Duration::milliseconds(MILLIS_PER_MONTH * months + 60_000)
}

fn asset(amount: Decimal, details: AssetDetails) -> Asset {
    Asset {
        id: 1,
        name: "Test".to_string(),
        amount,
        unit: String::new(),
        created_at: start(),
        details,
    }
}

fn rent(monthly: Option<Decimal>, end: Option<DateTime<Utc>>) -> Asset {
    asset(
        Decimal::ZERO,
        AssetDetails::Rent {
            monthly_rent: monthly,
            start_date: Some(start()),
            end_date: end,
        },
    )
}

fn interest(interest_type: Option<InterestType>, principal: Option<Decimal>) -> Asset {
    asset(
        dec!(777),
        AssetDetails::Interest {
            principal,
            interest_rate: Some(dec!(12)),
            interest_type,
            start_date: Some(start()),
            end_date: None,
        },
    )
}

#[test]
fn test_complete_months_elapsed() {
    let s = start();
    assert_eq!(complete_months_elapsed(s, s), 0);
    assert_eq!(complete_months_elapsed(s, s + Duration::days(60)), 1);
    assert_eq!(complete_months_elapsed(s, s + Duration::days(61)), 2);
    assert_eq!(complete_months_elapsed(s + Duration::days(90), s), 0);
    assert_eq!(
        complete_months_elapsed(s, s + Duration::milliseconds(MILLIS_PER_MONTH - 1)),
        0
    );
    assert_eq!(
        complete_months_elapsed(s, s + Duration::milliseconds(MILLIS_PER_MONTH)),
        1
    );
}

#[test]
fn test_cash_is_face_value() {
    let cash = asset(dec!(1234.5), AssetDetails::Cash);
    assert_eq!(value_of(&cash, &prices(), start()), dec!(1234.5));
    assert_eq!(
        value_of(&cash, &PriceSnapshot::fallback(), after_months(40)),
        dec!(1234.5)
    );
}

#[test]
fn test_negative_cash_is_not_rejected() {
    let debt = asset(dec!(-500), AssetDetails::Cash);
    assert_eq!(value_of(&debt, &prices(), start()), dec!(-500));
}

#[test]
fn test_usd_converts_at_rate() {
    let usd = asset(dec!(100), AssetDetails::Usd);
    assert_eq!(value_of(&usd, &prices(), start()), dec!(5000));

    let mut no_rate = prices();
    no_rate.usd_to_egp = Decimal::ZERO;
    assert_eq!(value_of(&usd, &no_rate, start()), Decimal::ZERO);
}

#[test]
fn test_gold_one_ounce_at_24k() {
    let gold = asset(
        dec!(31.1035),
        AssetDetails::Gold {
            purity: Purity::K24,
        },
    );
    assert_eq!(value_of(&gold, &prices(), start()), dec!(2000));
}

#[test]
fn test_gold_purity_scales_value() {
    let gold = asset(
        dec!(31.1035),
        AssetDetails::Gold {
            purity: Purity::K18,
        },
    );
    assert_eq!(value_of(&gold, &prices(), start()), dec!(1500));

    let mut no_gold = prices();
    no_gold.gold.egp = Decimal::ZERO;
    assert_eq!(value_of(&gold, &no_gold, start()), Decimal::ZERO);
}

#[test]
fn test_silver_has_no_purity() {
    let silver = asset(dec!(311.035), AssetDetails::Silver);
    assert_eq!(value_of(&silver, &prices(), start()), dec!(500));
}

#[test]
fn test_unknown_kind_is_face_value() {
    let other = asset(dec!(42), AssetDetails::Other("crypto".to_string()));
    assert_eq!(value_of(&other, &prices(), start()), dec!(42));
}

#[test]
fn test_rent_accrues_complete_months() {
    let flat = rent(Some(dec!(5000)), None);
    assert_eq!(value_of(&flat, &prices(), after_months(6)), dec!(30000));
    assert_eq!(value_of(&flat, &prices(), start()), Decimal::ZERO);
    assert_eq!(
        value_of(&flat, &prices(), start() - Duration::days(45)),
        Decimal::ZERO
    );
}

#[test]
fn test_rent_without_monthly_or_start_is_zero() {
    assert_eq!(
        value_of(&rent(None, None), &prices(), after_months(6)),
        Decimal::ZERO
    );
    assert_eq!(
        value_of(&rent(Some(Decimal::ZERO), None), &prices(), after_months(6)),
        Decimal::ZERO
    );

    let no_start = asset(
        dec!(100),
        AssetDetails::Rent {
            monthly_rent: Some(dec!(5000)),
            start_date: None,
            end_date: None,
        },
    );
    assert_eq!(value_of(&no_start, &prices(), after_months(6)), Decimal::ZERO);
}

#[test]
fn test_salary_accrues_like_rent() {
    let salary = asset(
        Decimal::ZERO,
        AssetDetails::Salary {
            monthly_salary: Some(dec!(20000)),
            start_date: Some(start()),
            end_date: None,
        },
    );
    assert_eq!(value_of(&salary, &prices(), after_months(3)), dec!(60000));
}

#[test]
fn test_simple_interest() {
    let deposit = interest(Some(InterestType::Simple), Some(dec!(1000)));
    assert_eq!(value_of(&deposit, &prices(), after_months(12)), dec!(1120));
    assert_eq!(value_of(&deposit, &prices(), start()), dec!(1000));
}

#[test]
fn test_compound_interest() {
    let deposit = interest(Some(InterestType::Compound), Some(dec!(1000)));
    let value = value_of(&deposit, &prices(), after_months(12));
    assert_eq!(value.round_dp(2), dec!(1126.83));
}

#[test]
fn test_interest_falls_back_to_amount() {
    let no_type = interest(None, Some(dec!(1000)));
    assert_eq!(value_of(&no_type, &prices(), after_months(12)), dec!(777));

    let no_principal = interest(Some(InterestType::Simple), None);
    assert_eq!(value_of(&no_principal, &prices(), after_months(12)), dec!(777));

    let zero_principal = interest(Some(InterestType::Simple), Some(Decimal::ZERO));
    assert_eq!(
        value_of(&zero_principal, &prices(), after_months(12)),
        dec!(777)
    );
}

#[test]
fn test_value_of_ignores_end_date() {
    let lease = rent(Some(dec!(1000)), Some(after_months(2)));
    assert_eq!(value_of(&lease, &prices(), after_months(10)), dec!(10000));
}

#[test]
fn test_projected_value_stops_at_end_date() {
    let lease = rent(Some(dec!(1000)), Some(after_months(2)));
    assert_eq!(
        projected_value_of(&lease, &prices(), after_months(10)),
        dec!(2000)
    );
    // Before the end date the two agree
    assert_eq!(
        projected_value_of(&lease, &prices(), after_months(1)),
        value_of(&lease, &prices(), after_months(1))
    );
}

#[test]
fn test_end_before_start_projects_zero() {
    let lease = rent(Some(dec!(1000)), Some(start() - Duration::days(90)));
    assert_eq!(
        projected_value_of(&lease, &prices(), after_months(10)),
        Decimal::ZERO
    );
}

#[test]
fn test_projected_equals_value_for_price_based_kinds() {
    let assets = [
        asset(dec!(10), AssetDetails::Cash),
        asset(dec!(10), AssetDetails::Usd),
        asset(
            dec!(10),
            AssetDetails::Gold {
                purity: Purity::K21,
            },
        ),
        asset(dec!(10), AssetDetails::Silver),
    ];
    for a in &assets {
        assert_eq!(
            projected_value_of(a, &prices(), after_months(5)),
            value_of(a, &prices(), after_months(5))
        );
    }
}

#[test]
fn test_total_value_sums_assets() {
    let assets = vec![
        asset(dec!(100), AssetDetails::Cash),
        asset(dec!(2), AssetDetails::Usd),
        rent(Some(dec!(10)), None),
    ];
    assert_eq!(
        total_value_at(&assets, &prices(), after_months(3)),
        dec!(230)
    );
    assert_eq!(total_value_at(&[], &prices(), start()), Decimal::ZERO);
}

#[test]
fn test_total_value_is_idempotent() {
    let assets = vec![
        asset(dec!(100), AssetDetails::Cash),
        asset(dec!(3), AssetDetails::Usd),
        asset(dec!(5), AssetDetails::Silver),
    ];
    let first = total_value(&assets, &prices());
    let second = total_value(&assets, &prices());
    assert_eq!(first, second);
}

#[test]
fn test_asset_valuation_for_lease() {
    let lease = rent(Some(dec!(1000)), Some(after_months(12)));
    let now = after_months(4);
    let valuation = asset_valuation(&lease, &prices(), now);

    assert_eq!(valuation.kind, AssetKind::Rent);
    assert_eq!(valuation.label, "Rent");
    assert_eq!(valuation.value, dec!(4000));
    assert_eq!(valuation.value_at_end, Some(dec!(12000)));
    assert_eq!(valuation.days_held, (now - start()).num_days());
}

#[test]
fn test_asset_valuation_for_metal_has_no_end_value() {
    let gold = asset(
        dec!(31.1035),
        AssetDetails::Gold {
            purity: Purity::K24,
        },
    );
    let valuation = asset_valuation(&gold, &prices(), start());
    assert_eq!(valuation.value, dec!(2000));
    assert!(valuation.value_at_end.is_none());
    assert_eq!(valuation.days_held, 0);
}
