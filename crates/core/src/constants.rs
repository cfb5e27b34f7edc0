use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Home currency every valuation is expressed in
pub const BASE_CURRENCY: &str = "EGP";

/// Grams in one troy ounce
pub const GRAMS_PER_TROY_OUNCE: Decimal = dec!(31.1035);

/// Milliseconds in the average month used for accrual (30.44 days)
pub const MILLIS_PER_MONTH: i64 = 2_630_016_000;

/// Default projection horizon in months
pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;

/// Upper bound accepted for a projection horizon
pub const MAX_PROJECTION_MONTHS: u32 = 120;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
