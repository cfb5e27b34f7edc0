use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fallback gold spot price per troy ounce in USD
pub const FALLBACK_GOLD_USD: Decimal = dec!(5000);
/// Fallback gold spot price per troy ounce in EGP
pub const FALLBACK_GOLD_EGP: Decimal = dec!(250000);

/// Fallback silver spot price per troy ounce in USD
pub const FALLBACK_SILVER_USD: Decimal = dec!(100);
/// Fallback silver spot price per troy ounce in EGP
pub const FALLBACK_SILVER_EGP: Decimal = dec!(5000);

/// Fallback USD to EGP exchange rate
pub const FALLBACK_USD_TO_EGP: Decimal = dec!(49);

/// Default interval between scheduled price refreshes, in seconds
pub const DEFAULT_PRICE_REFRESH_SECS: u64 = 300;
