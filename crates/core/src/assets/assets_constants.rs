/// Asset type discriminants as they appear on the wire
pub const CASH_ASSET_TYPE: &str = "cash";
pub const USD_ASSET_TYPE: &str = "usd";
pub const GOLD_ASSET_TYPE: &str = "gold";
pub const SILVER_ASSET_TYPE: &str = "silver";
pub const RENT_ASSET_TYPE: &str = "rent";
pub const INTEREST_ASSET_TYPE: &str = "interest";
pub const SALARY_ASSET_TYPE: &str = "salary";
pub const OTHER_ASSET_TYPE: &str = "other";

/// Default display units
pub const UNIT_GRAMS: &str = "grams";
pub const UNIT_USD: &str = "USD";
pub const UNIT_EGP: &str = "EGP";

/// Karat of pure gold
pub const PURE_GOLD_KARATS: u8 = 24;
