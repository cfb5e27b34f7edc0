use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single spot price reading.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Current price (per troy ounce for metals, per unit for FX)
    pub price: Decimal,

    /// Absolute change since previous close, informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,

    /// Percent change since previous close, informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<Decimal>,

    /// Quote currency
    pub currency: String,

    /// Source of the quote (GOLD_API, EXCHANGE_RATE_API, ...)
    pub source: String,
}

impl Quote {
    /// Create a new quote with minimal required fields
    pub fn new(timestamp: DateTime<Utc>, price: Decimal, currency: String, source: String) -> Self {
        Self {
            timestamp,
            price,
            change: None,
            change_pct: None,
            currency,
            source,
        }
    }

    pub fn with_change(mut self, change: Option<Decimal>, change_pct: Option<Decimal>) -> Self {
        self.change = change;
        self.change_pct = change_pct;
        self
    }
}
