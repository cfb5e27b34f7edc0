use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tharwa_market_data::Quote;

use super::market_data_constants::*;
use crate::errors::{Result, ValidationError};

/// Spot price of one metal per troy ounce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalPrice {
    pub usd: Decimal,
    pub egp: Decimal,
    /// Absolute USD change since previous close, informational only
    #[serde(default)]
    pub change: Decimal,
}

/// Prices every valuation is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub gold: MetalPrice,
    pub silver: MetalPrice,
    pub usd_to_egp: Decimal,
}

impl PriceSnapshot {
    /// Hard-coded prices used when no live data has ever been obtained.
    pub fn fallback() -> Self {
        Self {
            gold: MetalPrice {
                usd: FALLBACK_GOLD_USD,
                egp: FALLBACK_GOLD_EGP,
                change: Decimal::ZERO,
            },
            silver: MetalPrice {
                usd: FALLBACK_SILVER_USD,
                egp: FALLBACK_SILVER_EGP,
                change: Decimal::ZERO,
            },
            usd_to_egp: FALLBACK_USD_TO_EGP,
        }
    }

    /// Builds a snapshot from USD metal quotes and the USD/EGP rate.
    ///
    /// Fails when a local price does not fit in a `Decimal`.
    pub fn from_quotes(gold: &Quote, silver: &Quote, usd_egp: &Quote) -> Result<Self> {
        let rate = usd_egp.price;
        let metal = |quote: &Quote| -> Result<MetalPrice> {
            let egp = quote.price.checked_mul(rate).ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "{} quote {} at rate {} overflows",
                    quote.source, quote.price, rate
                ))
            })?;
            Ok(MetalPrice {
                usd: quote.price,
                egp,
                change: quote.change.unwrap_or(Decimal::ZERO),
            })
        };

        Ok(Self {
            gold: metal(gold)?,
            silver: metal(silver)?,
            usd_to_egp: rate,
        })
    }

    /// Rejects snapshots with non-positive prices.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("gold.usd", self.gold.usd),
            ("gold.egp", self.gold.egp),
            ("silver.usd", self.silver.usd),
            ("silver.egp", self.silver.egp),
            ("usdToEgp", self.usd_to_egp),
        ];

        for (field, value) in checks {
            if value <= Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "Price '{}' must be positive, got {}",
                    field, value
                ))
                .into());
            }
        }
        Ok(())
    }
}

impl Default for PriceSnapshot {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Where the current snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Fetched successfully on the last refresh
    Live,
    /// Last refresh failed; serving the previous live snapshot
    Stale,
    /// No live data available; serving hard-coded prices
    Fallback,
}

/// The snapshot together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceState {
    #[serde(flatten)]
    pub snapshot: PriceSnapshot,
    pub source: PriceSource,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl PriceState {
    pub fn fallback() -> Self {
        Self {
            snapshot: PriceSnapshot::fallback(),
            source: PriceSource::Fallback,
            fetched_at: None,
        }
    }

    pub fn live(snapshot: PriceSnapshot, fetched_at: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            source: PriceSource::Live,
            fetched_at: Some(fetched_at),
        }
    }

    /// State to serve after a failed refresh: the last live snapshot
    /// marked stale, or the fallback when nothing live was ever seen.
    pub fn degraded(&self) -> Self {
        match self.source {
            PriceSource::Live | PriceSource::Stale => Self {
                source: PriceSource::Stale,
                ..*self
            },
            PriceSource::Fallback => Self::fallback(),
        }
    }
}
