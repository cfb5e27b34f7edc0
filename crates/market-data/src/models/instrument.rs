use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO 4217-style code for gold.
pub const GOLD_SYMBOL: &str = "XAU";

/// ISO 4217-style code for silver.
pub const SILVER_SYMBOL: &str = "XAG";

/// Instrument classification used for provider routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    Metal,
    Fx,
}

/// Provider-agnostic description of something that has a spot price.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Instrument {
    /// Precious metal spot price per troy ounce, e.g. `XAU` in `USD`.
    Metal { symbol: String, quote: String },

    /// Exchange rate: units of `to` for one unit of `from`.
    Fx { from: String, to: String },
}

impl Instrument {
    pub fn gold_usd() -> Self {
        Self::Metal {
            symbol: GOLD_SYMBOL.to_string(),
            quote: "USD".to_string(),
        }
    }

    pub fn silver_usd() -> Self {
        Self::Metal {
            symbol: SILVER_SYMBOL.to_string(),
            quote: "USD".to_string(),
        }
    }

    pub fn usd_egp() -> Self {
        Self::Fx {
            from: "USD".to_string(),
            to: "EGP".to_string(),
        }
    }

    /// Returns the routing kind for this instrument.
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::Metal { .. } => InstrumentKind::Metal,
            Self::Fx { .. } => InstrumentKind::Fx,
        }
    }

    /// Currency the resulting quote is denominated in.
    pub fn quote_currency(&self) -> &str {
        match self {
            Self::Metal { quote, .. } => quote,
            Self::Fx { to, .. } => to,
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metal { symbol, quote } => write!(f, "{}/{}", symbol, quote),
            Self::Fx { from, to } => write!(f, "{}/{}", from, to),
        }
    }
}
