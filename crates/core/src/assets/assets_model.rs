//! Asset domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::assets_constants::*;
use crate::errors::{Result, ValidationError};
use crate::utils::time_utils::optional_flexible_instant;

/// Asset identifier. Defaults to the creation time in epoch milliseconds.
pub type AssetId = i64;

/// Kind of asset, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Cash,
    Usd,
    Gold,
    Silver,
    Rent,
    Interest,
    Salary,
    /// A type this version does not know about
    Other,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Cash => CASH_ASSET_TYPE,
            AssetKind::Usd => USD_ASSET_TYPE,
            AssetKind::Gold => GOLD_ASSET_TYPE,
            AssetKind::Silver => SILVER_ASSET_TYPE,
            AssetKind::Rent => RENT_ASSET_TYPE,
            AssetKind::Interest => INTEREST_ASSET_TYPE,
            AssetKind::Salary => SALARY_ASSET_TYPE,
            AssetKind::Other => OTHER_ASSET_TYPE,
        }
    }

    /// Display label. Unknown kinds borrow the cash label.
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Gold => "Gold",
            AssetKind::Silver => "Silver",
            AssetKind::Usd => "US Dollar",
            AssetKind::Rent => "Rent",
            AssetKind::Interest => "Interest",
            AssetKind::Salary => "Salary",
            AssetKind::Cash | AssetKind::Other => "Cash",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AssetKind::Gold => "🪙",
            AssetKind::Silver => "🥈",
            AssetKind::Usd => "💵",
            AssetKind::Rent => "🏠",
            AssetKind::Interest => "📈",
            AssetKind::Salary => "💼",
            AssetKind::Cash | AssetKind::Other => "💰",
        }
    }

    /// Chart color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            AssetKind::Gold => "#fbbf24",
            AssetKind::Silver => "#cbd5e1",
            AssetKind::Usd => "#4ade80",
            AssetKind::Rent => "#60a5fa",
            AssetKind::Interest => "#d8b4fe",
            AssetKind::Salary => "#38bdf8",
            AssetKind::Cash | AssetKind::Other => "#10b981",
        }
    }

    pub fn default_unit(&self) -> &'static str {
        match self {
            AssetKind::Gold | AssetKind::Silver => UNIT_GRAMS,
            AssetKind::Usd => UNIT_USD,
            _ => UNIT_EGP,
        }
    }

    /// Whether the value grows with elapsed months.
    pub fn is_time_based(&self) -> bool {
        matches!(
            self,
            AssetKind::Rent | AssetKind::Interest | AssetKind::Salary
        )
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gold purity in karats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Purity {
    K18,
    K21,
    K22,
    #[default]
    K24,
}

impl Purity {
    pub fn karats(self) -> u8 {
        match self {
            Purity::K18 => 18,
            Purity::K21 => 21,
            Purity::K22 => 22,
            Purity::K24 => PURE_GOLD_KARATS,
        }
    }

    /// Fraction of pure gold, `karats / 24`.
    pub fn fraction(self) -> Decimal {
        Decimal::from(self.karats()) / Decimal::from(PURE_GOLD_KARATS)
    }
}

impl TryFrom<u8> for Purity {
    type Error = String;

    fn try_from(karats: u8) -> std::result::Result<Self, Self::Error> {
        match karats {
            18 => Ok(Purity::K18),
            21 => Ok(Purity::K21),
            22 => Ok(Purity::K22),
            24 => Ok(Purity::K24),
            other => Err(format!(
                "Unsupported gold purity {}K (expected 18, 21, 22 or 24)",
                other
            )),
        }
    }
}

impl From<Purity> for u8 {
    fn from(purity: Purity) -> Self {
        purity.karats()
    }
}

/// Null and absent both mean 24K.
fn purity_or_default<'de, D>(deserializer: D) -> std::result::Result<Purity, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Purity>::deserialize(deserializer)?.unwrap_or_default())
}

/// How interest accrues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    Simple,
    Compound,
}

/// Type-specific payload, tagged by `type` on the wire.
///
/// The derived impls are generated as inherent functions; the trait impls
/// below route unrecognized `type` strings to `Other` before delegating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "lowercase")]
pub enum AssetDetails {
    /// Amount in EGP
    Cash,
    /// Amount in US dollars
    Usd,
    /// Amount in grams
    Gold {
        #[serde(default, deserialize_with = "purity_or_default")]
        purity: Purity,
    },
    /// Amount in grams
    Silver,
    #[serde(rename_all = "camelCase")]
    Rent {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        monthly_rent: Option<Decimal>,
        #[serde(
            default,
            with = "optional_flexible_instant",
            skip_serializing_if = "Option::is_none"
        )]
        start_date: Option<DateTime<Utc>>,
        #[serde(
            default,
            with = "optional_flexible_instant",
            skip_serializing_if = "Option::is_none"
        )]
        end_date: Option<DateTime<Utc>>,
    },
    #[serde(rename_all = "camelCase")]
    Interest {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        principal: Option<Decimal>,
        /// Annual rate in percent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interest_rate: Option<Decimal>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interest_type: Option<InterestType>,
        #[serde(
            default,
            with = "optional_flexible_instant",
            skip_serializing_if = "Option::is_none"
        )]
        start_date: Option<DateTime<Utc>>,
        #[serde(
            default,
            with = "optional_flexible_instant",
            skip_serializing_if = "Option::is_none"
        )]
        end_date: Option<DateTime<Utc>>,
    },
    #[serde(rename_all = "camelCase")]
    Salary {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        monthly_salary: Option<Decimal>,
        #[serde(
            default,
            with = "optional_flexible_instant",
            skip_serializing_if = "Option::is_none"
        )]
        start_date: Option<DateTime<Utc>>,
        #[serde(
            default,
            with = "optional_flexible_instant",
            skip_serializing_if = "Option::is_none"
        )]
        end_date: Option<DateTime<Utc>>,
    },
    /// Any `type` this version does not recognize, kept verbatim so it is
    /// written back unchanged. Valued at `amount`.
    #[serde(skip)]
    Other(String),
}

const KNOWN_ASSET_TYPES: [&str; 7] = [
    CASH_ASSET_TYPE,
    USD_ASSET_TYPE,
    GOLD_ASSET_TYPE,
    SILVER_ASSET_TYPE,
    RENT_ASSET_TYPE,
    INTEREST_ASSET_TYPE,
    SALARY_ASSET_TYPE,
];

impl Serialize for AssetDetails {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AssetDetails::Other(asset_type) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", asset_type)?;
                map.end()
            }
            _ => AssetDetails::serialize(self, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AssetDetails {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some(asset_type) if !KNOWN_ASSET_TYPES.contains(&asset_type) => {
                Ok(AssetDetails::Other(asset_type.to_string()))
            }
            _ => AssetDetails::deserialize(value).map_err(de::Error::custom),
        }
    }
}

impl AssetDetails {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetDetails::Cash => AssetKind::Cash,
            AssetDetails::Usd => AssetKind::Usd,
            AssetDetails::Gold { .. } => AssetKind::Gold,
            AssetDetails::Silver => AssetKind::Silver,
            AssetDetails::Rent { .. } => AssetKind::Rent,
            AssetDetails::Interest { .. } => AssetKind::Interest,
            AssetDetails::Salary { .. } => AssetKind::Salary,
            AssetDetails::Other(_) => AssetKind::Other,
        }
    }

    /// The `type` string as stored, including unrecognized ones.
    pub fn type_name(&self) -> &str {
        match self {
            AssetDetails::Other(asset_type) => asset_type,
            known => known.kind().as_str(),
        }
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        match self {
            AssetDetails::Rent { start_date, .. }
            | AssetDetails::Interest { start_date, .. }
            | AssetDetails::Salary { start_date, .. } => *start_date,
            _ => None,
        }
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        match self {
            AssetDetails::Rent { end_date, .. }
            | AssetDetails::Interest { end_date, .. }
            | AssetDetails::Salary { end_date, .. } => *end_date,
            _ => None,
        }
    }
}

/// A tracked holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub unit: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: AssetDetails,
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        self.details.kind()
    }

    /// Whole days since the asset was recorded, floored and never negative.
    pub fn days_held(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}

/// Input model for creating a new asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    /// Optional explicit id; generated from the creation time when absent
    #[serde(default)]
    pub id: Option<AssetId>,
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub details: AssetDetails,
}

impl NewAsset {
    /// Validates the new asset data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }

    /// Builds the stored asset with the final id and creation instant.
    pub fn into_asset(self, id: AssetId, created_at: DateTime<Utc>) -> Asset {
        let kind = self.details.kind();
        Asset {
            id,
            name: self.name.trim().to_string(),
            amount: self.amount,
            unit: resolve_unit(self.unit, kind),
            created_at,
            details: self.details,
        }
    }
}

/// Input model for replacing an existing asset. `id` and `createdAt` are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub name: String,
    pub amount: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub details: AssetDetails,
}

impl AssetUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }

    /// Applies the update on top of `existing`.
    pub fn apply_to(self, existing: &Asset) -> Asset {
        let kind = self.details.kind();
        Asset {
            id: existing.id,
            name: self.name.trim().to_string(),
            amount: self.amount,
            unit: resolve_unit(self.unit, kind),
            created_at: existing.created_at,
            details: self.details,
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    Ok(())
}

fn resolve_unit(unit: Option<String>, kind: AssetKind) -> String {
    unit.map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| kind.default_unit().to_string())
}
