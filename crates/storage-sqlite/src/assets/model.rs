//! Database model for assets.

use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use tharwa_core::assets::{Asset, AssetDetails, AssetKind, InterestType, Purity};

/// One row of the `assets` table. Type-specific columns are null when unused.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: i64,
    pub position: i32,
    pub asset_type: String,
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub purity: Option<i32>,
    /// Monthly rent or monthly salary
    pub monthly_amount: Option<String>,
    pub principal: Option<String>,
    pub interest_rate: Option<String>,
    pub interest_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: String,
}

impl AssetDB {
    pub fn from_asset(asset: &Asset, position: i32) -> Self {
        let mut row = AssetDB {
            id: asset.id,
            position,
            asset_type: asset.details.type_name().to_string(),
            name: asset.name.clone(),
            amount: asset.amount.to_string(),
            unit: asset.unit.clone(),
            purity: None,
            monthly_amount: None,
            principal: None,
            interest_rate: None,
            interest_type: None,
            start_date: asset.details.start_date().map(format_instant),
            end_date: asset.details.end_date().map(format_instant),
            created_at: format_instant(asset.created_at),
        };

        match &asset.details {
            AssetDetails::Gold { purity } => row.purity = Some(i32::from(purity.karats())),
            AssetDetails::Rent { monthly_rent, .. } => {
                row.monthly_amount = monthly_rent.map(|d| d.to_string());
            }
            AssetDetails::Salary { monthly_salary, .. } => {
                row.monthly_amount = monthly_salary.map(|d| d.to_string());
            }
            AssetDetails::Interest {
                principal,
                interest_rate,
                interest_type,
                ..
            } => {
                row.principal = principal.map(|d| d.to_string());
                row.interest_rate = interest_rate.map(|d| d.to_string());
                row.interest_type = interest_type.map(|t| interest_type_str(&t).to_string());
            }
            AssetDetails::Cash
            | AssetDetails::Usd
            | AssetDetails::Silver
            | AssetDetails::Other(_) => {}
        }

        row
    }
}

impl TryFrom<AssetDB> for Asset {
    type Error = StorageError;

    fn try_from(db: AssetDB) -> Result<Self, Self::Error> {
        let start_date = parse_optional_instant(db.start_date.as_deref())?;
        let end_date = parse_optional_instant(db.end_date.as_deref())?;

        let details = match db.asset_type.as_str() {
            t if t == AssetKind::Cash.as_str() => AssetDetails::Cash,
            t if t == AssetKind::Usd.as_str() => AssetDetails::Usd,
            t if t == AssetKind::Silver.as_str() => AssetDetails::Silver,
            t if t == AssetKind::Gold.as_str() => AssetDetails::Gold {
                purity: parse_purity(db.purity)?,
            },
            t if t == AssetKind::Rent.as_str() => AssetDetails::Rent {
                monthly_rent: parse_optional_decimal(db.monthly_amount.as_deref())?,
                start_date,
                end_date,
            },
            t if t == AssetKind::Salary.as_str() => AssetDetails::Salary {
                monthly_salary: parse_optional_decimal(db.monthly_amount.as_deref())?,
                start_date,
                end_date,
            },
            t if t == AssetKind::Interest.as_str() => AssetDetails::Interest {
                principal: parse_optional_decimal(db.principal.as_deref())?,
                interest_rate: parse_optional_decimal(db.interest_rate.as_deref())?,
                interest_type: parse_interest_type(db.interest_type.as_deref())?,
                start_date,
                end_date,
            },
            other => AssetDetails::Other(other.to_string()),
        };

        Ok(Asset {
            id: db.id,
            name: db.name,
            amount: parse_decimal(&db.amount)?,
            unit: db.unit,
            created_at: parse_instant(&db.created_at)?,
            details,
        })
    }
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::CorruptRow(format!("instant '{}': {}", raw, e)))
}

fn parse_optional_instant(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, StorageError> {
    raw.map(parse_instant).transpose()
}

fn parse_decimal(raw: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(raw).map_err(|e| StorageError::CorruptRow(format!("decimal '{}': {}", raw, e)))
}

fn parse_optional_decimal(raw: Option<&str>) -> Result<Option<Decimal>, StorageError> {
    raw.map(parse_decimal).transpose()
}

fn parse_purity(raw: Option<i32>) -> Result<Purity, StorageError> {
    match raw {
        None => Ok(Purity::default()),
        Some(karats) => u8::try_from(karats)
            .map_err(|_| format!("{}K", karats))
            .and_then(Purity::try_from)
            .map_err(|e| StorageError::CorruptRow(format!("purity: {}", e))),
    }
}

fn interest_type_str(interest_type: &InterestType) -> &'static str {
    match interest_type {
        InterestType::Simple => "simple",
        InterestType::Compound => "compound",
    }
}

fn parse_interest_type(raw: Option<&str>) -> Result<Option<InterestType>, StorageError> {
    match raw {
        None => Ok(None),
        Some("simple") => Ok(Some(InterestType::Simple)),
        Some("compound") => Ok(Some(InterestType::Compound)),
        Some(other) => Err(StorageError::CorruptRow(format!(
            "interest type '{}'",
            other
        ))),
    }
}
