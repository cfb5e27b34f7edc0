use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::errors::ValidationError;

/// Default timezone for calendar math.
/// Month boundaries for projections are taken in this zone.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::Africa::Cairo;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short English month name for a 1-based month number.
pub fn month_abbreviation(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("???")
}

/// Adds `months` to a (year, 1-based month) pair, rolling the year over.
pub fn add_months(year: i32, month: u32, months: u32) -> (i32, u32) {
    let zero_based = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(months);
    let year = zero_based.div_euclid(12) as i32;
    let month = zero_based.rem_euclid(12) as u32 + 1;
    (year, month)
}

/// First instant of the given calendar month in `tz`, as UTC.
///
/// When local midnight does not exist (a DST gap), the first valid hour of
/// the day is used instead.
pub fn first_instant_of_month(year: i32, month: u32, tz: Tz) -> DateTime<Utc> {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return DateTime::<Utc>::MAX_UTC;
    };
    (0..24)
        .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
        .find_map(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
}

/// Parses a user-supplied instant.
///
/// Accepts a plain `YYYY-MM-DD` date (UTC midnight), an RFC 3339 timestamp,
/// or a zone-less `YYYY-MM-DDTHH:MM[:SS]` which is read as UTC. Blank input
/// means "not set".
pub fn parse_flexible_instant(raw: &str) -> Result<Option<DateTime<Utc>>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Some(Utc.from_utc_datetime(&naive)));
        }
    }

    Err(ValidationError::InvalidInput(format!(
        "Invalid date '{}'",
        trimmed
    )))
}

/// Renders an instant the way it was most likely entered: a bare date when it
/// falls on UTC midnight, a full RFC 3339 timestamp otherwise.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    if instant.num_seconds_from_midnight() == 0 && instant.nanosecond() == 0 {
        instant.date_naive().format("%Y-%m-%d").to_string()
    } else {
        instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Serde adapter for optional user-entered dates.
///
/// Use with `#[serde(default, with = "optional_flexible_instant")]`.
pub mod optional_flexible_instant {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_instant, parse_flexible_instant};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&format_instant(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => parse_flexible_instant(&s).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Year and 1-based month of `instant` as seen in `tz`.
pub fn local_year_month(instant: DateTime<Utc>, tz: Tz) -> (i32, u32) {
    let local = instant.with_timezone(&tz);
    (local.year(), local.month())
}
