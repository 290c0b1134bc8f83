//! Loosely-typed media records as delivered by the library API
//!
//! Every field is optional. Conversion into entities applies the defaults:
//! no size means 0 bytes, no flags mean `false`, no last-viewed time means
//! the entry was never opened. Counts (size, pages, duration) accept any
//! non-negative JSON number; fractions are truncated.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::error::RecordError;

/// Raw record fields, named as the API sends them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub path: Option<String>,
    /// Size in bytes
    #[serde(deserialize_with = "lenient_count")]
    pub size: Option<u64>,
    pub update_time: Option<String>,
    pub last_viewed_time: Option<String>,
    pub last_viewed_position: Option<i64>,
    #[serde(alias = "like")]
    pub favorited: Option<bool>,
    #[serde(alias = "archive")]
    pub archived: Option<bool>,
    /// Comic page count
    #[serde(deserialize_with = "lenient_count")]
    pub page: Option<u32>,
    /// Video duration
    #[serde(deserialize_with = "lenient_count")]
    pub duration_in_second: Option<u64>,
}

impl MediaRecord {
    /// Deserialize a record from a JSON value.
    ///
    /// # Errors
    /// Returns `RecordError::Json` if a present field has the wrong type.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RecordError> {
        Ok(Self::deserialize(value)?)
    }

    /// Parse a JSON array of records.
    ///
    /// Elements that are not valid records are logged and skipped; the rest
    /// of the list is still returned.
    ///
    /// # Errors
    /// Returns `RecordError::Json` if the text is not a JSON array.
    pub fn list_from_str(json: &str) -> Result<Vec<Self>, RecordError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| match Self::from_json(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed media record");
                    None
                }
            })
            .collect())
    }

    /// Last-update timestamp, epoch when absent.
    ///
    /// # Errors
    /// Returns `RecordError::InvalidTimestamp` if the value is present but unparseable.
    pub fn updated_at(&self) -> Result<DateTime<Utc>, RecordError> {
        Ok(optional_timestamp("updateTime", self.update_time.as_deref())?
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
    }

    /// Last-viewed timestamp; `None` for an entry that was never opened.
    ///
    /// # Errors
    /// Returns `RecordError::InvalidTimestamp` if the value is present but unparseable.
    pub fn last_viewed_at(&self) -> Result<Option<DateTime<Utc>>, RecordError> {
        optional_timestamp("lastViewedTime", self.last_viewed_time.as_deref())
    }
}

/// Deserialize a non-negative count from any JSON number, truncating fractions.
fn lenient_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        })
        .and_then(|n| T::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative count, got {number}")))
}

fn optional_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, RecordError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| RecordError::InvalidTimestamp {
                field,
                value: raw.to_string(),
            }),
    }
}

/// Accepts RFC 3339 and the naive ISO forms the backend emits (assumed UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
