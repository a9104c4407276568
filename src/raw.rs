//! Construction from raw content-API fields.
//!
//! The API delivers date parts loosely typed: numbers or strings for the
//! components, explicit booleans for what is actually known. Knowledge
//! comes only from the flags; a component value that is present but not
//! flagged as known is ignored, never inferred. In particular a
//! `millisecondOfDay` without `timeKnown` is dropped rather than treated
//! as a hidden marker.

use serde::Deserialize;

use crate::precision::Precision;
use crate::types::Season;
use crate::{DateError, HistoricDate};

/// A raw field as delivered by the content API: a JSON number or its
/// string form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(i64),
    Text(String),
}

impl RawField {
    fn as_i64(&self) -> Result<i64, DateError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(DateError::EmptyInput);
                }
                trimmed
                    .parse()
                    .map_err(|_| DateError::InvalidFormat(text.clone()))
            }
        }
    }

    /// A small component index (month, day); range checking happens in
    /// the typed constructors.
    fn as_index(&self) -> Result<u8, DateError> {
        let value = self.as_i64()?;
        u8::try_from(value).map_err(|_| DateError::InvalidFormat(value.to_string()))
    }

    /// A season index, accepted numerically or by name.
    fn as_season_index(&self) -> Result<u8, DateError> {
        match self {
            Self::Number(_) => self.as_index(),
            Self::Text(text) => {
                if text.trim().parse::<i64>().is_ok() {
                    return self.as_index();
                }
                Season::from_name(text)
                    .map(Season::index)
                    .ok_or_else(|| DateError::InvalidFormat(text.clone()))
            }
        }
    }
}

impl From<i64> for RawField {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A date as it arrives from the content API, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDate {
    pub year: Option<RawField>,
    pub month: Option<RawField>,
    pub day: Option<RawField>,
    pub season: Option<RawField>,
    pub season_known: bool,
    pub month_known: bool,
    pub day_known: bool,
    pub time_known: bool,
    pub exact: bool,
    pub millisecond_of_day: Option<i64>,
}

/// Normalizes a raw API date into a canonical value and its precision.
///
/// # Errors
/// Returns `DateError` for a missing or malformed year, contradictory
/// precision flags, out-of-range components, or sub-year precision on a
/// year outside the historic regime.
pub fn parse(raw: &RawDate) -> Result<(HistoricDate, Precision), DateError> {
    let year = raw.year.as_ref().ok_or(DateError::EmptyInput)?.as_i64()?;
    let precision = Precision::new(
        raw.season_known,
        raw.month_known,
        raw.day_known,
        raw.time_known,
        raw.exact,
    )?;

    // Only flagged fields are decoded; everything else is ignored
    let month = match (&raw.month, precision.month_known) {
        (Some(field), true) => Some(field.as_index()?),
        _ => None,
    };
    let day = match (&raw.day, precision.day_known) {
        (Some(field), true) => Some(field.as_index()?),
        _ => None,
    };
    let season = match (&raw.season, precision.season_known) {
        (Some(field), true) => Some(field.as_season_index()?),
        _ => None,
    };

    let mut date = HistoricDate::from_parts(year, month, day, season, &precision)?;
    if precision.time_known {
        let millis = raw.millisecond_of_day.ok_or_else(|| {
            DateError::InvalidFormat("time flagged as known but missing".to_owned())
        })?;
        date = date.with_time(millis)?;
    }
    Ok((date, precision))
}
