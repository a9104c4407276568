//! Normalization, ordering and display of historic dates.
//!
//! A [`HistoricDate`] represents a date with varying levels of precision
//! (year only, year+season, year+month, or a full day, optionally with a
//! time of day) across the whole usable timeline: ordinary CE/BCE years,
//! deep prehistory and geological/cosmological magnitudes. Years use
//! astronomical numbering (1 BCE is year 0, 2 BCE is year -1) so era
//! conversion happens exactly once, at display time.
//!
//! Values are immutable, totally ordered and cheap to copy; the display
//! side lives in [`format`] and is a pure function over a date and its
//! [`Precision`].

pub mod format;

mod consts;
mod precision;
mod prelude;
mod range;
mod raw;
mod regime;
mod types;

pub use consts::*;
pub use precision::{Precision, PrecisionError};
pub use range::{HistoricDateRange, RangeError};
pub use raw::{RawDate, RawField, parse};
pub use regime::{RegimeThresholds, YearRegime, classify, classify_in};
pub use types::{Day, Month, MsOfDay, Season, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use types::days_in_month;

/// A date with varying levels of precision, normalized onto the
/// astronomical year line. Sub-year precision is carried structurally:
/// a value holds either a season or a month (never both), a day requires
/// a month, and a time of day requires a full date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoricDate {
    /// Full date with day, month, and year; optionally a time of day
    Day {
        year: types::Year,
        month: types::Month,
        day: types::Day,
        time: Option<types::MsOfDay>,
    },
    /// Month and year only
    Month {
        year: types::Year,
        month: types::Month,
    },
    /// Season and year only
    Season {
        year: types::Year,
        season: types::Season,
    },
    /// Year only
    Year { year: types::Year },
}

/// Error type for date construction and parsing. Invalid input is a
/// permanent failure; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (magnitude must be <= {})", "_0", YEAR_MAGNITUDE_LIMIT)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },
    #[display(fmt = "Invalid season index: {} (must be 1-{})", "_0", MAX_SEASON)]
    InvalidSeason(u8),
    #[display(fmt = "Invalid millisecond-of-day offset: {_0}")]
    InvalidTime(i64),
    #[display(fmt = "Calendar fields are not valid for {regime} year {year}")]
    PrecisionMismatch { year: i64, regime: YearRegime },
    #[display(fmt = "{_0}")]
    Precision(PrecisionError),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl From<PrecisionError> for DateError {
    fn from(err: PrecisionError) -> Self {
        Self::Precision(err)
    }
}

/// Flat field tuple exchanged with the content API: a year plus optional
/// month/day/season indices. Presence implies the component is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    pub year: i64,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub season: Option<u8>,
}

impl HistoricDate {
    /// Creates a year-only date
    pub fn new_year(year: i64) -> Result<Self, DateError> {
        Ok(Self::Year {
            year: types::Year::new(year)?,
        })
    }

    /// Creates a season-year date. Only historic-regime years carry
    /// sub-year precision.
    pub fn new_season(year: i64, season: types::Season) -> Result<Self, DateError> {
        let year = Self::historic_year(year)?;
        Ok(Self::Season { year, season })
    }

    /// Creates a month-year date. Only historic-regime years carry
    /// sub-year precision.
    pub fn new_month(year: i64, month: u8) -> Result<Self, DateError> {
        let year = Self::historic_year(year)?;
        let month = types::Month::new(month)?;
        Ok(Self::Month { year, month })
    }

    /// Creates a full date. Only historic-regime years carry sub-year
    /// precision; day validation uses proleptic-Gregorian leap rules.
    pub fn new_day(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Self::historic_year(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self::Day {
            year: year_t,
            month: month_t,
            day: day_t,
            time: None,
        })
    }

    /// Attaches a time-of-day offset; only a full date can carry one.
    pub fn with_time(self, millisecond_of_day: i64) -> Result<Self, DateError> {
        match self {
            Self::Day {
                year, month, day, ..
            } => Ok(Self::Day {
                year,
                month,
                day,
                time: Some(types::MsOfDay::new(millisecond_of_day)?),
            }),
            Self::Month { .. } | Self::Season { .. } | Self::Year { .. } => {
                Err(PrecisionError::TimeWithoutDay.into())
            }
        }
    }

    /// Builds a date from loose parts and a validated precision. Fields
    /// the precision does not claim as known are ignored, never inferred;
    /// fields it does claim must be present and valid.
    pub fn from_parts(
        year: i64,
        month: Option<u8>,
        day: Option<u8>,
        season: Option<u8>,
        precision: &Precision,
    ) -> Result<Self, DateError> {
        let year_t = types::Year::new(year)?;
        if precision.has_sub_year() {
            let regime = regime::classify(year);
            if regime != YearRegime::Historic {
                return Err(DateError::PrecisionMismatch { year, regime });
            }
        }

        if precision.season_known {
            let season = types::Season::from_index(season.unwrap_or(0))?;
            return Ok(Self::Season {
                year: year_t,
                season,
            });
        }
        if precision.month_known {
            let month = month.ok_or_else(|| {
                DateError::InvalidFormat("month flagged as known but missing".to_owned())
            })?;
            let month_t = types::Month::new(month)?;
            if precision.day_known {
                let day = day.ok_or_else(|| {
                    DateError::InvalidFormat("day flagged as known but missing".to_owned())
                })?;
                let day_t = types::Day::new(day, year, month)?;
                return Ok(Self::Day {
                    year: year_t,
                    month: month_t,
                    day: day_t,
                    time: None,
                });
            }
            return Ok(Self::Month {
                year: year_t,
                month: month_t,
            });
        }
        Ok(Self::Year { year: year_t })
    }

    fn historic_year(year: i64) -> Result<types::Year, DateError> {
        let year_t = types::Year::new(year)?;
        let regime = regime::classify(year);
        if regime != YearRegime::Historic {
            return Err(DateError::PrecisionMismatch { year, regime });
        }
        Ok(year_t)
    }

    /// Returns the astronomical year (always present)
    pub fn year(&self) -> i64 {
        self.year_typed().get()
    }

    /// Returns the Year type (always present)
    pub fn year_typed(&self) -> types::Year {
        match self {
            Self::Day { year, .. }
            | Self::Month { year, .. }
            | Self::Season { year, .. }
            | Self::Year { year } => *year,
        }
    }

    /// Returns the month component if present (as u8 for convenience)
    pub fn month(&self) -> Option<u8> {
        self.month_typed().map(types::Month::get)
    }

    /// Returns the Month type if present
    pub fn month_typed(&self) -> Option<types::Month> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(*month),
            Self::Season { .. } | Self::Year { .. } => None,
        }
    }

    /// Returns the day component if present (as u8 for convenience)
    pub fn day(&self) -> Option<u8> {
        self.day_typed().map(types::Day::get)
    }

    /// Returns the Day type if present
    pub fn day_typed(&self) -> Option<types::Day> {
        match self {
            Self::Day { day, .. } => Some(*day),
            Self::Month { .. } | Self::Season { .. } | Self::Year { .. } => None,
        }
    }

    /// Returns the season if present
    pub fn season(&self) -> Option<types::Season> {
        match self {
            Self::Season { season, .. } => Some(*season),
            Self::Day { .. } | Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Returns the time-of-day offset if present
    pub fn time(&self) -> Option<types::MsOfDay> {
        match self {
            Self::Day { time, .. } => *time,
            Self::Month { .. } | Self::Season { .. } | Self::Year { .. } => None,
        }
    }

    /// Display regime of this date's year, under the default thresholds
    pub fn regime(&self) -> YearRegime {
        regime::classify(self.year())
    }

    /// Display regime under explicit thresholds
    pub fn regime_in(&self, thresholds: &RegimeThresholds) -> YearRegime {
        regime::classify_in(self.year(), thresholds)
    }

    /// Years before the default reference present. Negative for years
    /// after it.
    pub fn years_before_present(&self) -> i64 {
        self.years_before_present_from(REFERENCE_YEAR)
    }

    /// Years before an explicit reference year
    pub fn years_before_present_from(&self, reference_year: i64) -> i64 {
        reference_year - self.year()
    }

    /// Displayed-calendar BCE year (year 0 is 1 BCE); `None` for CE years
    pub fn bce_year(&self) -> Option<i64> {
        self.year_typed().bce()
    }

    /// Whether this date displays as a years-before-present count
    pub fn uses_ybp(&self) -> bool {
        self.regime() == YearRegime::DeepPrehistoric
    }

    /// Human-readable rendering with the precision the value itself
    /// carries. See [`format::format`] for explicit control.
    pub fn to_display_string(&self) -> String {
        format::format(self, &Precision::of(self))
    }

    /// Converts to flat content-API fields: (year, month, day, season)
    pub fn to_fields(&self) -> DateFields {
        DateFields {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            season: self.season().map(types::Season::index),
        }
    }

    /// Creates from flat content-API fields, deriving precision from
    /// which fields are present.
    pub fn from_fields(fields: DateFields) -> Result<Self, DateError> {
        let precision = Precision::new(
            fields.season.is_some(),
            fields.month.is_some(),
            fields.day.is_some(),
            false,
            false,
        )?;
        Self::from_parts(
            fields.year,
            fields.month,
            fields.day,
            fields.season,
            &precision,
        )
    }
}

impl HistoricDate {
    /// Earliest concrete (year, month, day) represented by this value.
    pub fn lower_bound(&self) -> (i64, u8, u8) {
        match *self {
            Self::Day {
                year, month, day, ..
            } => (year.get(), month.get(), day.get()),
            Self::Month { year, month } => (year.get(), month.get(), MIN_DAY),
            Self::Season { year, season } => (year.get(), season.first_month(), MIN_DAY),
            Self::Year { year } => (year.get(), JANUARY, MIN_DAY),
        }
    }

    /// Latest concrete (year, month, day) represented by this value (inclusive).
    pub fn upper_bound_inclusive(&self) -> (i64, u8, u8) {
        match *self {
            Self::Day {
                year, month, day, ..
            } => (year.get(), month.get(), day.get()),
            Self::Month { year, month } => (
                year.get(),
                month.get(),
                days_in_month(year.get(), month.get()),
            ),
            Self::Season { year, season } => (
                year.get(),
                season.last_month(),
                days_in_month(year.get(), season.last_month()),
            ),
            Self::Year { year } => (year.get(), DECEMBER, DAYS_IN_MONTH[DECEMBER as usize]),
        }
    }

    /// Rank of the sub-year component on a common scale: month m sits at
    /// 10m, a season just past its last contained month, year-only at 0.
    /// Any specific month therefore sorts before the season containing it.
    #[inline]
    fn sub_year_rank(&self) -> u8 {
        match *self {
            Self::Day { month, .. } | Self::Month { month, .. } => 10 * month.get(),
            Self::Season { season, .. } => 10 * season.last_month() + 5,
            Self::Year { .. } => 0,
        }
    }

    /// Lexicographic sort key; unknown day/time sort as start-of-period.
    #[inline]
    fn sort_key(&self) -> (i64, u8, u8, u32) {
        let day = match *self {
            Self::Day { day, .. } => day.get(),
            _ => 0,
        };
        let ms = match *self {
            Self::Day { time: Some(t), .. } => t.get(),
            _ => 0,
        };
        (self.year(), self.sub_year_rank(), day, ms)
    }

    /// Rank used for ordering ties on the same sort key:
    /// less precise comes first.
    #[inline]
    fn precision_rank(&self) -> u8 {
        match *self {
            Self::Year { .. } => 0,
            Self::Season { .. } => 1,
            Self::Month { .. } => 2,
            Self::Day { time: None, .. } => 3,
            Self::Day { time: Some(_), .. } => 4,
        }
    }
}

impl PartialOrd for HistoricDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HistoricDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sort_key().cmp(&other.sort_key()) {
            Ordering::Equal => self.precision_rank().cmp(&other.precision_rank()),
            ord => ord,
        }
    }
}

// --- canonical compact string form ---

fn write_year_segment(f: &mut fmt::Formatter<'_>, year: types::Year) -> fmt::Result {
    let y = year.get();
    if y < 0 {
        write!(f, "-{:04}", -y)
    } else {
        write!(f, "{y:04}")
    }
}

impl fmt::Display for HistoricDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year_segment(f, self.year_typed())?;
        match self {
            Self::Day {
                month, day, time, ..
            } => {
                write!(f, "{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}", month.get(), day.get())?;
                if let Some(time) = time {
                    write!(f, "{TIME_SEPARATOR}{time}")?;
                }
                Ok(())
            }
            Self::Month { month, .. } => write!(f, "{DATE_SEPARATOR}{:02}", month.get()),
            Self::Season { season, .. } => {
                write!(f, "{DATE_SEPARATOR}{}", season.name().to_ascii_lowercase())
            }
            Self::Year { .. } => Ok(()),
        }
    }
}

impl FromStr for HistoricDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Season names can contain the time separator ("WINTER"), so only
        // treat the suffix as a time when it looks like one
        let (date_part, time_part) = match trimmed.split_once(TIME_SEPARATOR) {
            Some((date, time)) if time.contains(':') => (date, Some(time)),
            _ => (trimmed, None),
        };

        // A leading '-' is the year sign, not a separator
        let (sign, unsigned) = match date_part.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (-1i64, rest),
            None => (1i64, date_part),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        let year = sign * Self::parse_year_token(parts[0])?;

        let date = match parts.len() {
            1 => Self::new_year(year)?,
            2 => Self::parse_sub_year(year, parts[1])?,
            3 => {
                let month = Self::parse_u8_token(parts[1])?;
                let day = Self::parse_u8_token(parts[2])?;
                Self::new_day(year, month, day)?
            }
            _ => {
                return Err(DateError::InvalidFormat(format!(
                    "Too many {} separators: expected 0-2, found {}",
                    DATE_SEPARATOR,
                    parts.len() - 1
                )));
            }
        };

        match time_part {
            Some(time) => date.with_time(Self::parse_time_token(time)?),
            None => Ok(date),
        }
    }
}

impl HistoricDate {
    fn parse_year_token(s: &str) -> Result<i64, DateError> {
        if s.is_empty() {
            return Err(DateError::EmptyInput);
        }
        s.parse::<i64>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8_token(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Second segment of a two-part form: a numeric month or a season name
    fn parse_sub_year(year: i64, token: &str) -> Result<Self, DateError> {
        if token.chars().all(|c| c.is_ascii_digit()) {
            return Self::new_month(year, Self::parse_u8_token(token)?);
        }
        match types::Season::from_name(token) {
            Some(season) => Self::new_season(year, season),
            None => Err(DateError::InvalidFormat(token.to_owned())),
        }
    }

    /// Parses `hh:mm:ss` or `hh:mm:ss.mmm` into a millisecond offset
    fn parse_time_token(s: &str) -> Result<i64, DateError> {
        let bad = || DateError::InvalidFormat(s.to_owned());

        let (clock, millis) = match s.split_once('.') {
            Some((clock, frac)) => {
                if frac.len() != 3 || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(bad());
                }
                (clock, frac.parse::<i64>().map_err(|_| bad())?)
            }
            None => (s, 0),
        };

        let fields: Vec<&str> = clock.split(':').collect();
        if fields.len() != 3 {
            return Err(bad());
        }
        let hour = fields[0].parse::<i64>().map_err(|_| bad())?;
        let minute = fields[1].parse::<i64>().map_err(|_| bad())?;
        let second = fields[2].parse::<i64>().map_err(|_| bad())?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(bad());
        }

        Ok(((hour * 60 + minute) * 60 + second) * 1_000 + millis)
    }
}

impl TryFrom<DateFields> for HistoricDate {
    type Error = DateError;

    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl serde::Serialize for HistoricDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HistoricDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hd_day, hd_day_at, hd_month, hd_season, hd_year};

    #[test]
    fn test_new_day() {
        let date = HistoricDate::new_day(1950, 3, 15).unwrap();
        assert_eq!(date.year(), 1950);
        assert_eq!(date.month(), Some(3));
        assert_eq!(date.day(), Some(15));
        assert_eq!(date.season(), None);
        assert_eq!(date.time(), None);
    }

    #[test]
    fn test_new_day_bce_leap() {
        // Astronomical year 0 is a leap year
        assert!(HistoricDate::new_day(0, 2, 29).is_ok());
        // Astronomical year -1 is not
        assert!(matches!(
            HistoricDate::new_day(-1, 2, 29),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_new_season() {
        let date = HistoricDate::new_season(-500, Season::Winter).unwrap();
        assert_eq!(date.year(), -500);
        assert_eq!(date.season(), Some(Season::Winter));
        assert_eq!(date.month(), None);
    }

    #[test]
    fn test_sub_year_precision_rejected_outside_historic() {
        // Deep prehistory cannot carry calendar fields
        let result = HistoricDate::new_month(-30_050, 3);
        assert!(matches!(
            result,
            Err(DateError::PrecisionMismatch {
                regime: YearRegime::DeepPrehistoric,
                ..
            })
        ));

        // Neither can cosmological years
        let result = HistoricDate::new_day(-13_800_000_000, 1, 1);
        assert!(matches!(
            result,
            Err(DateError::PrecisionMismatch {
                regime: YearRegime::Cosmological,
                ..
            })
        ));

        // But a bare year is fine in any regime
        assert!(HistoricDate::new_year(-13_800_000_000).is_ok());
    }

    #[test]
    fn test_with_time() {
        let date = HistoricDate::new_day(1950, 3, 15)
            .unwrap()
            .with_time(52_215_250)
            .unwrap();
        assert_eq!(date.time().map(|t| t.get()), Some(52_215_250));

        let result = HistoricDate::new_month(1950, 3).unwrap().with_time(0);
        assert!(matches!(
            result,
            Err(DateError::Precision(PrecisionError::TimeWithoutDay))
        ));
    }

    #[test]
    fn test_from_parts_respects_flags() {
        // Fields not claimed by the precision are ignored, not inferred
        let precision = Precision::new(false, true, false, false, false).unwrap();
        let date =
            HistoricDate::from_parts(1950, Some(3), Some(15), None, &precision).unwrap();
        assert_eq!(date.day(), None);
        assert_eq!(date.month(), Some(3));
    }

    #[test]
    fn test_from_parts_missing_claimed_field() {
        let precision = Precision::new(false, true, true, false, false).unwrap();
        let result = HistoricDate::from_parts(1950, Some(3), None, None, &precision);
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_from_parts_season_sentinel() {
        // Season flagged known but index 0 (the "none" sentinel) is invalid
        let precision = Precision::new(true, false, false, false, false).unwrap();
        let result = HistoricDate::from_parts(1950, None, None, Some(0), &precision);
        assert!(matches!(result, Err(DateError::InvalidSeason(0))));

        let result = HistoricDate::from_parts(1950, None, None, None, &precision);
        assert!(matches!(result, Err(DateError::InvalidSeason(0))));
    }

    #[test]
    fn test_from_parts_precision_mismatch() {
        let precision = Precision::new(false, true, false, false, false).unwrap();
        let result = HistoricDate::from_parts(-30_050, Some(3), None, None, &precision);
        assert!(matches!(result, Err(DateError::PrecisionMismatch { .. })));

        // Year-only precision is fine for the same year
        let result =
            HistoricDate::from_parts(-30_050, None, None, None, &Precision::year_only());
        assert!(result.is_ok());
    }

    #[test]
    fn test_to_fields_and_from_fields() {
        let date = hd_day(1950, 3, 15);
        let fields = date.to_fields();
        assert_eq!(
            fields,
            DateFields {
                year: 1950,
                month: Some(3),
                day: Some(15),
                season: None
            }
        );
        assert_eq!(HistoricDate::from_fields(fields).unwrap(), date);

        let date = hd_season(-500, Season::Spring);
        let fields = date.to_fields();
        assert_eq!(fields.season, Some(1));
        assert_eq!(HistoricDate::from_fields(fields).unwrap(), date);

        let date = hd_year(-30_050);
        assert_eq!(HistoricDate::from_fields(date.to_fields()).unwrap(), date);
    }

    #[test]
    fn test_from_fields_contradictions() {
        // Day without month
        let result = HistoricDate::from_fields(DateFields {
            year: 1950,
            month: None,
            day: Some(15),
            season: None,
        });
        assert!(matches!(
            result,
            Err(DateError::Precision(PrecisionError::DayWithoutMonth))
        ));

        // Month and season together
        let result = HistoricDate::from_fields(DateFields {
            year: 1950,
            month: Some(3),
            day: None,
            season: Some(1),
        });
        assert!(matches!(
            result,
            Err(DateError::Precision(PrecisionError::SeasonMonthConflict))
        ));
    }

    #[test]
    fn test_try_from_fields() {
        let date: HistoricDate = DateFields {
            year: -500,
            month: None,
            day: None,
            season: None,
        }
        .try_into()
        .unwrap();
        assert_eq!(date, hd_year(-500));
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(hd_year(1950).to_string(), "1950");
        assert_eq!(hd_year(-500).to_string(), "-0500");
        assert_eq!(hd_year(0).to_string(), "0000");
        assert_eq!(hd_month(1950, 3).to_string(), "1950-03");
        assert_eq!(hd_day(1950, 3, 15).to_string(), "1950-03-15");
        assert_eq!(hd_season(1950, Season::Spring).to_string(), "1950-spring");
        assert_eq!(hd_year(-30_050).to_string(), "-30050");
        assert_eq!(
            hd_day_at(1950, 3, 15, 52_215_250).to_string(),
            "1950-03-15T14:30:15.250"
        );
    }

    #[test]
    fn test_parse_round_trips() {
        for text in [
            "1950",
            "-0500",
            "0000",
            "1950-03",
            "1950-03-15",
            "1950-spring",
            "-30050",
            "-13800000000",
            "1950-03-15T14:30:15.250",
        ] {
            let date: HistoricDate = text.parse().unwrap();
            let round = date.to_string().parse::<HistoricDate>().unwrap();
            assert_eq!(date, round, "round trip failed for {text}");
        }
    }

    #[test]
    fn test_parse_season_case_insensitive() {
        let date: HistoricDate = "1950-Spring".parse().unwrap();
        assert_eq!(date.season(), Some(Season::Spring));
        let date: HistoricDate = "-0500-WINTER".parse().unwrap();
        assert_eq!(date.season(), Some(Season::Winter));
    }

    #[test]
    fn test_parse_negative_full_date() {
        let date: HistoricDate = "-0500-03-15".parse().unwrap();
        assert_eq!(date.year(), -500);
        assert_eq!(date.month(), Some(3));
        assert_eq!(date.day(), Some(15));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<HistoricDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "   ".parse::<HistoricDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "199A".parse::<HistoricDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1950-13".parse::<HistoricDate>(),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            "1950-02-30".parse::<HistoricDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            "1950-monsoon".parse::<HistoricDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1950-03-15-23".parse::<HistoricDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        // Sub-year precision outside the historic regime fails in parsing too
        assert!(matches!(
            "-30050-03".parse::<HistoricDate>(),
            Err(DateError::PrecisionMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_time_errors() {
        assert!("1950-03-15T14:30:15".parse::<HistoricDate>().is_ok());
        assert!(matches!(
            "1950-03-15T25:00:00".parse::<HistoricDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1950-03-15T14:61:00".parse::<HistoricDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1950-03-15T14:30".parse::<HistoricDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        // Time on anything but a full date is a precision violation
        assert!(matches!(
            "1950-03T14:30:15".parse::<HistoricDate>(),
            Err(DateError::Precision(PrecisionError::TimeWithoutDay))
        ));
    }

    #[test]
    fn test_ordering_by_year() {
        assert!(hd_year(-13_800_000_000) < hd_year(-30_050));
        assert!(hd_year(-30_050) < hd_year(-500));
        assert!(hd_year(-500) < hd_year(0));
        assert!(hd_year(0) < hd_year(1950));
    }

    #[test]
    fn test_ordering_year_before_sub_year() {
        // Year-only sorts before anything more precise in the same year
        assert!(hd_year(1950) < hd_season(1950, Season::Spring));
        assert!(hd_year(1950) < hd_month(1950, 1));
        assert!(hd_year(1950) < hd_day(1950, 1, 1));
    }

    #[test]
    fn test_ordering_month_before_containing_season() {
        // Any known month sorts before the season containing it
        for m in [3, 4, 5] {
            assert!(
                hd_month(1950, m) < hd_season(1950, Season::Spring),
                "month {m} should sort before Spring"
            );
        }
        // A month after the season sorts after it
        assert!(hd_season(1950, Season::Spring) < hd_month(1950, 6));
        // And a month before the season sorts before it
        assert!(hd_month(1950, 2) < hd_season(1950, Season::Spring));
    }

    #[test]
    fn test_ordering_days_and_time() {
        assert!(hd_day(1950, 3, 14) < hd_day(1950, 3, 15));
        // Unknown day sorts as start-of-month
        assert!(hd_month(1950, 3) < hd_day(1950, 3, 1));
        // Unknown time sorts as start-of-day
        assert!(hd_day(1950, 3, 15) < hd_day_at(1950, 3, 15, 0));
        assert!(hd_day_at(1950, 3, 15, 0) < hd_day_at(1950, 3, 15, 1));
    }

    #[test]
    fn test_ordering_across_eras() {
        let marathon = hd_day(-489, 9, 12);
        let rome_founded = hd_year(-752);
        let hastings = hd_day(1066, 10, 14);
        let mut events = [hastings, marathon, rome_founded];
        events.sort();
        assert_eq!(events, [rome_founded, marathon, hastings]);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(hd_year(1950).lower_bound(), (1950, 1, 1));
        assert_eq!(hd_year(1950).upper_bound_inclusive(), (1950, 12, 31));

        assert_eq!(hd_season(1950, Season::Spring).lower_bound(), (1950, 3, 1));
        assert_eq!(
            hd_season(1950, Season::Spring).upper_bound_inclusive(),
            (1950, 5, 31)
        );

        assert_eq!(hd_month(1952, 2).upper_bound_inclusive(), (1952, 2, 29));
        assert_eq!(hd_day(1950, 3, 15).lower_bound(), (1950, 3, 15));
        assert_eq!(hd_day(1950, 3, 15).upper_bound_inclusive(), (1950, 3, 15));
    }

    #[test]
    fn test_years_before_present() {
        assert_eq!(hd_year(-30_050).years_before_present(), 32_050);
        assert_eq!(hd_year(-30_050).years_before_present_from(1950), 32_000);
        assert_eq!(hd_year(2000).years_before_present(), 0);
    }

    #[test]
    fn test_bce_year() {
        assert_eq!(hd_year(0).bce_year(), Some(1));
        assert_eq!(hd_year(-1).bce_year(), Some(2));
        assert_eq!(hd_year(-500).bce_year(), Some(501));
        assert_eq!(hd_year(1950).bce_year(), None);
    }

    #[test]
    fn test_uses_ybp() {
        assert!(hd_year(-30_050).uses_ybp());
        assert!(!hd_year(-500).uses_ybp());
        assert!(!hd_year(-13_800_000_000).uses_ybp());
    }

    #[test]
    fn test_regime() {
        assert_eq!(hd_year(1950).regime(), YearRegime::Historic);
        assert_eq!(hd_year(-30_050).regime(), YearRegime::DeepPrehistoric);
        assert_eq!(hd_year(-13_800_000_000).regime(), YearRegime::Cosmological);

        let thresholds = RegimeThresholds::with_reference_year(1950);
        assert_eq!(
            hd_year(-28_049).regime_in(&thresholds),
            YearRegime::DeepPrehistoric
        );
    }

    #[test]
    fn test_serde_string_format() {
        let date = hd_day(1950, 3, 15);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1950-03-15""#);
        let parsed: HistoricDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let date = hd_season(-500, Season::Autumn);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""-0500-autumn""#);
        let parsed: HistoricDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let date = hd_year(-13_800_000_000);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""-13800000000""#);
        let parsed: HistoricDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<HistoricDate, _> = serde_json::from_str(r#""1950-13""#);
        assert!(result.is_err());

        let result: Result<HistoricDate, _> = serde_json::from_str(r#""1950-02-30""#);
        assert!(result.is_err());

        let result: Result<HistoricDate, _> = serde_json::from_str(r#""-30050-03""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        let err = DateError::InvalidDay {
            year: 1950,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "Invalid day 30 for month 1950-02");

        let err = DateError::PrecisionMismatch {
            year: -30_050,
            regime: YearRegime::DeepPrehistoric,
        };
        assert_eq!(
            err.to_string(),
            "Calendar fields are not valid for deep-prehistoric year -30050"
        );
    }
}
