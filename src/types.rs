use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_SEASON, MONTH_NAMES, MS_PER_DAY, SEASON_NAMES, YEAR_MAGNITUDE_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// An astronomically numbered year: 1 BCE is year 0, 2 BCE is year -1.
/// Guaranteed to satisfy `|year| <= YEAR_MAGNITUDE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Year(i64);

impl Year {
    /// Creates a new Year, validating the magnitude bound
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if `|value| > YEAR_MAGNITUDE_LIMIT`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        if value.abs() > YEAR_MAGNITUDE_LIMIT {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// Returns the astronomical year value as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Displayed-calendar year for non-positive years: year 0 is "1 BCE",
    /// year -1 is "2 BCE". `None` for CE years.
    pub const fn bce(self) -> Option<i64> {
        if self.0 <= 0 { Some(1 - self.0) } else { None }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Calendar name of the month ("January" .. "December")
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the
    /// given year and month (proleptic-Gregorian leap rules)
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: i64, month: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year,
            month,
            day: value,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(DateError::InvalidDay {
                year,
                month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check non-zero
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A season of the year, the coarse alternative to a known month.
/// Indices run 1..=4; index 0 is the "none" sentinel and never constructs
/// a `Season`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Autumn = 3,
    Winter = 4,
}

impl Season {
    /// Creates a Season from its 1-based index
    ///
    /// # Errors
    /// Returns `DateError::InvalidSeason` for 0 (the "none" sentinel) or
    /// anything > `MAX_SEASON`.
    pub fn from_index(value: u8) -> Result<Self, DateError> {
        match value {
            1 => Ok(Self::Spring),
            2 => Ok(Self::Summer),
            3 => Ok(Self::Autumn),
            4 => Ok(Self::Winter),
            other => Err(DateError::InvalidSeason(other)),
        }
    }

    /// Looks a season up by its display name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        (1..=MAX_SEASON)
            .find(|&i| SEASON_NAMES[i as usize].eq_ignore_ascii_case(trimmed))
            .and_then(|i| Self::from_index(i).ok())
    }

    /// Returns the 1-based season index
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display name of the season
    pub fn name(self) -> &'static str {
        SEASON_NAMES[self.index() as usize]
    }

    /// First month covered by the season. Winter is anchored to December.
    pub const fn first_month(self) -> u8 {
        match self {
            Self::Spring => 3,
            Self::Summer => 6,
            Self::Autumn => 9,
            Self::Winter => 12,
        }
    }

    /// Last month covered by the season within the same calendar year
    pub const fn last_month(self) -> u8 {
        match self {
            Self::Spring => 5,
            Self::Summer => 8,
            Self::Autumn => 11,
            Self::Winter => 12,
        }
    }

    /// Whether the month falls inside this season's span of the year
    pub const fn contains_month(self, month: u8) -> bool {
        month >= self.first_month() && month <= self.last_month()
    }
}

impl TryFrom<u8> for Season {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Season> for u8 {
    fn from(season: Season) -> Self {
        season.index()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A time-of-day offset in milliseconds, `0..MS_PER_DAY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MsOfDay(u32);

impl MsOfDay {
    /// Creates a time-of-day offset, validating the range
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if the value is negative or >= `MS_PER_DAY`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        if !(0..MS_PER_DAY).contains(&value) {
            return Err(DateError::InvalidTime(value));
        }
        Ok(Self(value as u32))
    }

    /// Returns the offset in milliseconds
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Hour component (0-23)
    pub const fn hour(self) -> u32 {
        self.0 / 3_600_000
    }

    /// Minute component (0-59)
    pub const fn minute(self) -> u32 {
        self.0 / 60_000 % 60
    }

    /// Second component (0-59)
    pub const fn second(self) -> u32 {
        self.0 / 1_000 % 60
    }

    /// Millisecond component (0-999)
    pub const fn millisecond(self) -> u32 {
        self.0 % 1_000
    }
}

impl TryFrom<i64> for MsOfDay {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MsOfDay> for i64 {
    fn from(ms: MsOfDay) -> Self {
        i64::from(ms.0)
    }
}

impl fmt::Display for MsOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

// Helper functions

/// Proleptic-Gregorian leap rule over astronomical years; year 0 is a leap
/// year, negative years use euclidean remainders.
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
