use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DateError, DateFields, HistoricDate, RANGE_SEPARATOR, prelude::*};

/// A span between two historic dates (inclusive), such as a reign, a war
/// or a lifetime. The start must not be after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct HistoricDateRange {
    start: HistoricDate,
    end:   HistoricDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: HistoricDate,
        end: HistoricDate,
    },

    /// Error constructing a date endpoint.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl HistoricDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: HistoricDate, end: HistoricDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> HistoricDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> HistoricDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (HistoricDate, HistoricDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date.
    /// Uses concrete bounds comparison to handle mixed-precision dates correctly.
    pub fn contains(&self, date: &HistoricDate) -> bool {
        let date_lower = date.lower_bound();
        let date_upper = date.upper_bound_inclusive();
        let range_lower = self.start.lower_bound();
        let range_upper = self.end.upper_bound_inclusive();

        range_lower <= date_lower && date_upper <= range_upper
    }

    /// Checks if this range overlaps with another range.
    /// Uses concrete bounds comparison to handle mixed-precision ranges correctly.
    pub fn overlaps(&self, other: &Self) -> bool {
        let self_lower = self.start.lower_bound();
        let self_upper = self.end.upper_bound_inclusive();
        let other_lower = other.start.lower_bound();
        let other_upper = other.end.upper_bound_inclusive();

        self_lower <= other_upper && other_lower <= self_upper
    }

    /// Checks if this range is completely contained within another range.
    /// Uses concrete bounds comparison to handle mixed-precision ranges correctly.
    pub fn is_within(&self, other: &Self) -> bool {
        let self_lower = self.start.lower_bound();
        let self_upper = self.end.upper_bound_inclusive();
        let other_lower = other.start.lower_bound();
        let other_upper = other.end.upper_bound_inclusive();

        other_lower <= self_lower && self_upper <= other_upper
    }

    /// Returns the earliest concrete date represented by this range.
    pub fn lower_bound(&self) -> (i64, u8, u8) {
        self.start.lower_bound()
    }

    /// Returns the latest concrete date represented by this range (inclusive).
    pub fn upper_bound_inclusive(&self) -> (i64, u8, u8) {
        self.end.upper_bound_inclusive()
    }

    /// Creates from a pair of flat content-API field tuples.
    ///
    /// # Errors
    /// Returns `RangeError` if either endpoint is invalid or start > end.
    pub fn from_fields(start: DateFields, end: DateFields) -> Result<Self, RangeError> {
        let start = HistoricDate::from_fields(start)?;
        let end = HistoricDate::from_fields(end)?;
        Self::new(start, end)
    }
}

impl FromStr for HistoricDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // A leading '-' belongs to the start year, never to the separator
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let start_str = trimmed[..pos].trim();
                let end_str = trimmed[pos + 1..].trim();

                let start = start_str.parse::<HistoricDate>()?;
                let end = end_str.parse::<HistoricDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for HistoricDateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HistoricDateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for HistoricDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HistoricDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
