use serde::{Deserialize, Serialize};

use crate::HistoricDate;

/// How much of a date is actually known. The year is always known and
/// therefore not flagged. A season is a coarser substitute for a month, so
/// the two are mutually exclusive at the sub-year level.
///
/// `exact` is an assertion by the caller that the date is not approximate;
/// it suppresses the automatic circa marker on deep-prehistoric output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Precision {
    pub season_known: bool,
    pub month_known: bool,
    pub day_known: bool,
    pub time_known: bool,
    pub exact: bool,
}

/// Error type for contradictory precision flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PrecisionError {
    /// A date carries either a known season or a known month, never both.
    #[error("a date cannot have both a known season and a known month")]
    SeasonMonthConflict,

    /// Precision is monotonic: a known day needs a known month.
    #[error("day precision requires month precision")]
    DayWithoutMonth,

    /// Precision is monotonic: a known time needs a known day.
    #[error("time precision requires day precision")]
    TimeWithoutDay,
}

impl Precision {
    /// Validates raw precision flags into a Precision value.
    ///
    /// # Errors
    /// Returns `PrecisionError` if the flags contradict each other.
    pub fn new(
        season_known: bool,
        month_known: bool,
        day_known: bool,
        time_known: bool,
        exact: bool,
    ) -> Result<Self, PrecisionError> {
        if season_known && month_known {
            return Err(PrecisionError::SeasonMonthConflict);
        }
        if day_known && !month_known {
            return Err(PrecisionError::DayWithoutMonth);
        }
        if time_known && !day_known {
            return Err(PrecisionError::TimeWithoutDay);
        }
        Ok(Self {
            season_known,
            month_known,
            day_known,
            time_known,
            exact,
        })
    }

    /// Year-only precision, nothing else known
    pub const fn year_only() -> Self {
        Self {
            season_known: false,
            month_known: false,
            day_known: false,
            time_known: false,
            exact: false,
        }
    }

    /// The precision a date value actually carries, with `exact` left false
    pub const fn of(date: &HistoricDate) -> Self {
        match date {
            HistoricDate::Day { time, .. } => Self {
                season_known: false,
                month_known: true,
                day_known: true,
                time_known: time.is_some(),
                exact: false,
            },
            HistoricDate::Month { .. } => Self {
                season_known: false,
                month_known: true,
                day_known: false,
                time_known: false,
                exact: false,
            },
            HistoricDate::Season { .. } => Self {
                season_known: true,
                month_known: false,
                day_known: false,
                time_known: false,
                exact: false,
            },
            HistoricDate::Year { .. } => Self::year_only(),
        }
    }

    /// Same flags with `exact` set
    pub const fn as_exact(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Whether any sub-year component is claimed known
    pub const fn has_sub_year(&self) -> bool {
        self.season_known || self.month_known || self.day_known || self.time_known
    }
}
