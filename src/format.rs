//! Human-readable rendering of historic dates.
//!
//! Everything here is a pure function over a date, its precision, and the
//! regime thresholds; formatting is total and never fails for a value
//! that was constructed successfully.

use crate::HistoricDate;
use crate::consts::{
    CIRCA_FLOOR, CIRCA_MARKER, DECIMAL_INVERSION_BASIS, ERA_SUFFIX_BCE, EXPONENT_INVERSION_BASIS,
    PRETTIFY_FLOOR, SIGNIFICANT_FIGURES, YBP_SUFFIX,
};
use crate::precision::Precision;
use crate::regime::{self, RegimeThresholds, YearRegime};

const MILLION: i64 = 1_000_000;
const BILLION: i64 = 1_000_000_000;

/// Renders a date using the default regime thresholds.
pub fn format(date: &HistoricDate, precision: &Precision) -> String {
    format_in(date, precision, &RegimeThresholds::default())
}

/// Renders a date against explicit regime thresholds.
pub fn format_in(
    date: &HistoricDate,
    precision: &Precision,
    thresholds: &RegimeThresholds,
) -> String {
    match regime::classify_in(date.year(), thresholds) {
        YearRegime::Cosmological => {
            cosmological(thresholds.reference_year - date.year())
        }
        YearRegime::DeepPrehistoric => {
            deep_prehistoric(thresholds.reference_year - date.year(), precision)
        }
        YearRegime::Historic => historic(date, precision),
    }
}

/// Conventional calendar rendering: "March 15, 1950", "Spring 501 BCE".
/// Year 0 and below convert to the displayed BCE calendar (no year zero).
fn historic(date: &HistoricDate, precision: &Precision) -> String {
    let year = date.year();
    let year_text = if year <= 0 {
        format!("{} {ERA_SUFFIX_BCE}", prettify(1 - year))
    } else {
        prettify(year)
    };

    let month = date.month_typed().filter(|_| precision.month_known);
    let day = date.day_typed().filter(|_| precision.day_known);
    let season = date.season().filter(|_| precision.season_known);

    match (month, day, season) {
        (Some(month), Some(day), _) => format!("{} {}, {year_text}", month.name(), day.get()),
        (Some(month), None, _) => format!("{} {year_text}", month.name()),
        (None, _, Some(season)) => format!("{} {year_text}", season.name()),
        (None, _, None) => year_text,
    }
}

/// Deep-prehistoric rendering: "~32,000 years before present". The circa
/// marker is automatic past the circa floor unless the date is marked
/// exact.
fn deep_prehistoric(years_before_present: i64, precision: &Precision) -> String {
    let circa = if !precision.exact && years_before_present > CIRCA_FLOOR {
        String::from(CIRCA_MARKER)
    } else {
        String::new()
    };
    format!("{circa}{} {YBP_SUFFIX}", prettify(years_before_present))
}

/// Cosmological rendering: "13.8 billion years ago". Sign-aware; a future
/// magnitude renders as "years from now".
fn cosmological(years_from_present: i64) -> String {
    let (magnitude, suffix) = if years_from_present >= 0 {
        (years_from_present, "years ago")
    } else {
        (-years_from_present, "years from now")
    };
    let magnitude = CosmicMagnitude::from_years(magnitude).years();
    format!("{} {suffix}", millify(magnitude))
}

/// A cosmological year count in decimal-inverted form: the base-10
/// exponent subtracted from `EXPONENT_INVERSION_BASIS` and the leading
/// five significant digits subtracted from ten times
/// `DECIMAL_INVERSION_BASIS`. Smaller pairs mean deeper time, and the
/// round trip back to a year count is exact integer arithmetic, so no
/// floating-point artifacts reach the display path. The Big Bang,
/// 13.8 billion years ago, maps to exponent 20 and significand 986,200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CosmicMagnitude {
    exponent: u32,
    significand: i64,
}

impl CosmicMagnitude {
    /// Inverts a positive year count, keeping five significant digits.
    pub fn from_years(years: i64) -> Self {
        debug_assert!(years > 0);
        let mut exponent = u64::try_from(years).map_or(0, |n| n.max(1).ilog10());
        let mut leading = if exponent >= 4 {
            let scale = 10_i64.pow(exponent - 4);
            (years + scale / 2) / scale
        } else {
            years * 10_i64.pow(4 - exponent)
        };
        // Rounding can carry into a sixth digit
        if leading >= DECIMAL_INVERSION_BASIS {
            leading /= 10;
            exponent += 1;
        }
        Self {
            exponent: EXPONENT_INVERSION_BASIS - exponent,
            significand: 10 * DECIMAL_INVERSION_BASIS - leading,
        }
    }

    /// The inverted base-10 exponent
    pub const fn exponent(self) -> u32 {
        self.exponent
    }

    /// The inverted five-digit significand
    pub const fn significand(self) -> i64 {
        self.significand
    }

    /// Recovers the year count, exact to five significant digits.
    pub fn years(self) -> i64 {
        let exponent = EXPONENT_INVERSION_BASIS - self.exponent;
        let leading = 10 * DECIMAL_INVERSION_BASIS - self.significand;
        if exponent >= 4 {
            leading * 10_i64.pow(exponent - 4)
        } else {
            leading / 10_i64.pow(4 - exponent)
        }
    }
}

/// Abbreviates a positive year count into millions or billions, rounded
/// to `SIGNIFICANT_FIGURES` significant digits, trailing zeros trimmed.
fn millify(years: i64) -> String {
    debug_assert!(years > 0);
    let digits = u64::try_from(years).map_or(1, |n| n.max(1).ilog10() + 1);
    let rounded = if digits > SIGNIFICANT_FIGURES {
        let scale = 10_i64.pow(digits - SIGNIFICANT_FIGURES);
        (years + scale / 2) / scale * scale
    } else {
        years
    };

    let (unit, unit_name) = if rounded >= BILLION {
        (BILLION, "billion")
    } else {
        (MILLION, "million")
    };

    let whole = rounded / unit;
    let whole_digits = u64::try_from(whole).map_or(1, |n| n.max(1).ilog10() + 1);
    let decimals = SIGNIFICANT_FIGURES.saturating_sub(whole_digits);

    let mut text = prettify(whole);
    if decimals > 0 {
        let fraction = rounded % unit * 10_i64.pow(decimals) / unit;
        let fraction = format!("{fraction:0width$}", width = decimals as usize);
        let fraction = fraction.trim_end_matches('0');
        if !fraction.is_empty() {
            text.push('.');
            text.push_str(fraction);
        }
    }
    format!("{text} {unit_name}")
}

/// Comma-groups a non-negative number once it exceeds the prettification
/// floor; smaller numbers render plain.
fn prettify(n: i64) -> String {
    debug_assert!(n >= 0);
    if n > PRETTIFY_FLOOR {
        group_thousands(n)
    } else {
        n.to_string()
    }
}

fn group_thousands(n: i64) -> String {
    let plain = n.to_string();
    let mut grouped = String::with_capacity(plain.len() + plain.len() / 3);
    for (i, c) in plain.chars().enumerate() {
        if i > 0 && (plain.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
