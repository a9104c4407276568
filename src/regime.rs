use crate::consts::{COSMOLOGICAL_FLOOR_YEARS, DEEP_PREHISTORY_FLOOR_YBP, REFERENCE_YEAR};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Which display regime a year falls into. Derived on demand from the
/// year, never stored: the boundary constants may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearRegime {
    /// Ordinary CE/BCE calendar range
    #[display(fmt = "historic")]
    Historic,
    /// Deep prehistory, expressed as years before present
    #[display(fmt = "deep-prehistoric")]
    DeepPrehistoric,
    /// Geological/cosmological magnitudes, expressed in millions or
    /// billions of years
    #[display(fmt = "cosmological")]
    Cosmological,
}

/// The regime boundaries, overridable per call. `Default` is the named
/// constants from `consts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeThresholds {
    /// The fixed "present" that years-before-present counts are relative to
    pub reference_year: i64,
    /// Inclusive years-before-present floor of the deep-prehistoric regime
    pub deep_prehistory_floor_ybp: i64,
    /// Inclusive raw-year magnitude floor of the cosmological regime
    pub cosmological_floor_years: i64,
}

impl Default for RegimeThresholds {
    fn default() -> Self {
        Self {
            reference_year: REFERENCE_YEAR,
            deep_prehistory_floor_ybp: DEEP_PREHISTORY_FLOOR_YBP,
            cosmological_floor_years: COSMOLOGICAL_FLOOR_YEARS,
        }
    }
}

impl RegimeThresholds {
    /// Default floors with a different reference year
    pub fn with_reference_year(reference_year: i64) -> Self {
        Self {
            reference_year,
            ..Self::default()
        }
    }
}

/// Classifies an astronomical year using the default thresholds.
///
/// A year exactly at a floor belongs to the more extreme regime: the
/// floors are inclusive lower bounds.
pub fn classify(year: i64) -> YearRegime {
    classify_in(year, &RegimeThresholds::default())
}

/// Classifies an astronomical year against explicit thresholds.
pub fn classify_in(year: i64, thresholds: &RegimeThresholds) -> YearRegime {
    // Magnitude test on the raw year, not on years before present
    if year.abs() >= thresholds.cosmological_floor_years {
        return YearRegime::Cosmological;
    }
    let years_before_present = thresholds.reference_year - year;
    if years_before_present >= thresholds.deep_prehistory_floor_ybp {
        YearRegime::DeepPrehistoric
    } else {
        YearRegime::Historic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_years_are_historic() {
        assert_eq!(classify(1950), YearRegime::Historic);
        assert_eq!(classify(0), YearRegime::Historic);
        assert_eq!(classify(-500), YearRegime::Historic);
        assert_eq!(classify(-25_000), YearRegime::Historic);
    }

    #[test]
    fn test_deep_prehistory_floor_boundary() {
        // Exactly at the floor belongs to the more extreme regime
        assert_eq!(
            classify(REFERENCE_YEAR - DEEP_PREHISTORY_FLOOR_YBP),
            YearRegime::DeepPrehistoric
        );
        assert_eq!(
            classify(REFERENCE_YEAR - (DEEP_PREHISTORY_FLOOR_YBP - 1)),
            YearRegime::Historic
        );
    }

    #[test]
    fn test_cosmological_floor_boundary() {
        assert_eq!(classify(-COSMOLOGICAL_FLOOR_YEARS), YearRegime::Cosmological);
        assert_eq!(classify(COSMOLOGICAL_FLOOR_YEARS), YearRegime::Cosmological);
        // One short of the magnitude floor on the positive side is within
        // the ordinary range
        assert_eq!(classify(COSMOLOGICAL_FLOOR_YEARS - 1), YearRegime::Historic);
        assert_eq!(
            classify(-(COSMOLOGICAL_FLOOR_YEARS - 1)),
            YearRegime::DeepPrehistoric
        );
    }

    #[test]
    fn test_regimes_monotonic_toward_past() {
        // Once cosmological, going further back never de-escalates
        let mut year = -COSMOLOGICAL_FLOOR_YEARS;
        for _ in 0..5 {
            assert_eq!(classify(year), YearRegime::Cosmological);
            year -= 1;
        }

        // Walking backwards from the present never skips straight from
        // historic to cosmological
        let mut seen_deep = false;
        for year in [-20_000i64, -27_999, -28_000, -500_000, -999_999] {
            match classify(year) {
                YearRegime::Historic => assert!(!seen_deep),
                YearRegime::DeepPrehistoric => seen_deep = true,
                YearRegime::Cosmological => unreachable!("|year| < 1,000,000"),
            }
        }
        assert!(seen_deep);
    }

    #[test]
    fn test_custom_reference_year() {
        let thresholds = RegimeThresholds::with_reference_year(1950);
        assert_eq!(
            classify_in(1950 - 29_999, &thresholds),
            YearRegime::DeepPrehistoric
        );
        assert_eq!(
            classify_in(1950 - 29_998, &thresholds),
            YearRegime::Historic
        );
    }

    #[test]
    fn test_custom_floors() {
        let thresholds = RegimeThresholds {
            reference_year: 2000,
            deep_prehistory_floor_ybp: 5_000,
            cosmological_floor_years: 100_000,
        };
        assert_eq!(classify_in(-4_000, &thresholds), YearRegime::DeepPrehistoric);
        assert_eq!(classify_in(-100_000, &thresholds), YearRegime::Cosmological);
    }

    #[test]
    fn test_display() {
        assert_eq!(YearRegime::Historic.to_string(), "historic");
        assert_eq!(YearRegime::DeepPrehistoric.to_string(), "deep-prehistoric");
        assert_eq!(YearRegime::Cosmological.to_string(), "cosmological");
    }
}
