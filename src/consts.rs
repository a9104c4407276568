/// Largest accepted year magnitude (astronomical numbering, either sign).
/// Comfortably covers the age of the universe with headroom for rounding.
pub const YEAR_MAGNITUDE_LIMIT: i64 = 999_999_999_999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum valid season index (Winter); index 0 is the "none" sentinel
pub const MAX_SEASON: u8 = 4;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Milliseconds in a civil day; upper bound (exclusive) for a time-of-day offset
pub const MS_PER_DAY: i64 = 86_400_000;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month display names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "", "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Season display names (index 0 is the "none" sentinel, never rendered)
pub const SEASON_NAMES: [&str; 5] = ["none", "Spring", "Summer", "Autumn", "Winter"];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Fixed approximate "present" used as the default reference year.
/// A constant rather than the live clock keeps classification and
/// formatting deterministic.
pub const REFERENCE_YEAR: i64 = 2000;

/// Years-before-present floor (inclusive) of the deep-prehistoric regime
pub const DEEP_PREHISTORY_FLOOR_YBP: i64 = 29_999;

/// Raw-year magnitude floor (inclusive) of the cosmological regime
pub const COSMOLOGICAL_FLOOR_YEARS: i64 = 1_000_000;

/// Displayed numbers above this are comma grouped
pub const PRETTIFY_FLOOR: i64 = 10_000;

/// Years-before-present counts above this get an automatic circa marker
pub const CIRCA_FLOOR: i64 = 10_000;

/// Significant digits kept when abbreviating cosmological magnitudes
pub const SIGNIFICANT_FIGURES: u32 = 4;

/// Basis the decimal exponent is subtracted from when inverting a
/// cosmological magnitude; 13.8 billion years (exponent 10) maps to 20
pub const EXPONENT_INVERSION_BASIS: u32 = 30;

/// Basis for the inverted significand; ten times this, minus the leading
/// five digits of the magnitude, gives 986,200 for 13.8 billion years
pub const DECIMAL_INVERSION_BASIS: i64 = 100_000;

/// Date component separator (canonical compact form)
pub const DATE_SEPARATOR: char = '-';
/// Range separator between the start and end of a date range
pub const RANGE_SEPARATOR: char = '/';
/// Separator between the calendar date and a time-of-day offset
pub const TIME_SEPARATOR: char = 'T';

/// Circa marker prefixed to approximate displayed dates
pub const CIRCA_MARKER: char = '~';
/// Era suffix for years at or before astronomical year zero
pub const ERA_SUFFIX_BCE: &str = "BCE";
/// Suffix for deep-prehistoric year counts
pub const YBP_SUFFIX: &str = "years before present";
