/// Minimum year shown on the year wheel (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Maximum year shown on the year wheel (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;
/// Longest possible month, used for the day wheel's row math
pub const MAX_DAY: u32 = 31;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Number of rows every wheel exposes to the host.
///
/// A multiple of every field cycle (12 months, 31 days, 9 999 years), so the
/// last row flows into row 0 without a jump, and far more than twice the
/// year range so the middle-aligned row for any value stays in bounds.
pub const VIRTUAL_ROW_COUNT: usize = 1_239_876;

/// Number of wheels (components) a date picker shows
pub const WHEEL_COUNT: usize = 3;

/// Date-pattern skeleton for "year, long month, day"
pub const YEAR_LONG_MONTH_DAY_SKELETON: &str = "yMMMMd";

/// Locale used when neither the host nor the system provides one
pub const FALLBACK_LOCALE: &str = "en-US";

/// Font used for wheel labels unless the host overrides it
pub const DEFAULT_FONT_NAME: &str = "Helvetica";
/// Point size used for wheel labels unless the host overrides it
pub const DEFAULT_FONT_SIZE: f64 = 20.0;
