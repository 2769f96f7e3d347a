use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// One of the three calendar fields a date wheel can show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl CalendarField {
    /// All fields, in calendar significance order
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];

    /// Stable slot used for per-field arrays
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
        }
    }
}

/// A contiguous range of field values: `start..start + length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}+{length}")]
pub struct FieldRange {
    pub start:  i32,
    pub length: u32,
}

impl FieldRange {
    pub const fn new(start: i32, length: u32) -> Self {
        Self { start, length }
    }

    /// Last value in the range (inclusive)
    #[allow(clippy::cast_possible_wrap)]
    pub const fn end(&self) -> i32 {
        self.start + self.length as i32 - 1
    }

    pub const fn contains(&self, value: i32) -> bool {
        value >= self.start && value <= self.end()
    }
}

/// Year, month and day of a date, not necessarily realizable.
///
/// The composer works on these while a candidate is being evaluated; only
/// [`DateComponents::is_realizable`] values ever become a committed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct DateComponents {
    pub year:  i32,
    pub month: u32,
    pub day:   u32,
}

impl DateComponents {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the value of one field
    #[allow(clippy::cast_possible_wrap)]
    pub const fn get(&self, field: CalendarField) -> i32 {
        match field {
            CalendarField::Year => self.year,
            CalendarField::Month => self.month as i32,
            CalendarField::Day => self.day as i32,
        }
    }

    /// Returns a copy with one field replaced, without any validation.
    ///
    /// Negative month/day values saturate to 0, which no calendar accepts.
    #[must_use]
    pub fn with(self, field: CalendarField, value: i32) -> Self {
        let unsigned = u32::try_from(value).unwrap_or(0);
        match field {
            CalendarField::Year => Self { year: value, ..self },
            CalendarField::Month => Self {
                month: unsigned,
                ..self
            },
            CalendarField::Day => Self { day: unsigned, ..self },
        }
    }

    /// Whether the month and day exist in the proleptic Gregorian calendar
    pub const fn is_realizable(&self) -> bool {
        self.month >= 1
            && self.month <= MAX_MONTH
            && self.day >= MIN_DAY
            && self.day <= days_in_month(self.year, self.month)
    }

    /// Returns the fields whose values differ between `self` and `other`
    pub fn differing_fields(&self, other: &Self) -> Vec<CalendarField> {
        CalendarField::ALL
            .into_iter()
            .filter(|field| self.get(*field) != other.get(*field))
            .collect()
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`; 0 for a month outside `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
