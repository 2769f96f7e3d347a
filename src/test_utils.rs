//! Shared fixtures for unit tests.

use chrono::{NaiveDate, NaiveTime};

use crate::calendar::{DateValue, GregorianCalendar};
use crate::locale::LocaleId;
use crate::wheel::DateWheel;

pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateValue {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .unwrap()
}

/// Midnight at the start of the given day
pub fn date(year: i32, month: u32, day: u32) -> DateValue {
    datetime(year, month, day, 0, 0, 0)
}

pub fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

pub fn locale(tag: &str) -> LocaleId {
    tag.parse().unwrap()
}

/// Gregorian engine at midnight of the given day, in `en-US` order.
pub fn wheel_at(year: i32, month: u32, day: u32) -> DateWheel {
    let mut wheel = DateWheel::with_date(GregorianCalendar::new(), date(year, month, day));
    wheel.set_locale(locale("en-US"));
    wheel
}
