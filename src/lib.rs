//! Date computation engine for three-wheel date pickers.
//!
//! A picker shows month, day and year wheels in the order the locale writes
//! dates. [`DateWheel`] turns a row selected on one of them into a valid date:
//! it maps rows to values over a large, wrapping row space, clamps the day when
//! the month or year changes (January 31st to February gives the 28th or 29th),
//! and rejects dates outside the configured bounds by snapping every wheel back.
//!
//! Rendering is left to the host. It implements [`WheelHost`] and drives the
//! engine through a [`WheelPicker`].
//!
//! ```
//! use chrono::NaiveDate;
//! use wheel_date::{CalendarField, DateWheel, GregorianCalendar};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 31)
//!     .and_then(|d| d.and_hms_opt(0, 0, 0))
//!     .unwrap();
//! let mut wheel = DateWheel::with_date(GregorianCalendar::new(), start);
//!
//! let february = wheel.row_for_value(CalendarField::Month, 2);
//! let selection = wheel.select_row(CalendarField::Month, february);
//!
//! assert!(selection.is_accepted());
//! assert_eq!(wheel.components().day, 28);
//! ```

mod appearance;
mod calendar;
mod config;
mod consts;
mod host;
mod locale;
mod mapper;
mod prelude;
mod range;
mod types;
mod wheel;

#[cfg(test)]
mod test_utils;

pub use appearance::{Rgba, WheelAppearance};
pub use calendar::{CalendarProvider, DateValue, GregorianCalendar};
pub use config::{ConfigError, DateWheelConfig};
pub use consts::*;
pub use host::{DateWheelDelegate, WheelHost, WheelPicker};
pub use locale::{FieldOrder, LocaleError, LocaleId, resolve_field_order, resolve_locale_order};
pub use mapper::ValueMapper;
pub use range::{BoundsError, DateBounds};
pub use types::{CalendarField, DateComponents, FieldRange, days_in_month, is_leap_year};
pub use wheel::{DateChange, DateWheel, Reposition, Selection, WheelLabel, WheelState};
