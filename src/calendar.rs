//! Calendar system the date wheels are computed against.
//!
//! The engine never does calendar arithmetic on its own beyond clamping; it asks
//! a [`CalendarProvider`] for field ranges, locale patterns and month names, and
//! for the conversion between [`DateValue`]s and their components.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, YEAR_LONG_MONTH_DAY_SKELETON};
use crate::locale::LocaleId;
use crate::types::{CalendarField, DateComponents, FieldRange, days_in_month};

/// A concrete, full-precision point in time in the provider's calendar.
pub type DateValue = NaiveDateTime;

/// Calendar and locale services consumed by the date wheel engine.
pub trait CalendarProvider {
    /// Localized date pattern for a skeleton such as `"yMMMMd"`.
    ///
    /// Returns `None` when the locale has no pattern for the skeleton.
    fn calendar_pattern(&self, skeleton: &str, locale: &LocaleId) -> Option<String>;

    /// The twelve month names, January first
    fn month_symbols(&self, locale: &LocaleId) -> [String; 12];

    /// Valid days for a given month and year
    fn day_range(&self, month: u32, year: i32) -> FieldRange;

    /// The largest range a field can ever take, used for row math
    fn field_range(&self, field: CalendarField) -> FieldRange;

    /// Builds a date from components and a time of day, `None` if unrealizable.
    fn date_from(&self, components: DateComponents, time: NaiveTime) -> Option<DateValue>;

    /// Splits a date into its year, month and day
    fn components(&self, date: &DateValue) -> DateComponents;

    /// Earliest date the calendar can represent, the default minimum bound
    fn earliest_date(&self) -> DateValue;

    /// Latest date the calendar can represent, the default maximum bound
    fn latest_date(&self) -> DateValue;
}

/// Proleptic Gregorian calendar limited to years `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianCalendar;

impl GregorianCalendar {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendarProvider for GregorianCalendar {
    fn calendar_pattern(&self, skeleton: &str, locale: &LocaleId) -> Option<String> {
        if skeleton != YEAR_LONG_MONTH_DAY_SKELETON {
            return None;
        }
        year_long_month_day_pattern(locale.language(), locale.region()).map(str::to_owned)
    }

    fn month_symbols(&self, locale: &LocaleId) -> [String; 12] {
        if let Some(names) = localized_month_names(locale.language()) {
            return names.map(str::to_owned);
        }

        let mut month = chrono::Month::January;
        std::array::from_fn(|_| {
            let name = month.name().to_owned();
            month = month.succ();
            name
        })
    }

    fn day_range(&self, month: u32, year: i32) -> FieldRange {
        FieldRange::new(1, days_in_month(year, month))
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn field_range(&self, field: CalendarField) -> FieldRange {
        match field {
            CalendarField::Year => FieldRange::new(MIN_YEAR, (MAX_YEAR - MIN_YEAR + 1) as u32),
            CalendarField::Month => FieldRange::new(1, MAX_MONTH),
            CalendarField::Day => FieldRange::new(MIN_DAY as i32, MAX_DAY),
        }
    }

    fn date_from(&self, components: DateComponents, time: NaiveTime) -> Option<DateValue> {
        if !self.field_range(CalendarField::Year).contains(components.year) {
            return None;
        }
        NaiveDate::from_ymd_opt(components.year, components.month, components.day)
            .map(|date| date.and_time(time))
    }

    fn components(&self, date: &DateValue) -> DateComponents {
        DateComponents::new(date.year(), date.month(), date.day())
    }

    fn earliest_date(&self) -> DateValue {
        NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or(NaiveDateTime::MIN)
    }

    fn latest_date(&self) -> DateValue {
        NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31)
            .and_then(|date| date.and_hms_nano_opt(23, 59, 59, 999_999_999))
            .unwrap_or(NaiveDateTime::MAX)
    }
}

/// Patterns for the "year, long month, day" skeleton.
///
/// Looked up by language-region first, then by language alone.
fn year_long_month_day_pattern(language: &str, region: Option<&str>) -> Option<&'static str> {
    let regional = match (language, region) {
        ("en", Some("GB" | "AU" | "IE" | "IN" | "NZ" | "ZA")) => Some("d MMMM y"),
        ("pt", Some("PT")) => Some("d 'de' MMMM 'de' y"),
        ("zh", Some("TW" | "HK")) => Some("y年M月d日"),
        _ => None,
    };
    regional.or(match language {
        "en" => Some("MMMM d, y"),
        "de" => Some("d. MMMM y"),
        "fr" | "it" | "nl" | "sv" | "pl" | "da" => Some("d MMMM y"),
        "es" | "pt" => Some("d 'de' MMMM 'de' y"),
        "ru" => Some("d MMMM y 'г'."),
        "fi" | "nb" => Some("d. MMMM y"),
        "ja" | "zh" => Some("y年M月d日"),
        "ko" => Some("y년 MMMM d일"),
        "hu" => Some("y. MMMM d."),
        "lt" => Some("y 'm'. MMMM d 'd'."),
        _ => None,
    })
}

fn localized_month_names(language: &str) -> Option<[&'static str; 12]> {
    match language {
        "de" => Some([
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ]),
        "fr" => Some([
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ]),
        "es" => Some([
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
            "octubre", "noviembre", "diciembre",
        ]),
        "it" => Some([
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ]),
        "ja" | "zh" => Some([
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{locale, noon};

    #[test]
    fn test_pattern_lookup_prefers_region() {
        let calendar = GregorianCalendar::new();
        assert_eq!(
            calendar.calendar_pattern(YEAR_LONG_MONTH_DAY_SKELETON, &locale("en-US")),
            Some("MMMM d, y".to_owned())
        );
        assert_eq!(
            calendar.calendar_pattern(YEAR_LONG_MONTH_DAY_SKELETON, &locale("en-GB")),
            Some("d MMMM y".to_owned())
        );
        assert_eq!(
            calendar.calendar_pattern(YEAR_LONG_MONTH_DAY_SKELETON, &locale("de-AT")),
            Some("d. MMMM y".to_owned())
        );
    }

    #[test]
    fn test_pattern_lookup_unknown() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.calendar_pattern(YEAR_LONG_MONTH_DAY_SKELETON, &locale("tlh")), None);
        assert_eq!(calendar.calendar_pattern("Hm", &locale("en-US")), None);
    }

    #[test]
    fn test_month_symbols() {
        let calendar = GregorianCalendar::new();
        let english = calendar.month_symbols(&locale("en-US"));
        assert_eq!(english[0], "January");
        assert_eq!(english[11], "December");

        let german = calendar.month_symbols(&locale("de-DE"));
        assert_eq!(german[2], "März");

        // Unknown languages fall back to English names
        let fallback = calendar.month_symbols(&locale("tlh"));
        assert_eq!(fallback, english);
    }

    #[test]
    fn test_field_ranges() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.field_range(CalendarField::Month), FieldRange::new(1, 12));
        assert_eq!(calendar.field_range(CalendarField::Day), FieldRange::new(1, 31));
        assert_eq!(calendar.field_range(CalendarField::Year), FieldRange::new(1, 9999));
        assert_eq!(calendar.day_range(2, 2024), FieldRange::new(1, 29));
        assert_eq!(calendar.day_range(4, 2023), FieldRange::new(1, 30));
    }

    #[test]
    fn test_date_from_and_components() {
        let calendar = GregorianCalendar::new();
        let date = calendar
            .date_from(DateComponents::new(2024, 2, 29), noon())
            .expect("leap day should be realizable");
        assert_eq!(calendar.components(&date), DateComponents::new(2024, 2, 29));
        assert_eq!(date.time(), noon());

        assert!(calendar.date_from(DateComponents::new(2023, 2, 29), noon()).is_none());
        assert!(calendar.date_from(DateComponents::new(10_000, 1, 1), noon()).is_none());
        assert!(calendar.date_from(DateComponents::new(0, 1, 1), noon()).is_none());
    }

    #[test]
    fn test_default_bounds_span_year_range() {
        let calendar = GregorianCalendar::new();
        assert_eq!(calendar.components(&calendar.earliest_date()), DateComponents::new(1, 1, 1));
        assert_eq!(calendar.components(&calendar.latest_date()), DateComponents::new(9999, 12, 31));
        assert!(calendar.earliest_date() < calendar.latest_date());
    }
}
