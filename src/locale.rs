//! Locale identifiers and the left-to-right order of the date wheels.

use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::calendar::CalendarProvider;
use crate::consts::{FALLBACK_LOCALE, WHEEL_COUNT, YEAR_LONG_MONTH_DAY_SKELETON};
use crate::prelude::*;
use crate::types::CalendarField;

/// Error type for locale parsing and field-order resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// The string is not a BCP-47 language identifier.
    #[error("Invalid locale identifier: {0}")]
    InvalidIdentifier(String),

    /// The calendar has no date pattern for this locale.
    #[error("No date pattern for locale {0}")]
    UnsupportedLocale(String),

    /// The pattern contains no field letters at all.
    #[error("Date pattern has no fields")]
    EmptyPattern,

    /// A pattern letter that is not a year, month or day field.
    #[error("Unrecognized date field '{0}' in pattern")]
    UnrecognizedField(char),

    /// The same field decoded twice.
    #[error("Date field {0} appears more than once")]
    DuplicateField(CalendarField),

    /// The pattern does not decode to exactly three fields.
    #[error("Expected 3 date fields in pattern, found {0}")]
    FieldCount(usize),
}

/// A BCP-47 locale such as `en-US` or `de`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct LocaleId(LanguageIdentifier);

impl LocaleId {
    /// The system locale, or `en-US` when none can be determined.
    pub fn current() -> Self {
        sys_locale::get_locale()
            .and_then(|tag| tag.replace('_', "-").parse().ok())
            .unwrap_or_else(Self::fallback)
    }

    /// The locale used when nothing better is known (`en-US`)
    pub fn fallback() -> Self {
        Self(FALLBACK_LOCALE.parse().unwrap_or_default())
    }

    /// Language subtag, e.g. `"en"`
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Region subtag if present, e.g. `Some("US")`
    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|region| region.as_str())
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        Self::fallback()
    }
}

impl FromStr for LocaleId {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| LocaleError::InvalidIdentifier(trimmed.to_owned()))
    }
}

impl serde::Serialize for LocaleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LocaleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Display order of the three wheels; always a permutation of the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{}-{}", "_0[0]", "_0[1]", "_0[2]")]
pub struct FieldOrder([CalendarField; WHEEL_COUNT]);

impl FieldOrder {
    /// Month, day, year: the order of the fallback locale
    pub const MONTH_DAY_YEAR: Self = Self([CalendarField::Month, CalendarField::Day, CalendarField::Year]);

    /// Creates an order, rejecting anything that is not a permutation.
    ///
    /// # Errors
    /// Returns `LocaleError::DuplicateField` if a field is repeated.
    pub fn new(first: CalendarField, middle: CalendarField, last: CalendarField) -> Result<Self, LocaleError> {
        if first == middle || first == last {
            return Err(LocaleError::DuplicateField(first));
        }
        if middle == last {
            return Err(LocaleError::DuplicateField(middle));
        }
        Ok(Self([first, middle, last]))
    }

    pub const fn fields(&self) -> [CalendarField; WHEEL_COUNT] {
        self.0
    }

    /// Field shown by the wheel at `component`, if any
    pub fn field_at(&self, component: usize) -> Option<CalendarField> {
        self.0.get(component).copied()
    }

    /// Component index showing `field`
    pub fn position(&self, field: CalendarField) -> usize {
        self.0.iter().position(|candidate| *candidate == field).unwrap_or_default()
    }
}

impl Default for FieldOrder {
    fn default() -> Self {
        Self::MONTH_DAY_YEAR
    }
}

/// Looks up the locale's "year, long month, day" pattern and decodes its order.
///
/// # Errors
/// Returns `LocaleError::UnsupportedLocale` if the calendar has no pattern,
/// or any error of [`resolve_field_order`].
pub fn resolve_locale_order<C>(calendar: &C, locale: &LocaleId) -> Result<FieldOrder, LocaleError>
where
    C: CalendarProvider + ?Sized,
{
    let pattern = calendar
        .calendar_pattern(YEAR_LONG_MONTH_DAY_SKELETON, locale)
        .ok_or_else(|| LocaleError::UnsupportedLocale(locale.to_string()))?;
    log::trace!("pattern for {locale}: {pattern}");
    resolve_field_order(&pattern)
}

/// Decodes the field order of a date pattern such as `"d. MMMM y"`.
///
/// The first and last field letters give the outer wheels; after dropping them
/// and all literals, punctuation and repeated width letters, the first
/// remaining letter gives the middle wheel.
///
/// # Errors
/// Returns a `LocaleError` unless the first, middle and last letters name
/// year, month and day once each. Letters after the middle one (eras and the
/// like) are ignored.
pub fn resolve_field_order(pattern: &str) -> Result<FieldOrder, LocaleError> {
    let letters = field_letters(pattern);
    let (&first, &last) = match (letters.first(), letters.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(LocaleError::EmptyPattern),
    };
    let first_field = field_for_letter(first)?;
    let last_field = field_for_letter(last)?;

    let lead = letters.iter().take_while(|letter| **letter == first).count();
    let trail = letters.iter().rev().take_while(|letter| **letter == last).count();
    if lead + trail > letters.len() {
        // the whole pattern is a single field
        return Err(LocaleError::FieldCount(1));
    }
    let remainder = &letters[lead..letters.len() - trail];

    let middle = *remainder.first().ok_or(LocaleError::FieldCount(2))?;

    FieldOrder::new(first_field, field_for_letter(middle)?, last_field)
}

/// Pattern letters outside quoted literals, with width repeats collapsed.
fn field_letters(pattern: &str) -> Vec<char> {
    let mut letters: Vec<char> = Vec::new();
    let mut quoted = false;
    for ch in pattern.chars() {
        if ch == '\'' {
            quoted = !quoted;
            continue;
        }
        if quoted || !ch.is_ascii_alphabetic() {
            continue;
        }
        if letters.last() != Some(&ch) {
            letters.push(ch);
        }
    }
    letters
}

const fn field_for_letter(letter: char) -> Result<CalendarField, LocaleError> {
    match letter {
        'y' | 'Y' | 'u' | 'U' | 'r' => Ok(CalendarField::Year),
        'M' | 'L' => Ok(CalendarField::Month),
        'd' => Ok(CalendarField::Day),
        other => Err(LocaleError::UnrecognizedField(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GregorianCalendar;
    use crate::test_utils::locale;
    use CalendarField::{Day, Month, Year};

    #[test]
    fn test_resolve_field_order_cases() {
        struct TestCase {
            pattern:  &'static str,
            expected: [CalendarField; 3],
        }

        let cases = [
            TestCase {
                pattern:  "MMMM d, y",
                expected: [Month, Day, Year],
            },
            TestCase {
                pattern:  "d MMMM y",
                expected: [Day, Month, Year],
            },
            TestCase {
                pattern:  "d. MMMM y",
                expected: [Day, Month, Year],
            },
            TestCase {
                pattern:  "y年M月d日",
                expected: [Year, Month, Day],
            },
            TestCase {
                pattern:  "y. MMMM d.",
                expected: [Year, Month, Day],
            },
            TestCase {
                pattern:  "d 'de' MMMM 'de' y",
                expected: [Day, Month, Year],
            },
            TestCase {
                pattern:  "y 'm'. MMMM d 'd'.",
                expected: [Year, Month, Day],
            },
            TestCase {
                pattern:  "d MMMM y 'г'.",
                expected: [Day, Month, Year],
            },
            TestCase {
                pattern:  "d MMMM G y",
                expected: [Day, Month, Year],
            },
        ];

        for case in &cases {
            let order = resolve_field_order(case.pattern).unwrap();
            assert_eq!(order.fields(), case.expected, "pattern {:?}", case.pattern);
        }
    }

    #[test]
    fn test_resolve_field_order_rejects_garbage() {
        assert_eq!(resolve_field_order(""), Err(LocaleError::EmptyPattern));
        assert_eq!(resolve_field_order(", ."), Err(LocaleError::EmptyPattern));
        assert_eq!(resolve_field_order("yyyy"), Err(LocaleError::FieldCount(1)));
        assert_eq!(resolve_field_order("MMMM y"), Err(LocaleError::FieldCount(2)));
        assert_eq!(
            resolve_field_order("EEEE, MMMM d, y"),
            Err(LocaleError::UnrecognizedField('E'))
        );
        assert_eq!(resolve_field_order("d MMMM d"), Err(LocaleError::DuplicateField(Day)));
        assert_eq!(resolve_field_order("y MMM d y"), Err(LocaleError::DuplicateField(Year)));
        assert_eq!(resolve_field_order("d EEEE y"), Err(LocaleError::UnrecognizedField('E')));
    }

    #[test]
    fn test_resolve_locale_order() {
        let calendar = GregorianCalendar::new();
        let us = resolve_locale_order(&calendar, &locale("en-US")).unwrap();
        assert_eq!(us.fields(), [Month, Day, Year]);

        let japan = resolve_locale_order(&calendar, &locale("ja-JP")).unwrap();
        assert_eq!(japan.fields(), [Year, Month, Day]);

        let unsupported = resolve_locale_order(&calendar, &locale("tlh"));
        assert!(matches!(unsupported, Err(LocaleError::UnsupportedLocale(_))));
    }

    #[test]
    fn test_field_order_new_requires_permutation() {
        assert!(FieldOrder::new(Year, Month, Day).is_ok());
        assert_eq!(FieldOrder::new(Year, Year, Day), Err(LocaleError::DuplicateField(Year)));
        assert_eq!(FieldOrder::new(Year, Day, Day), Err(LocaleError::DuplicateField(Day)));
    }

    #[test]
    fn test_field_order_lookup_and_display() {
        let order = FieldOrder::default();
        assert_eq!(order.field_at(0), Some(Month));
        assert_eq!(order.field_at(3), None);
        assert_eq!(order.position(Year), 2);
        assert_eq!(order.to_string(), "month-day-year");
    }

    #[test]
    fn test_locale_id_parse() {
        let id = locale("pt-BR");
        assert_eq!(id.language(), "pt");
        assert_eq!(id.region(), Some("BR"));
        assert_eq!(id.to_string(), "pt-BR");

        let bare = locale("fr");
        assert_eq!(bare.region(), None);

        let result = "not a locale!".parse::<LocaleId>();
        assert!(matches!(result, Err(LocaleError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_locale_id_serde() {
        let id = locale("de-CH");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""de-CH""#);
        let parsed: LocaleId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);

        let result: Result<LocaleId, _> = serde_json::from_str(r#""$$""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fallback_locale() {
        assert_eq!(LocaleId::fallback().to_string(), FALLBACK_LOCALE);
        assert_eq!(LocaleId::default(), LocaleId::fallback());
    }
}
