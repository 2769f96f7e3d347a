use serde::{Deserialize, Serialize};

use crate::appearance::WheelAppearance;
use crate::calendar::{CalendarProvider, DateValue};
use crate::locale::{LocaleError, LocaleId};
use crate::range::BoundsError;
use crate::wheel::DateWheel;

/// Declarative picker setup, e.g. loaded from a settings file.
///
/// Every field is optional; missing values fall back to the system locale,
/// the calendar's full span, the current date-time and the default appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateWheelConfig {
    pub locale:       Option<String>,
    pub minimum_date: Option<DateValue>,
    pub maximum_date: Option<DateValue>,
    pub date:         Option<DateValue>,
    pub appearance:   WheelAppearance,
}

/// Error type for building an engine from a [`DateWheelConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

impl<C: CalendarProvider> DateWheel<C> {
    /// Builds an engine from a config.
    ///
    /// # Errors
    /// Returns `ConfigError::Locale` for an unparsable locale and
    /// `ConfigError::Bounds` unless the resolved minimum is before the maximum.
    pub fn from_config(config: &DateWheelConfig, calendar: C) -> Result<Self, ConfigError> {
        let locale = config
            .locale
            .as_deref()
            .map(str::parse::<LocaleId>)
            .transpose()?;

        let minimum = config.minimum_date.unwrap_or_else(|| calendar.earliest_date());
        let maximum = config.maximum_date.unwrap_or_else(|| calendar.latest_date());

        let mut wheel = match config.date {
            Some(date) => Self::with_date(calendar, date),
            None => Self::new(calendar),
        };
        wheel.try_set_bounds(minimum, maximum)?;
        if let Some(locale) = locale {
            wheel.set_locale(locale);
        }
        log::debug!("built date wheel from config: {}", wheel.bounds());
        Ok(wheel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GregorianCalendar;
    use crate::test_utils::{date, locale};
    use crate::types::{CalendarField, DateComponents};

    #[test]
    fn test_from_config_full() {
        let json = r#"{
            "locale": "de-DE",
            "minimum_date": "2000-01-01T00:00:00",
            "maximum_date": "2030-12-31T23:59:59",
            "date": "2040-05-05T12:00:00",
            "appearance": { "font_name": "Avenir", "font_size": 17.0 }
        }"#;
        let config: DateWheelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.appearance.font_name, "Avenir");

        let wheel = DateWheel::from_config(&config, GregorianCalendar::new()).unwrap();

        assert_eq!(wheel.locale(), &locale("de-DE"));
        assert_eq!(wheel.field_order().field_at(0), Some(CalendarField::Day));
        assert_eq!(wheel.minimum_date(), date(2000, 1, 1));
        // Initial date is clamped into the configured bounds
        assert_eq!(wheel.components(), DateComponents::new(2030, 12, 31));
    }

    #[test]
    fn test_from_config_defaults() {
        let config: DateWheelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DateWheelConfig::default());

        let wheel = DateWheel::from_config(&config, GregorianCalendar::new()).unwrap();
        let calendar = GregorianCalendar::new();
        assert_eq!(wheel.minimum_date(), calendar.earliest_date());
        assert_eq!(wheel.maximum_date(), calendar.latest_date());
    }

    #[test]
    fn test_from_config_errors() {
        let config = DateWheelConfig {
            minimum_date: Some(date(2030, 1, 1)),
            maximum_date: Some(date(2000, 1, 1)),
            ..DateWheelConfig::default()
        };
        let result = DateWheel::from_config(&config, GregorianCalendar::new());
        assert!(matches!(result, Err(ConfigError::Bounds(_))));

        let config = DateWheelConfig {
            locale: Some("??".to_owned()),
            ..DateWheelConfig::default()
        };
        let result = DateWheel::from_config(&config, GregorianCalendar::new());
        assert!(matches!(result, Err(ConfigError::Locale(LocaleError::InvalidIdentifier(_)))));
    }
}
