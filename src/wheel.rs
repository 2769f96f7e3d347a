//! The date wheel engine.
//!
//! [`DateWheel`] holds the committed date, its bounds and the locale-derived
//! wheel order, and turns "row `r` selected on the wheel for field `F`" into
//! either a new committed date or a snap-back to the old one. It never draws
//! anything; every operation returns the wheel [`Reposition`]s the host should
//! perform.
//!
//! The engine is meant to be driven from a single (UI) thread. Nothing in it
//! blocks, and no call depends on a previous reposition having finished.

use chrono::Local;
use log::{debug, warn};

use crate::calendar::{CalendarProvider, DateValue, GregorianCalendar};
use crate::consts::WHEEL_COUNT;
use crate::locale::{FieldOrder, LocaleId, resolve_locale_order};
use crate::mapper::ValueMapper;
use crate::range::{BoundsError, DateBounds};
use crate::types::{CalendarField, DateComponents, FieldRange};

/// Request to scroll one wheel to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reposition {
    pub field:    CalendarField,
    pub row:      usize,
    pub animated: bool,
}

/// A committed change, reported once per accepted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateChange {
    /// Wheel the user moved
    pub field:     CalendarField,
    /// Display position of that wheel
    pub component: usize,
    /// Row the user selected on that wheel
    pub row:       usize,
    /// Committed value of `field`, after clamping
    pub value:     i32,
    /// The newly committed date
    pub date:      DateValue,
}

/// Outcome of a row selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The candidate date was committed; dependent wheels may need to move.
    Accepted {
        change:      DateChange,
        repositions: Vec<Reposition>,
    },
    /// The candidate date was out of bounds; every wheel snaps back.
    Rejected { repositions: Vec<Reposition> },
}

impl Selection {
    pub fn repositions(&self) -> &[Reposition] {
        match self {
            Self::Accepted { repositions, .. } | Self::Rejected { repositions } => repositions.as_slice(),
        }
    }

    pub const fn change(&self) -> Option<&DateChange> {
        match self {
            Self::Accepted { change, .. } => Some(change),
            Self::Rejected { .. } => None,
        }
    }

    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Per-wheel view of the engine: the selected row and the values valid for the
/// committed date (the day range depends on the committed month and year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WheelState {
    pub row:   usize,
    pub range: FieldRange,
}

/// Text for one wheel row, and whether the value exists in the committed month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WheelLabel {
    pub text:    String,
    pub enabled: bool,
}

/// Date computation engine behind a month/day/year wheel picker.
#[derive(Debug, Clone)]
pub struct DateWheel<C = GregorianCalendar> {
    calendar:      C,
    mapper:        ValueMapper,
    committed:     DateValue,
    bounds:        DateBounds,
    locale:        LocaleId,
    order:         FieldOrder,
    month_symbols: [String; 12],
    rows:          [usize; WHEEL_COUNT],
}

impl Default for DateWheel<GregorianCalendar> {
    fn default() -> Self {
        Self::new(GregorianCalendar::new())
    }
}

impl<C: CalendarProvider> DateWheel<C> {
    /// Creates an engine showing the current local date-time in the system locale.
    ///
    /// # Panics
    /// Panics if the calendar's earliest date is not before its latest date.
    pub fn new(calendar: C) -> Self {
        let now = Local::now().naive_local();
        Self::with_date(calendar, now)
    }

    /// Creates an engine showing `date` (clamped into the calendar's span) in
    /// the system locale.
    ///
    /// # Panics
    /// Panics if the calendar's earliest date is not before its latest date.
    pub fn with_date(calendar: C, date: DateValue) -> Self {
        let bounds = DateBounds::new(calendar.earliest_date(), calendar.latest_date())
            .unwrap_or_else(|err| panic!("calendar reports an empty date span: {err}"));
        let locale = LocaleId::current();
        let month_symbols = calendar.month_symbols(&locale);
        let mut wheel = Self {
            calendar,
            mapper: ValueMapper::default(),
            committed: bounds.clamp(date),
            bounds,
            locale,
            order: FieldOrder::default(),
            month_symbols,
            rows: [0; WHEEL_COUNT],
        };
        wheel.reload();
        wheel
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The last accepted date
    pub const fn committed_date(&self) -> DateValue {
        self.committed
    }

    pub const fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub const fn minimum_date(&self) -> DateValue {
        self.bounds.minimum()
    }

    pub const fn maximum_date(&self) -> DateValue {
        self.bounds.maximum()
    }

    pub const fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub const fn field_order(&self) -> FieldOrder {
        self.order
    }

    /// Number of rows every wheel exposes
    pub const fn row_count(&self) -> usize {
        self.mapper.row_count()
    }

    pub const fn selected_row(&self, field: CalendarField) -> usize {
        self.rows[field.index()]
    }

    pub fn wheel_state(&self, field: CalendarField) -> WheelState {
        let range = match field {
            CalendarField::Day => {
                let current = self.components();
                self.calendar.day_range(current.month, current.year)
            }
            CalendarField::Year | CalendarField::Month => self.calendar.field_range(field),
        };
        WheelState {
            row: self.selected_row(field),
            range,
        }
    }

    /// Year, month and day of the committed date
    pub fn components(&self) -> DateComponents {
        self.calendar.components(&self.committed)
    }

    /// Field value shown at `row`, over the field's largest possible range
    pub fn value_for_row(&self, field: CalendarField, row: usize) -> i32 {
        self.mapper.value_for_row(row, self.calendar.field_range(field))
    }

    /// Middle-of-the-wheel row showing `value`
    pub fn row_for_value(&self, field: CalendarField, value: i32) -> usize {
        self.mapper.row_for_value(value, self.calendar.field_range(field))
    }

    pub fn is_in_range(&self, date: &DateValue) -> bool {
        self.bounds.contains(date)
    }

    /// Label for a row; day values missing from the committed month are disabled.
    pub fn label_for_row(&self, field: CalendarField, row: usize) -> WheelLabel {
        let value = self.value_for_row(field, row);
        let text = match field {
            CalendarField::Month => usize::try_from(value - 1)
                .ok()
                .and_then(|index| self.month_symbols.get(index))
                .cloned()
                .unwrap_or_else(|| value.to_string()),
            CalendarField::Year | CalendarField::Day => value.to_string(),
        };
        WheelLabel {
            text,
            enabled: self.wheel_state(field).range.contains(value),
        }
    }

    /// Replaces the bounds, clamping the committed date into them.
    ///
    /// Returns the repositions needed if the committed date moved.
    ///
    /// # Errors
    /// Returns `BoundsError::InvalidBounds` unless `minimum < maximum`; the
    /// engine is left unchanged.
    pub fn try_set_bounds(&mut self, minimum: DateValue, maximum: DateValue) -> Result<Vec<Reposition>, BoundsError> {
        let bounds = DateBounds::new(minimum, maximum)?;
        Ok(self.apply_bounds(bounds))
    }

    /// Replaces the bounds, clamping the committed date into them.
    ///
    /// # Panics
    /// Panics unless `minimum < maximum`. Misordered bounds are a caller bug.
    pub fn set_bounds(&mut self, minimum: DateValue, maximum: DateValue) -> Vec<Reposition> {
        self.try_set_bounds(minimum, maximum)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics unless `minimum` is before the current maximum date.
    pub fn set_minimum_date(&mut self, minimum: DateValue) -> Vec<Reposition> {
        self.set_bounds(minimum, self.bounds.maximum())
    }

    /// # Panics
    /// Panics unless `maximum` is after the current minimum date.
    pub fn set_maximum_date(&mut self, maximum: DateValue) -> Vec<Reposition> {
        self.set_bounds(self.bounds.minimum(), maximum)
    }

    /// Commits `date` (clamped into bounds) and moves every wheel to it.
    pub fn set_date(&mut self, date: DateValue, animated: bool) -> Vec<Reposition> {
        let clamped = self.bounds.clamp(date);
        if clamped != date {
            debug!("set_date {date} clamped to {clamped}");
        }
        self.committed = clamped;
        self.sync_rows(animated)
    }

    /// Switches locale and reloads.
    pub fn set_locale(&mut self, locale: LocaleId) -> Vec<Reposition> {
        self.locale = locale;
        self.reload()
    }

    /// Recomputes the wheel order from the locale and moves every wheel to the
    /// committed date without animation.
    ///
    /// If the locale's pattern cannot be decoded the previous order is kept.
    pub fn reload(&mut self) -> Vec<Reposition> {
        match resolve_locale_order(&self.calendar, &self.locale) {
            Ok(order) => self.order = order,
            Err(err) => warn!("keeping wheel order {} for locale {}: {err}", self.order, self.locale),
        }
        self.month_symbols = self.calendar.month_symbols(&self.locale);
        debug!("reloaded wheels in {} order for {}", self.order, self.locale);
        self.sync_rows(false)
    }

    /// Handles the host reporting that `row` was selected on the wheel for `field`.
    pub fn select_row(&mut self, field: CalendarField, row: usize) -> Selection {
        let value = self.value_for_row(field, row);
        log::trace!("{field} wheel selected row {row} (value {value})");
        self.rows[field.index()] = row;

        let raw = self.components().with(field, value);
        let valid = self.clamp_day(raw);
        let candidate = self
            .calendar
            .date_from(valid, self.committed.time())
            .filter(|date| self.bounds.contains(date));

        let Some(date) = candidate else {
            debug!("rejected {valid} from {field} wheel, reverting to {}", self.committed);
            return Selection::Rejected {
                repositions: self.sync_rows(true),
            };
        };

        let repositions: Vec<Reposition> = raw
            .differing_fields(&valid)
            .into_iter()
            .map(|dependent| {
                let animated = match dependent {
                    CalendarField::Day => !self
                        .calendar
                        .day_range(raw.month, raw.year)
                        .contains(raw.get(CalendarField::Day)),
                    CalendarField::Year | CalendarField::Month => dependent != field,
                };
                Reposition {
                    field: dependent,
                    row: self.row_for_value(dependent, valid.get(dependent)),
                    animated,
                }
            })
            .collect();
        for reposition in &repositions {
            self.rows[reposition.field.index()] = reposition.row;
        }

        self.committed = date;
        debug!("committed {date} from {field} wheel");
        Selection::Accepted {
            change: DateChange {
                field,
                component: self.order.position(field),
                row,
                value: valid.get(field),
                date,
            },
            repositions,
        }
    }

    /// Clamps the day to the last day of the (possibly new) month and year.
    fn clamp_day(&self, raw: DateComponents) -> DateComponents {
        let days = self.calendar.day_range(raw.month, raw.year);
        if days.contains(raw.get(CalendarField::Day)) {
            return raw;
        }
        DateComponents {
            day: u32::try_from(days.end()).unwrap_or(0),
            ..raw
        }
    }

    fn apply_bounds(&mut self, bounds: DateBounds) -> Vec<Reposition> {
        self.bounds = bounds;
        if bounds.contains(&self.committed) {
            return Vec::new();
        }
        let clamped = bounds.clamp(self.committed);
        debug!("bounds {bounds} moved committed date {} to {clamped}", self.committed);
        self.committed = clamped;
        self.sync_rows(false)
    }

    /// Points every wheel at the committed date, in display order.
    fn sync_rows(&mut self, animated: bool) -> Vec<Reposition> {
        let current = self.components();
        self.order
            .fields()
            .into_iter()
            .map(|field| {
                let row = self.row_for_value(field, current.get(field));
                self.rows[field.index()] = row;
                Reposition { field, row, animated }
            })
            .collect()
    }
}
