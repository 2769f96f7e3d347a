//! Glue between a [`DateWheel`] and the UI that draws it.
//!
//! A host implements [`WheelHost`] to scroll its wheels; [`WheelPicker`] feeds
//! it the engine's repositions and forwards commits to registered
//! [`DateWheelDelegate`]s. Like the engine, a picker belongs to one thread:
//! delegates are not required to be `Send`.

use crate::appearance::{Rgba, WheelAppearance};
use crate::calendar::{CalendarProvider, DateValue, GregorianCalendar};
use crate::consts::WHEEL_COUNT;
use crate::locale::LocaleId;
use crate::range::BoundsError;
use crate::types::CalendarField;
use crate::wheel::{DateChange, DateWheel, Reposition, Selection, WheelLabel};

/// Wheel-drawing capability the picker drives.
pub trait WheelHost {
    /// Scrolls the wheel for `field` to `row`.
    fn reposition_wheel(&mut self, field: CalendarField, row: usize, animated: bool);

    /// Labels, order or styling changed; redraw every row.
    fn reload_wheels(&mut self) {}
}

/// Receives every committed date change.
pub trait DateWheelDelegate {
    fn date_committed(&mut self, change: &DateChange);
}

impl<F> DateWheelDelegate for F
where
    F: FnMut(&DateChange),
{
    fn date_committed(&mut self, change: &DateChange) {
        self(change);
    }
}

/// A date wheel engine wired to a host.
pub struct WheelPicker<H, C = GregorianCalendar> {
    engine:     DateWheel<C>,
    host:       H,
    appearance: WheelAppearance,
    delegates:  Vec<Box<dyn DateWheelDelegate>>,
}

impl<H, C> std::fmt::Debug for WheelPicker<H, C>
where
    H: std::fmt::Debug,
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelPicker")
            .field("engine", &self.engine)
            .field("host", &self.host)
            .field("appearance", &self.appearance)
            .field("delegates", &self.delegates.len())
            .finish()
    }
}

impl<H: WheelHost, C: CalendarProvider> WheelPicker<H, C> {
    /// Wraps an engine and moves the host's wheels to its committed date.
    pub fn new(engine: DateWheel<C>, host: H) -> Self {
        Self::with_appearance(engine, host, WheelAppearance::default())
    }

    pub fn with_appearance(engine: DateWheel<C>, host: H, appearance: WheelAppearance) -> Self {
        let mut picker = Self {
            engine,
            host,
            appearance,
            delegates: Vec::new(),
        };
        picker.reload();
        picker
    }

    pub const fn engine(&self) -> &DateWheel<C> {
        &self.engine
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (DateWheel<C>, H) {
        (self.engine, self.host)
    }

    pub const fn committed_date(&self) -> DateValue {
        self.engine.committed_date()
    }

    pub fn add_delegate(&mut self, delegate: impl DateWheelDelegate + 'static) {
        self.delegates.push(Box::new(delegate));
    }

    // --- data source queries ---

    pub const fn number_of_components(&self) -> usize {
        WHEEL_COUNT
    }

    pub const fn row_count(&self) -> usize {
        self.engine.row_count()
    }

    pub fn field_for_component(&self, component: usize) -> Option<CalendarField> {
        self.engine.field_order().field_at(component)
    }

    pub fn label_for_row(&self, field: CalendarField, row: usize) -> WheelLabel {
        self.engine.label_for_row(field, row)
    }

    // --- appearance ---

    pub const fn appearance(&self) -> &WheelAppearance {
        &self.appearance
    }

    pub fn set_appearance(&mut self, appearance: WheelAppearance) {
        self.appearance = appearance;
        self.host.reload_wheels();
    }

    pub fn set_font_name(&mut self, font_name: impl Into<String>) {
        self.appearance.font_name = font_name.into();
        self.host.reload_wheels();
    }

    pub fn set_font_size(&mut self, font_size: f64) {
        self.appearance.font_size = font_size;
        self.host.reload_wheels();
    }

    pub fn set_text_color(&mut self, color: Option<Rgba>) {
        self.appearance.text_color = color;
        self.host.reload_wheels();
    }

    pub fn set_background_color(&mut self, color: Option<Rgba>) {
        self.appearance.background_color = color;
        self.host.reload_wheels();
    }

    // --- engine operations ---

    /// Handles a row selection reported by the host.
    ///
    /// Returns the committed change, or `None` if the wheels snapped back.
    pub fn row_selected(&mut self, field: CalendarField, row: usize) -> Option<DateChange> {
        let selection = self.engine.select_row(field, row);
        self.apply(selection.repositions());
        match selection {
            Selection::Accepted { change, .. } => {
                for delegate in &mut self.delegates {
                    delegate.date_committed(&change);
                }
                Some(change)
            },
            Selection::Rejected { .. } => None,
        }
    }

    pub fn set_date(&mut self, date: DateValue, animated: bool) {
        let repositions = self.engine.set_date(date, animated);
        self.apply(&repositions);
    }

    /// Re-resolves the wheel order and resyncs every wheel.
    pub fn reload(&mut self) {
        let repositions = self.engine.reload();
        self.host.reload_wheels();
        self.apply(&repositions);
    }

    pub fn set_locale(&mut self, locale: LocaleId) {
        let repositions = self.engine.set_locale(locale);
        self.host.reload_wheels();
        self.apply(&repositions);
    }

    /// # Errors
    /// Returns `BoundsError::InvalidBounds` unless `minimum < maximum`.
    pub fn try_set_bounds(&mut self, minimum: DateValue, maximum: DateValue) -> Result<(), BoundsError> {
        let repositions = self.engine.try_set_bounds(minimum, maximum)?;
        self.apply(&repositions);
        Ok(())
    }

    /// # Panics
    /// Panics unless `minimum < maximum`.
    pub fn set_bounds(&mut self, minimum: DateValue, maximum: DateValue) {
        let repositions = self.engine.set_bounds(minimum, maximum);
        self.apply(&repositions);
    }

    /// # Panics
    /// Panics unless `minimum` is before the current maximum date.
    pub fn set_minimum_date(&mut self, minimum: DateValue) {
        let repositions = self.engine.set_minimum_date(minimum);
        self.apply(&repositions);
    }

    /// # Panics
    /// Panics unless `maximum` is after the current minimum date.
    pub fn set_maximum_date(&mut self, maximum: DateValue) {
        let repositions = self.engine.set_maximum_date(maximum);
        self.apply(&repositions);
    }

    fn apply(&mut self, repositions: &[Reposition]) {
        for reposition in repositions {
            self.host
                .reposition_wheel(reposition.field, reposition.row, reposition.animated);
        }
    }
}
