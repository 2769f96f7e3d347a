use serde::{Deserialize, Serialize};

use crate::{calendar::DateValue, prelude::*};

/// Inclusive bounds a committed date must stay within.
/// The minimum must be strictly earlier than the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{minimum}/{maximum}")]
#[serde(try_from = "RawBounds")]
pub struct DateBounds {
    minimum: DateValue,
    maximum: DateValue,
}

/// Error type for date bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Minimum is not strictly before maximum.
    #[error("Invalid date bounds: minimum ({minimum}) must be earlier than maximum ({maximum})")]
    InvalidBounds {
        minimum: DateValue,
        maximum: DateValue,
    },
}

impl DateBounds {
    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::InvalidBounds` unless `minimum < maximum`.
    pub fn new(minimum: DateValue, maximum: DateValue) -> Result<Self, BoundsError> {
        if minimum >= maximum {
            return Err(BoundsError::InvalidBounds { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    pub const fn minimum(&self) -> DateValue {
        self.minimum
    }

    pub const fn maximum(&self) -> DateValue {
        self.maximum
    }

    /// Returns a copy with a new minimum.
    ///
    /// # Errors
    /// Returns `BoundsError::InvalidBounds` if it is not before the current maximum.
    pub fn with_minimum(&self, minimum: DateValue) -> Result<Self, BoundsError> {
        Self::new(minimum, self.maximum)
    }

    /// Returns a copy with a new maximum.
    ///
    /// # Errors
    /// Returns `BoundsError::InvalidBounds` if it is not after the current minimum.
    pub fn with_maximum(&self, maximum: DateValue) -> Result<Self, BoundsError> {
        Self::new(self.minimum, maximum)
    }

    /// Checks if the bounds contain a given date, both ends inclusive.
    /// Compares full date-times, not calendar days.
    pub fn contains(&self, date: &DateValue) -> bool {
        self.minimum <= *date && *date <= self.maximum
    }

    /// Moves a date to the nearest bound if it lies outside.
    pub fn clamp(&self, date: DateValue) -> DateValue {
        date.clamp(self.minimum, self.maximum)
    }
}

#[derive(Deserialize)]
struct RawBounds {
    minimum: DateValue,
    maximum: DateValue,
}

impl TryFrom<RawBounds> for DateBounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.minimum, raw.maximum)
    }
}
