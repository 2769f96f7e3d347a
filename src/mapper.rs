//! Row/value mapping for wheels that pretend to be infinite.
//!
//! Every wheel exposes the same large number of rows and cycles through its
//! field range with a modulo, so a month wheel shows January..December over and
//! over. Rows handed out for a value always sit near the middle of the row
//! space to leave headroom in both scroll directions.

use crate::consts::VIRTUAL_ROW_COUNT;
use crate::types::FieldRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueMapper {
    row_count: usize,
}

impl ValueMapper {
    /// Creates a mapper over `row_count` virtual rows.
    ///
    /// `row_count` should be at least twice the longest field range, otherwise
    /// rows for late values run past the end.
    pub const fn new(row_count: usize) -> Self {
        Self { row_count }
    }

    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Field value shown at `row`: `start + row mod length`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn value_for_row(&self, row: usize, range: FieldRange) -> i32 {
        if range.length == 0 {
            return range.start;
        }
        range.start + (row % range.length as usize) as i32
    }

    /// Row showing `value`, aligned to the range's period just below the middle.
    ///
    /// Values outside the range wrap around it.
    #[allow(clippy::cast_sign_loss)]
    pub const fn row_for_value(&self, value: i32, range: FieldRange) -> usize {
        let half = self.row_count / 2;
        if range.length == 0 {
            return half;
        }
        let length = range.length as usize;
        let offset = (value as i64 - range.start as i64).rem_euclid(length as i64) as usize;
        half - half % length + offset
    }
}

impl Default for ValueMapper {
    fn default() -> Self {
        Self::new(VIRTUAL_ROW_COUNT)
    }
}
