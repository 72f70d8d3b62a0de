//! Addressing of the 96 wells of a microplate.
//!
//! Plates are filled column by column: slot 1 is A01, slot 8 is H01, slot 9 is
//! A02 and slot 96 is H12. The display grid on the other hand is laid out row by
//! row (A01, A02, ..., A12, B01, ...), so a well has both a slot and a grid cell.

use std::fmt;
use std::str::FromStr;

use crate::error::{PlateError, Result};

pub const ROWS: usize = 8;
pub const COLUMNS: usize = 12;
pub const WELLS: usize = ROWS * COLUMNS;

const ROW_LETTERS: [char; ROWS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// A physical well, row and column both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Well {
    row: usize,
    column: usize,
}

/// Row letter and column number of the well filled at `slot`.
pub fn well_label(slot: usize) -> Result<(char, usize)> {
    let well = Well::from_slot(slot)?;
    Ok((well.row_letter(), well.column()))
}

impl Well {
    pub fn new(row: usize, column: usize) -> Result<Self> {
        if !(1..=ROWS).contains(&row) || !(1..=COLUMNS).contains(&column) {
            return Err(PlateError::InvalidWell(format!("row {}, column {}", row, column)));
        }
        Ok(Well { row, column })
    }

    /// Slot (fill order) to well
    pub fn from_slot(slot: usize) -> Result<Self> {
        if !(1..=WELLS).contains(&slot) {
            return Err(PlateError::SlotOutOfRange(slot));
        }
        Ok(Well {
            row: (slot - 1) % ROWS + 1,
            column: (slot - 1) / ROWS + 1,
        })
    }

    /// Well to slot (fill order), the inverse of `from_slot`
    pub fn slot(&self) -> usize {
        (self.column - 1) * ROWS + self.row
    }

    /// 1-based index into the row-major 8x12 display grid
    pub fn grid_cell(&self) -> usize {
        (self.row - 1) * COLUMNS + self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row_letter(&self) -> char {
        ROW_LETTERS[self.row - 1]
    }

    /// All wells in fill order
    pub fn all() -> impl Iterator<Item = Well> {
        (1..=WELLS).map(|slot| Well {
            row: (slot - 1) % ROWS + 1,
            column: (slot - 1) / ROWS + 1,
        })
    }
}

/// Renders the label used on run sheets, e.g. `C07`
impl fmt::Display for Well {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.row_letter(), self.column)
    }
}

/// Accepts `C07`, `c7` and `C 07`
impl FromStr for Well {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        let mut chars = label.chars();
        let letter = chars.next().map(|c| c.to_ascii_uppercase());
        let row = letter
            .and_then(|l| ROW_LETTERS.iter().position(|&r| r == l))
            .ok_or_else(|| PlateError::InvalidWell(s.to_string()))?;
        let digits = chars.as_str().trim();
        if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlateError::InvalidWell(s.to_string()));
        }
        let column = digits
            .parse::<usize>()
            .map_err(|_| PlateError::InvalidWell(s.to_string()))?;
        Well::new(row + 1, column).map_err(|_| PlateError::InvalidWell(s.to_string()))
    }
}
