//! Validation errors raised while building a plate or a run sheet.

pub type Result<T> = std::result::Result<T, PlateError>;

/// Everything that can go wrong between raw user input and a finished run sheet.
///
/// None of these are retryable; the caller is expected to show the message and
/// let the user fix the input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlateError {
    /// A name block contains something other than letters, digits, underscores and newlines
    #[error("Invalid character {character:?} in {block} (line {line}, column {column}). Please enter only letters, numbers and underscores (no spaces or dashes)")]
    InvalidCharacter {
        block: &'static str,
        character: char,
        line: usize,
        column: usize,
    },

    /// More names than wells
    #[error("You can only have up to 96 entries, got {controls} controls and {samples} samples")]
    CapacityExceeded { controls: usize, samples: usize },

    /// A run parameter failed its format or range check
    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Slot {0} is outside of 1..=96")]
    SlotOutOfRange(usize),

    #[error("Not a well label: {0:?}")]
    InvalidWell(String),

    /// A manually entered well value is not a single valid name
    #[error("Invalid name {name:?} for well {well}")]
    InvalidName { well: String, name: String },
}

impl PlateError {
    /// The offending parameter, if this is a parameter error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PlateError::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}
