//! Sample plate layout and run sheet generation for 96-well plates.
//!
//! Names are validated ([`names`]), placed on a plate in column-major fill
//! order ([`plate`], [`well`]) and rendered into a run sheet for the
//! acquisition software ([`runsheet`]) using validated instrument
//! parameters ([`params`]).

#[macro_use]
extern crate log;

pub mod error;
pub mod import;
pub mod names;
pub mod params;
pub mod plate;
pub mod runsheet;
pub mod well;

pub use error::{PlateError, Result};
