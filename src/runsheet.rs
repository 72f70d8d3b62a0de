//! This module renders a filled plate into the flat run sheet read by the
//! acquisition software: one row per well, 96 rows in slot order.

use crate::params::{RunParameters, Velocity};
use crate::plate::PlateAssignment;
use crate::well::Well;

// Fixed protocol fields, identical on every row
const GAIN: &str = "1.00";
const DELAY: &str = "600";
const MIX: &str = "No";
const CLEAN: &str = "Yes";
const MIX_CYCLES: &str = "3";

/// One line of a run sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSheetRow {
    /// Empty if nothing is in the well
    pub name: String,
    pub well: Well,
    pub volume: u32,
    pub events: u32,
    pub velocity: Velocity,
}

impl RunSheetRow {
    /// All ten fields, in sheet order
    pub fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.well.to_string(),
            self.volume.to_string(),
            GAIN.to_string(),
            self.events.to_string(),
            DELAY.to_string(),
            MIX.to_string(),
            CLEAN.to_string(),
            MIX_CYCLES.to_string(),
            self.velocity.to_string(),
        ]
    }
}

/// A complete run sheet for one plate
#[derive(Debug)]
pub struct RunSheet {
    pub rows: Vec<RunSheetRow>,
}

impl RunSheet {
    /// Build a row for every well, occupied or not
    pub fn new(plate: &PlateAssignment, params: &RunParameters) -> Self {
        RunSheet {
            rows: plate
                .iter()
                .map(|(well, name)| RunSheetRow {
                    name: name.unwrap_or("").to_string(),
                    well,
                    volume: params.volume,
                    events: params.events,
                    velocity: params.velocity,
                })
                .collect(),
        }
    }

    /// Render all rows, each terminated by a newline
    pub fn write_csv(&self, separator: &str) -> String {
        let mut csv = String::new();
        for row in &self.rows {
            csv += &row.fields().join(separator);
            csv += "\n";
        }
        csv
    }
}
