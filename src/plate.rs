//! Assignment of control and sample names to the wells of a plate.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PlateError, Result};
use crate::names::is_valid_name;
use crate::well::{Well, COLUMNS, ROWS, WELLS};

/// The contents of all 96 wells, indexed by slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateAssignment {
    /// `slots[i]` holds the name placed at slot `i + 1`
    slots: Vec<Option<String>>,
}

impl Default for PlateAssignment {
    fn default() -> Self {
        PlateAssignment::new()
    }
}

impl PlateAssignment {
    /// An empty plate
    pub fn new() -> Self {
        PlateAssignment {
            slots: vec![None; WELLS],
        }
    }

    /// Fill a fresh plate: controls first, in the given order, then the samples,
    /// shuffled with `rng` if `randomize` is set.
    ///
    /// Fails without touching anything if the names don't fit on one plate or
    /// one of them is not a valid name (see `parse_name_block`).
    pub fn fill<R: Rng + ?Sized>(
        controls: &[String],
        samples: &[String],
        randomize: bool,
        rng: &mut R,
    ) -> Result<Self> {
        if controls.len() + samples.len() > WELLS {
            return Err(PlateError::CapacityExceeded {
                controls: controls.len(),
                samples: samples.len(),
            });
        }

        let mut samples = samples.to_vec();
        if randomize {
            samples.shuffle(rng);
        }

        let mut plate = PlateAssignment::new();
        for (idx, (slot, name)) in plate
            .slots
            .iter_mut()
            .zip(controls.iter().chain(samples.iter()))
            .enumerate()
        {
            if !is_valid_name(name) {
                return Err(PlateError::InvalidName {
                    well: Well::from_slot(idx + 1)?.to_string(),
                    name: name.clone(),
                });
            }
            *slot = Some(name.clone());
        }
        debug!(
            "Placed {} controls and {} samples ({} wells free)",
            controls.len(),
            samples.len(),
            WELLS - plate.occupied()
        );
        Ok(plate)
    }

    /// Name at `slot` (1-based)
    pub fn get_slot(&self, slot: usize) -> Result<Option<&str>> {
        Well::from_slot(slot)?;
        Ok(self.slots[slot - 1].as_deref())
    }

    pub fn get(&self, well: Well) -> Option<&str> {
        self.slots[well.slot() - 1].as_deref()
    }

    /// Overwrite a single well by hand. An empty name clears the well.
    pub fn set_well(&mut self, well: Well, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            self.slots[well.slot() - 1] = None;
            return Ok(());
        }
        if !is_valid_name(name) {
            return Err(PlateError::InvalidName {
                well: well.to_string(),
                name: name.to_string(),
            });
        }
        self.slots[well.slot() - 1] = Some(name.to_string());
        Ok(())
    }

    /// Number of occupied wells
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// All wells with their contents, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Well, Option<&str>)> + '_ {
        Well::all().zip(self.slots.iter().map(|s| s.as_deref()))
    }

    /// Text table of the plate as it sits on the bench, rows A-H by columns 1-12
    pub fn render_grid(&self) -> String {
        let mut cells = vec![""; WELLS];
        for (well, name) in self.iter() {
            cells[well.grid_cell() - 1] = name.unwrap_or("");
        }
        let width = cells.iter().map(|c| c.len()).max().unwrap_or(0).max(2);

        let mut grid = String::from(" ");
        for column in 1..=COLUMNS {
            grid += &format!(" {:>width$}", format!("{:02}", column), width = width);
        }
        grid += "\n";
        for (row_idx, row) in cells.chunks(COLUMNS).enumerate().take(ROWS) {
            grid.push((b'A' + row_idx as u8) as char);
            for cell in row {
                let cell = if cell.is_empty() { "." } else { cell };
                grid += &format!(" {:>width$}", cell, width = width);
            }
            grid += "\n";
        }
        grid
    }
}
