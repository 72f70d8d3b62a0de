mod config;

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use env_logger::Env;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use platesheet::import;
use platesheet::names::NameKind;
use platesheet::params::{RawRunParameters, RunParameters};
use platesheet::plate::PlateAssignment;
use platesheet::runsheet::RunSheet;

use crate::config::{OutputType, PlateOpt};

#[macro_use]
extern crate log;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn load(path: Option<&Path>, kind: NameKind) -> Result<Vec<String>> {
    match path {
        Some(p) => import::load_names(p, kind),
        None => Ok(Vec::new()),
    }
}

/// Populate a fresh plate from the input files, then apply manual edits
fn populate(opt: &PlateOpt) -> Result<PlateAssignment> {
    let controls = load(opt.controls.as_deref(), NameKind::Controls)?;
    let samples = load(opt.samples.as_deref(), NameKind::Samples)?;

    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut plate = PlateAssignment::fill(&controls, &samples, opt.randomize, &mut rng)?;
    if opt.randomize {
        info!("Randomized the order of {} samples", samples.len());
    }

    for edit in &opt.edits {
        debug!("Setting {} to {:?}", edit.well, edit.name);
        plate.set_well(edit.well, &edit.name)?;
    }
    info!("{} of 96 wells occupied", plate.occupied());
    Ok(plate)
}

fn layout(opt: PlateOpt) -> Result<()> {
    let plate = populate(&opt)?;
    println!("{}", plate.render_grid());
    for (well, name) in plate.iter().filter(|(_, n)| n.is_some()) {
        println!("{:>2}\t{}\t{}", well.slot(), well, name.unwrap_or(""));
    }
    Ok(())
}

fn sheet(opt: PlateOpt, params: RawRunParameters, format: OutputType, output: Option<&Path>) -> Result<()> {
    let params = RunParameters::validate(&params)?;
    let plate = populate(&opt)?;
    let csv = RunSheet::new(&plate, &params).write_csv(format.separator());

    match output {
        Some(output) => {
            info!("Writing run sheet for session {} to {}...", params.session, output.display());
            File::create(output)?.write_all(csv.as_bytes())?;
        }
        None => print!("{}", csv),
    }
    Ok(())
}

fn main() -> Result<()> {
    // pick up PLATESHEET_* defaults from a local .env
    dotenv::dotenv().ok();

    let config = config::Opt::from_args();

    // set up logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match config.cmd {
        config::Command::Layout { plate } => layout(plate),

        config::Command::Sheet { plate, params, format, output } => {
            sheet(plate, params.into(), format, output.as_deref())
        }
    }
}
