use clap::arg_enum;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

use platesheet::params::RawRunParameters;
use platesheet::well::Well;

arg_enum! {
    #[derive(Debug)]
    pub enum OutputType {
        CSV,
        TSV
    }
}

impl OutputType {
    pub fn separator(&self) -> &'static str {
        match self {
            OutputType::CSV => ",",
            OutputType::TSV => "\t",
        }
    }
}

/// A manual `WELL=NAME` override, applied after the plate is populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellEdit {
    pub well: Well,
    pub name: String,
}

impl FromStr for WellEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(format!("Expected WELL=NAME, got {}", s));
        }
        let well = parts[0].parse::<Well>().map_err(|e| e.to_string())?;
        Ok(WellEdit {
            well,
            name: parts[1].to_string(),
        })
    }
}

#[derive(StructOpt, Debug)]
pub struct PlateOpt {
    /// Controls, one per line, placed first and never randomized (.txt or .xlsx, `-` for stdin)
    #[structopt(short, long, parse(from_os_str))]
    pub controls: Option<PathBuf>,

    /// Samples, one per line (.txt or .xlsx, `-` for stdin)
    #[structopt(short, long, parse(from_os_str))]
    pub samples: Option<PathBuf>,

    /// Shuffle the samples
    #[structopt(short, long)]
    pub randomize: bool,

    /// Seed for the shuffle, for reproducible layouts
    #[structopt(long)]
    pub seed: Option<u64>,

    /// Overwrite a single well after populating, e.g. --set C07=Blank (repeatable)
    #[structopt(long = "set")]
    pub edits: Vec<WellEdit>,
}

#[derive(StructOpt, Debug)]
pub struct ParamOpt {
    /// Sample volume (1-9999999)
    #[structopt(long, env = "PLATESHEET_VOLUME", default_value = "10")]
    pub volume: String,

    /// Number of events to acquire (1-999999)
    #[structopt(long, env = "PLATESHEET_EVENTS", default_value = "5000")]
    pub events: String,

    /// Time limit in seconds (1-9999)
    #[structopt(long, env = "PLATESHEET_TIME_LIMIT", default_value = "600")]
    pub time_limit: String,

    /// Speed code: 1 = High, 2 = Medium, 3 = Low
    #[structopt(long, env = "PLATESHEET_SPEED", default_value = "1")]
    pub speed: String,

    /// Session/experiment ID, alphanumeric, 3-20 characters
    #[structopt(long, env = "PLATESHEET_SESSION")]
    pub session: Option<String>,

    /// Contact email address
    #[structopt(long, env = "PLATESHEET_EMAIL")]
    pub email: Option<String>,
}

impl From<ParamOpt> for RawRunParameters {
    fn from(p: ParamOpt) -> Self {
        RawRunParameters {
            volume: p.volume,
            events: p.events,
            time_limit: p.time_limit,
            session: p.session.unwrap_or_default(),
            email: p.email.unwrap_or_default(),
            speed: p.speed,
        }
    }
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Populate the plate and print its layout
    Layout {
        #[structopt(flatten)]
        plate: PlateOpt,
    },

    /// Populate the plate and write the instrument run sheet
    Sheet {
        #[structopt(flatten)]
        plate: PlateOpt,

        #[structopt(flatten)]
        params: ParamOpt,

        /// Type of output
        #[structopt(possible_values=&OutputType::variants(), default_value="CSV", case_insensitive=true, short, long)]
        format: OutputType,

        /// Write the run sheet here instead of stdout
        #[structopt(short, long, parse(from_os_str))]
        output: Option<PathBuf>,
    },
}

#[derive(StructOpt, Debug)]
#[structopt(about = "96-well plate layout and run sheet generator")]
pub struct Opt {
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_edits() {
        let e: WellEdit = "c7=Blank".parse().unwrap();
        assert_eq!(e.well.to_string(), "C07");
        assert_eq!(e.name, "Blank");
        let cleared: WellEdit = "A01=".parse().unwrap();
        assert_eq!(cleared.name, "");
        assert!("A01".parse::<WellEdit>().is_err());
        assert!("Z01=x".parse::<WellEdit>().is_err());
    }

    #[test]
    fn sheet_defaults() {
        let opt = Opt::from_iter(&["platesheet", "sheet", "--session", "abc123", "--email", "a@b.co"]);
        match opt.cmd {
            Command::Sheet { params, format, plate, .. } => {
                let raw: RawRunParameters = params.into();
                assert_eq!(raw.session, "abc123");
                assert_eq!(format.separator(), ",");
                assert!(!plate.randomize);
                assert!(plate.controls.is_none());
            }
            _ => panic!("expected sheet command"),
        }
    }

    #[test]
    fn layout_options() {
        let opt = Opt::from_iter(&[
            "platesheet", "layout", "-s", "samples.txt", "-r", "--seed", "5", "--set", "A01=X", "--set", "B01=Y",
        ]);
        match opt.cmd {
            Command::Layout { plate } => {
                assert_eq!(plate.samples, Some(PathBuf::from("samples.txt")));
                assert!(plate.randomize);
                assert_eq!(plate.seed, Some(5));
                assert_eq!(plate.edits.len(), 2);
            }
            _ => panic!("expected layout command"),
        }
    }
}
