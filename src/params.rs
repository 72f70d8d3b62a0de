//! Instrument parameters shared by every row of a run sheet.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PlateError, Result};

pub const DEFAULT_VOLUME: &str = "10";
pub const DEFAULT_EVENTS: &str = "5000";
pub const DEFAULT_TIME_LIMIT: &str = "600";
pub const DEFAULT_SPEED: &str = "1";

/// Acquisition speed, selected by a numeric speed code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Velocity {
    High,
    Medium,
    Low,
    Unspecified,
}

impl Velocity {
    /// 1, 2 and 3 select High, Medium and Low; anything else is unspecified.
    /// The code is compared as a number, so `01` is High.
    pub fn from_code(code: &str) -> Self {
        match code.trim().parse::<u32>() {
            Ok(1) => Velocity::High,
            Ok(2) => Velocity::Medium,
            Ok(3) => Velocity::Low,
            _ => Velocity::Unspecified,
        }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Velocity::High => "High",
            Velocity::Medium => "Medium",
            Velocity::Low => "Low",
            Velocity::Unspecified => "UNSPECIFIED",
        })
    }
}

/// Run parameters as typed by the user, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRunParameters {
    pub volume: String,
    pub events: String,
    pub time_limit: String,
    pub session: String,
    pub email: String,
    pub speed: String,
}

impl Default for RawRunParameters {
    fn default() -> Self {
        RawRunParameters {
            volume: DEFAULT_VOLUME.to_string(),
            events: DEFAULT_EVENTS.to_string(),
            time_limit: DEFAULT_TIME_LIMIT.to_string(),
            session: String::new(),
            email: String::new(),
            speed: DEFAULT_SPEED.to_string(),
        }
    }
}

/// Validated run parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub volume: u32,
    pub events: u32,
    pub time_limit: u32,
    pub session: String,
    pub email: String,
    pub velocity: Velocity,
}

fn check(field: &'static str, value: &str, re: &Regex, reason: &'static str) -> Result<()> {
    if re.is_match(value) {
        Ok(())
    } else {
        Err(PlateError::InvalidParameter {
            field,
            value: value.to_string(),
            reason,
        })
    }
}

fn number(field: &'static str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| PlateError::InvalidParameter {
        field,
        value: value.to_string(),
        reason: "not a number",
    })
}

impl RunParameters {
    /// Validate every field in turn, stopping at the first one that fails
    pub fn validate(raw: &RawRunParameters) -> Result<Self> {
        lazy_static! {
            static ref RE_VOLUME: Regex = Regex::new(r"^[1-9][0-9]{0,6}$").unwrap();
            static ref RE_EVENTS: Regex = Regex::new(r"^[1-9][0-9]{0,5}$").unwrap();
            static ref RE_TIME_LIMIT: Regex = Regex::new(r"^[1-9][0-9]{0,3}$").unwrap();
            static ref RE_SESSION: Regex = Regex::new(r"^[a-zA-Z0-9]{3,20}$").unwrap();
            static ref RE_EMAIL: Regex =
                Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").unwrap();
        }

        check("volume", &raw.volume, &RE_VOLUME, "must be an integer between 1 and 9999999")?;
        check("events", &raw.events, &RE_EVENTS, "must be an integer between 1 and 999999")?;
        check("time_limit", &raw.time_limit, &RE_TIME_LIMIT, "must be an integer between 1 and 9999")?;
        check("session", &raw.session, &RE_SESSION, "must be alphanumeric, 3-20 characters")?;
        check("email", &raw.email, &RE_EMAIL, "must be a valid email address")?;

        let velocity = Velocity::from_code(&raw.speed);
        if velocity == Velocity::Unspecified {
            warn!("Unknown speed code {:?}, velocity will be UNSPECIFIED", raw.speed);
        }

        Ok(RunParameters {
            volume: number("volume", &raw.volume)?,
            events: number("events", &raw.events)?,
            time_limit: number("time_limit", &raw.time_limit)?,
            session: raw.session.clone(),
            email: raw.email.clone(),
            velocity,
        })
    }
}
