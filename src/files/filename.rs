//! Output filename generation.
//!
//! The default output name embeds the run's start time, so the clock is a
//! trait: production uses the local wall clock and tests pin a timestamp.

use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

/// Prefix of generated output filenames.
const PREFIX: &str = "coscup_sessions";

/// Timestamp format embedded in generated filenames.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant (for tests and reproducible runs).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Generates `coscup_sessions_<YYYYMMDD_HHMMSS>.csv` for the given time.
pub fn timestamped(at: NaiveDateTime) -> String {
    format!("{}_{}.csv", PREFIX, at.format(TIMESTAMP_FORMAT))
}

/// Resolves the output path: the explicit one if given, otherwise a
/// timestamped name in the working directory.
pub fn resolve_output(explicit: Option<&std::path::Path>, clock: &dyn Clock) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(timestamped(clock.now())),
    }
}
