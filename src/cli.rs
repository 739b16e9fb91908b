//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definition the binary parses.

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Long version string: crate version plus git SHA and build date when
/// the build script provided them.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("COSCUP_EXTRACT_BUILD_DATE"),
    ")"
);

/// Extract COSCUP session titles and descriptions from the conference
/// JSON export into a flat CSV, preferring Chinese text and falling back
/// to English.
#[derive(Parser, Debug)]
#[command(name = "coscup-extract", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Session detail JSON to read
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// CSV file to write
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Name the output coscup_sessions_<YYYYMMDD_HHMMSS>.csv instead of --output
    #[arg(long, conflicts_with = "output")]
    pub timestamped: bool,

    /// Number of extracted rows to preview after writing (0 disables)
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub preview: usize,

    /// Log every extracted and skipped session
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings, errors and the final result
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The explicit output path, or `None` when a timestamped name was
    /// requested.
    pub fn output_path(&self) -> Option<&std::path::Path> {
        if self.timestamped {
            None
        } else {
            Some(self.output.as_path())
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
