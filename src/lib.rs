//! coscup-extract - flatten COSCUP session details into CSV
//!
//! Reads the conference's session JSON, resolves each session's title and
//! description (Chinese first, English as a whole-object fallback), and
//! writes the qualifying sessions as an eleven-column CSV.
//!
//! # Module Structure
//!
//! - [`text`] - whitespace normalization for free text
//! - [`session`] - output row and per-record extraction
//! - [`export`] - CSV writer
//! - [`pipeline`] - load, extract, write
//! - [`files`] - output file naming
//! - [`error`] - run-level errors
//! - [`cli`] - command-line definition

pub mod cli;
pub mod error;
pub mod export;
pub mod files;
pub mod pipeline;
pub mod session;
pub mod text;

pub use error::ExtractError;
pub use files::filename::{Clock, FixedClock, LocalClock};
pub use pipeline::{run, Extraction, SkipCounts};
pub use session::{SessionRow, COLUMNS};
