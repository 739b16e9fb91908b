//! The extraction run: load the document, extract every session, write
//! the CSV.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ExtractError;
use crate::export;
use crate::files::filename::{self, Clock};
use crate::session::{self, SessionRow, Skip};

/// Default input document name.
pub const DEFAULT_INPUT: &str = "coscup_detail.json";

/// Output name used by the reference invocation.
pub const DEFAULT_OUTPUT: &str = "coscup_sessions_extracted.csv";

/// How many records were skipped, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub not_an_object: usize,
    pub uri_only: usize,
    pub no_content: usize,
    pub faults: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.not_an_object + self.uri_only + self.no_content + self.faults
    }

    fn record(&mut self, skip: &Skip) {
        match skip {
            Skip::NotAnObject => self.not_an_object += 1,
            Skip::UriOnly { .. } => self.uri_only += 1,
            Skip::NoContent => self.no_content += 1,
            Skip::Fault(_) => self.faults += 1,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Where the CSV was written.
    pub output_path: PathBuf,
    /// Number of elements in the `sessions` array.
    pub total_sessions: usize,
    /// Rows written, in input order.
    pub rows: Vec<SessionRow>,
    pub skipped: SkipCounts,
}

/// Rows extracted from a document, before anything is written.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub total_sessions: usize,
    pub rows: Vec<SessionRow>,
    pub skipped: SkipCounts,
}

/// Runs a full extraction from `input` to `output`.
///
/// With `output = None` the file is named after `clock.now()`. No file is
/// created unless at least one session qualifies.
pub fn run(
    input: &Path,
    output: Option<&Path>,
    clock: &dyn Clock,
) -> Result<Extraction, ExtractError> {
    let output_path = filename::resolve_output(output, clock);

    let document = load(input)?;
    tracing::info!(path = %input.display(), "loaded input");

    let sessions = sessions(&document).ok_or_else(|| ExtractError::SchemaMismatch {
        path: input.to_path_buf(),
    })?;

    let collected = collect(sessions);
    if collected.rows.is_empty() {
        return Err(ExtractError::NoData {
            total: collected.total_sessions,
        });
    }

    export::write_rows(&output_path, &collected.rows).map_err(|source| ExtractError::Write {
        path: output_path.clone(),
        source,
    })?;

    tracing::info!(
        rows = collected.rows.len(),
        skipped = collected.skipped.total(),
        path = %output_path.display(),
        "wrote CSV"
    );

    Ok(Extraction {
        output_path,
        total_sessions: collected.total_sessions,
        rows: collected.rows,
        skipped: collected.skipped,
    })
}

/// Reads and parses the input document.
pub fn load(input: &Path) -> Result<Value, ExtractError> {
    let bytes = std::fs::read(input).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExtractError::NotFound {
            path: input.to_path_buf(),
        },
        _ => ExtractError::Read {
            path: input.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ExtractError::MalformedInput {
        path: input.to_path_buf(),
        source,
    })
}

/// The `sessions` array, if the document has one.
pub fn sessions(document: &Value) -> Option<&[Value]> {
    document
        .as_object()?
        .get("sessions")?
        .as_array()
        .map(Vec::as_slice)
}

/// Extracts every session in order, skipping (and counting) the ones that
/// do not qualify.
pub fn collect(sessions: &[Value]) -> Collected {
    let mut collected = Collected {
        total_sessions: sessions.len(),
        ..Default::default()
    };

    for (index, record) in sessions.iter().enumerate() {
        match session::extract(record, index) {
            Ok(row) => {
                tracing::debug!(
                    "extracted session {}: {}",
                    index + 1,
                    crate::text::truncate_chars(&row.title, 50)
                );
                collected.rows.push(row);
            }
            Err(skip) => {
                match &skip {
                    Skip::UriOnly { uri } => {
                        tracing::info!("skipping session {} with only a URI: {}", index + 1, uri)
                    }
                    Skip::Fault(fault) => {
                        tracing::warn!("skipping malformed session {}: {}", index + 1, fault)
                    }
                    Skip::NotAnObject => {
                        tracing::debug!("skipping session {}: not an object", index + 1)
                    }
                    Skip::NoContent => {
                        tracing::debug!("skipping session {}: no title or description", index + 1)
                    }
                }
                collected.skipped.record(&skip);
            }
        }
    }

    collected
}
