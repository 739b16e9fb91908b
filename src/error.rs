//! Run-level extraction errors.

use std::path::PathBuf;

/// Errors that abort an extraction run.
///
/// Per-record problems never show up here; they are skipped and counted
/// by the pipeline instead.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid JSON ({}): {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected JSON layout in {}: no `sessions` array found", path.display())]
    SchemaMismatch { path: PathBuf },

    #[error("No sessions with a title or description found ({total} records examined)")]
    NoData { total: usize },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ExtractError {
    /// Soft failures are reported outcomes of well-formed input rather
    /// than environment or syntax problems.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. } | Self::NoData { .. })
    }
}
