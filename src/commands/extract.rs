//! Extraction command handler

use anyhow::Result;
use humansize::{format_size, DECIMAL};

use coscup_extract::cli::Cli;
use coscup_extract::text::truncate_chars;
use coscup_extract::{pipeline, Extraction, LocalClock, SessionRow};

const PREVIEW_TITLE_CHARS: usize = 80;
const PREVIEW_DESCRIPTION_CHARS: usize = 100;

/// Run the extraction and report the result on stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli) -> Result<()> {
    let extraction = pipeline::run(&cli.input, cli.output_path(), &LocalClock)?;

    print_summary(&extraction);

    if cli.preview > 0 && !cli.quiet {
        println!();
        print_preview(&extraction.rows, cli.preview);
    }

    Ok(())
}

fn print_summary(extraction: &Extraction) {
    let size = std::fs::metadata(&extraction.output_path)
        .map(|m| format_size(m.len(), DECIMAL))
        .unwrap_or_else(|_| "unknown size".to_string());

    println!(
        "Extracted {} of {} sessions ({} skipped)",
        extraction.rows.len(),
        extraction.total_sessions,
        extraction.skipped.total()
    );
    println!(
        "Wrote {} ({})",
        extraction.output_path.display(),
        size
    );
}

/// Print the first `limit` rows with long text shortened.
fn print_preview(rows: &[SessionRow], limit: usize) {
    let shown = rows.len().min(limit);
    println!("Preview (first {}):", shown);
    for (i, row) in rows.iter().take(limit).enumerate() {
        println!(
            "  {}. Title: {}",
            i + 1,
            truncate_chars(&row.title, PREVIEW_TITLE_CHARS)
        );
        println!(
            "     Description: {}",
            truncate_chars(&row.description, PREVIEW_DESCRIPTION_CHARS)
        );
        println!("     URI: {}", row.uri);
    }
}
