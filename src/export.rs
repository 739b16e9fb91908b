//! CSV serialization of extracted rows.

use std::io::Write;
use std::path::Path;

use crate::session::{SessionRow, COLUMNS};

/// Writes a header plus one record per row to `writer`.
///
/// Fields are quoted only when they contain the delimiter, a quote or a
/// line break; embedded quotes are doubled. Records end with `\n`.
pub fn write_to<W: Write>(writer: W, rows: &[SessionRow]) -> csv::Result<()> {
    let mut out = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    out.write_record(COLUMNS)?;
    for row in rows {
        out.write_record(row.values())?;
    }
    out.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the rows as UTF-8 CSV.
pub fn write_rows(path: &Path, rows: &[SessionRow]) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_to(file, rows)
}
