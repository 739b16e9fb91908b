//! Session records: the flattened output row and the extractor that
//! produces it from raw JSON.

mod extract;
mod row;

pub use extract::{extract, RecordFault, Skip};
pub use row::{SessionRow, COLUMNS};
