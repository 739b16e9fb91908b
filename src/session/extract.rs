//! Per-record extraction from a loosely typed session object.
//!
//! Every lookup is a type-checked `serde_json::Value` access that yields
//! absence on a mismatch. The only hard failures are values that claim to
//! be text but are not (a number inside `speakers`, an object as a
//! `title`); those surface as [`RecordFault`] so the caller can skip the
//! record and carry on.

use serde_json::{Map, Value};

use super::row::SessionRow;
use crate::text::normalize;

/// Locale objects consulted for title/description, in preference order.
const LOCALES: [&str; 2] = ["zh", "en"];

/// Why a single record could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordFault {
    #[error("`{field}` contains a non-string element at position {position}")]
    NonStringElement { field: &'static str, position: usize },

    #[error("`{locale}.{field}` is not a string")]
    NonStringText {
        locale: &'static str,
        field: &'static str,
    },
}

/// Why a record produced no output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// The array element is not a JSON object.
    NotAnObject,
    /// Placeholder entry carrying only a `uri`.
    UriOnly { uri: String },
    /// Neither a title nor a description could be resolved.
    NoContent,
    /// The record was malformed.
    Fault(RecordFault),
}

impl From<RecordFault> for Skip {
    fn from(fault: RecordFault) -> Self {
        Skip::Fault(fault)
    }
}

/// Extracts one output row from a session record.
///
/// `index` is the record's 0-based position in the `sessions` array and
/// is only used for diagnostics.
pub fn extract(record: &Value, index: usize) -> Result<SessionRow, Skip> {
    let obj = record.as_object().ok_or(Skip::NotAnObject)?;

    if obj.len() == 1 {
        if let Some(uri) = obj.get("uri") {
            return Err(Skip::UriOnly {
                uri: scalar_text(Some(uri)),
            });
        }
    }

    let mut row = SessionRow {
        session_id: scalar(obj, "id"),
        uri: scalar(obj, "uri"),
        language: scalar(obj, "language"),
        start_time: scalar(obj, "start"),
        end_time: scalar(obj, "end"),
        room: scalar(obj, "room"),
        session_type: scalar(obj, "type"),
        speakers: joined(obj, "speakers")?,
        tags: joined(obj, "tags")?,
        ..Default::default()
    };

    // Fallback is per locale object, never per field: a `zh` object with
    // only a title still wins over a complete `en` object.
    if let Some((locale, texts)) = LOCALES
        .iter()
        .find_map(|locale| obj.get(*locale).and_then(Value::as_object).map(|m| (*locale, m)))
    {
        row.title = localized(texts, locale, "title")?;
        row.description = localized(texts, locale, "description")?;
    }

    if !row.has_content() {
        return Err(Skip::NoContent);
    }

    tracing::trace!(index, id = %row.session_id, "extracted session");
    Ok(row)
}

/// Renders a scalar field; anything that is not a string, number or bool
/// becomes empty.
fn scalar(obj: &Map<String, Value>, key: &str) -> String {
    scalar_text(obj.get(key))
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        _ => String::new(),
    }
}

/// Joins a string array with `", "`. A missing or non-array value is empty.
fn joined(obj: &Map<String, Value>, field: &'static str) -> Result<String, RecordFault> {
    let items = match obj.get(field).and_then(Value::as_array) {
        Some(items) => items,
        None => return Ok(String::new()),
    };

    let parts = items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            item.as_str()
                .ok_or(RecordFault::NonStringElement { field, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(parts.join(", "))
}

fn localized(
    texts: &Map<String, Value>,
    locale: &'static str,
    field: &'static str,
) -> Result<String, RecordFault> {
    match texts.get(field) {
        Some(Value::String(s)) => Ok(normalize(Some(s))),
        None => Ok(String::new()),
        Some(value) if is_blank(value) => Ok(String::new()),
        Some(_) => Err(RecordFault::NonStringText { locale, field }),
    }
}

/// `null`, `false`, zero and empty containers carry no text.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
