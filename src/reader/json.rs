//! JSON reader.

use serde_json::Value as Json;
use tracing::debug;

use super::Reader;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::value::Value;

/// Parses a JSON payload into raw records
///
/// Accepts either a top-level array of objects or newline-delimited
/// objects (NDJSON). Scalars map directly onto [`Value`]; nested objects
/// flatten into dotted field paths (`user.name`), and arrays render as
/// their JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl JsonReader {
    /// Create the reader
    pub fn new() -> Self {
        Self
    }

    fn record_from_object(object: &Json, index: usize) -> Result<Record> {
        let Json::Object(_) = object else {
            return Err(Error::parse(format!(
                "expected a JSON object at record {index}, found {object}"
            )));
        };
        let mut record = Record::new();
        flatten("", object, &mut record);
        Ok(record)
    }
}

/// Flatten a JSON object into dotted field paths on a record
fn flatten(prefix: &str, json: &Json, record: &mut Record) {
    match json {
        Json::Object(map) => {
            for (key, value) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, value, record);
            }
        }
        scalar => record.set(prefix, Value::from_json(scalar)),
    }
}

impl Reader for JsonReader {
    fn parse(&self, payload: &[u8]) -> Result<Vec<Record>> {
        let text = std::str::from_utf8(payload)
            .map_err(|e| Error::parse(format!("payload is not UTF-8: {e}")))?;
        let trimmed = text.trim_start();

        let mut records = Vec::new();
        if trimmed.starts_with('[') {
            let rows: Vec<Json> = serde_json::from_str(trimmed)
                .map_err(|e| Error::parse(format!("malformed JSON array: {e}")))?;
            for (index, row) in rows.iter().enumerate() {
                records.push(Self::record_from_object(row, index)?);
            }
        } else {
            for (index, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
                let row: Json = serde_json::from_str(line)
                    .map_err(|e| Error::parse(format!("malformed JSON at line {index}: {e}")))?;
                records.push(Self::record_from_object(&row, index)?);
            }
        }

        debug!(records = records.len(), "parsed JSON payload");
        Ok(records)
    }
}
