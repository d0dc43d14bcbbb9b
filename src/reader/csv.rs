//! Delimited-text reader.

use serde::Deserialize;
use tracing::debug;

use super::Reader;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::value::Value;

fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Deserialize)]
struct CsvParams {
    #[serde(default = "default_delimiter")]
    delimiter: char,
    #[serde(default)]
    columns: Option<Vec<String>>,
}

/// Parses delimited text into raw records
///
/// By default the first row names the fields. For headless feeds,
/// [`CsvReader::with_columns`] supplies the field names and every row is
/// data. Every cell becomes `Value::String`, untrimmed — empty cells stay
/// `""` so default-substitution translations can see them. Rows shorter
/// than the field list pad the missing fields with `Null`; extra cells
/// beyond the field list are dropped.
#[derive(Debug, Clone)]
pub struct CsvReader {
    delimiter: u8,
    columns: Option<Vec<String>>,
}

impl CsvReader {
    /// Create a reader for comma-separated data with a header row
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            columns: None,
        }
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Name the columns explicitly; the payload then has no header row
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Build from untyped registry params (`{"delimiter": ..., "columns": ...}`)
    pub fn from_params(params: &serde_json::Value) -> Result<Self> {
        let params: CsvParams = serde_json::from_value(params.clone())
            .map_err(|e| Error::definition(format!("csv reader: {e}")))?;
        if !params.delimiter.is_ascii() {
            return Err(Error::definition(format!(
                "csv reader: delimiter '{}' is not an ASCII character",
                params.delimiter
            )));
        }
        let mut reader = Self::new().delimiter(params.delimiter as u8);
        if let Some(columns) = params.columns {
            reader = reader.with_columns(columns);
        }
        Ok(reader)
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader for CsvReader {
    fn parse(&self, payload: &[u8]) -> Result<Vec<Record>> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(payload);

        let mut columns = self.columns.clone();
        let mut records = Vec::new();

        for (row_index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| {
                Error::parse(format!("malformed CSV at row {row_index}: {e}"))
            })?;

            // First row names the fields unless columns were configured
            let Some(columns) = &columns else {
                columns = Some(row.iter().map(str::to_string).collect());
                continue;
            };

            let mut record = Record::new();
            for (i, name) in columns.iter().enumerate() {
                let value = match row.get(i) {
                    Some(cell) => Value::String(cell.to_string()),
                    None => Value::Null,
                };
                record.set(name, value);
            }
            records.push(record);
        }

        debug!(records = records.len(), "parsed CSV payload");
        Ok(records)
    }
}
