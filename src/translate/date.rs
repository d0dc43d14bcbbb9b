//! Calendar date coercion.

use chrono::NaiveDate;
use serde::Deserialize;

use super::{Translate, TranslateError};
use crate::value::Value;

/// Default parse format for [`Date`]
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct DateParams {
    #[serde(default)]
    format: Option<String>,
}

/// Coerces a value to `Date`
///
/// Blank values become `Null`; `Date` passes through and `DateTime`
/// drops its time component. Strings are trimmed and parsed with the
/// configured format (default `%Y-%m-%d`); parse failure is a
/// translation error.
#[derive(Debug, Clone)]
pub struct Date {
    format: String,
}

impl Date {
    /// Create the translation with the default format
    pub fn new() -> Self {
        Self::with_format(DEFAULT_FORMAT)
    }

    /// Create the translation with an explicit chrono format string
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Build from untyped registry params (`{"format": "%d/%m/%Y"}`)
    pub fn from_params(params: &serde_json::Value) -> crate::Result<Self> {
        let params: DateParams = serde_json::from_value(params.clone())
            .map_err(|e| crate::Error::definition(format!("date translation: {e}")))?;
        Ok(match params.format {
            Some(format) => Self::with_format(format),
            None => Self::new(),
        })
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new()
    }
}

impl Translate for Date {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        if value.is_blank() {
            return Ok(Value::Null);
        }
        match value {
            Value::Date(_) => Ok(value),
            Value::DateTime(dt) => Ok(Value::Date(dt.date())),
            Value::String(s) => NaiveDate::parse_from_str(s.trim(), &self.format)
                .map(Value::Date)
                .map_err(|e| {
                    TranslateError::new(format!(
                        "invalid date '{s}' (expected {}): {e}",
                        self.format
                    ))
                }),
            other => Err(TranslateError::new(format!(
                "cannot coerce {other:?} to date"
            ))),
        }
    }
}
