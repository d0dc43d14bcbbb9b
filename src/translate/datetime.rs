//! Date-and-time coercion.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{Translate, TranslateError};
use crate::value::Value;

/// Default parse format for [`DateTime`]
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO-8601 fallback tried when the configured format does not match
const ISO_FALLBACK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Deserialize)]
struct DateTimeParams {
    #[serde(default)]
    format: Option<String>,
}

/// Coerces a value to `DateTime`
///
/// Blank values become `Null`; `DateTime` passes through. Strings are
/// trimmed and parsed with the configured format (default
/// `%Y-%m-%d %H:%M:%S`), falling back to the ISO-8601 `T` separator;
/// parse failure is a translation error.
#[derive(Debug, Clone)]
pub struct DateTime {
    format: String,
}

impl DateTime {
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

    /// Build from untyped registry params (`{"format": "..."}`)
    pub fn from_params(params: &serde_json::Value) -> crate::Result<Self> {
        let params: DateTimeParams = serde_json::from_value(params.clone())
            .map_err(|e| crate::Error::definition(format!("datetime translation: {e}")))?;
        Ok(match params.format {
            Some(format) => Self::with_format(format),
            None => Self::new(),
        })
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Translate for DateTime {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        if value.is_blank() {
            return Ok(Value::Null);
        }
        match value {
            Value::DateTime(_) => Ok(value),
            Value::String(s) => {
                let trimmed = s.trim();
                NaiveDateTime::parse_from_str(trimmed, &self.format)
                    .or_else(|_| NaiveDateTime::parse_from_str(trimmed, ISO_FALLBACK_FORMAT))
                    .map(Value::DateTime)
                    .map_err(|e| {
                        TranslateError::new(format!(
                            "invalid datetime '{s}' (expected {}): {e}",
                            self.format
                        ))
                    })
            }
            other => Err(TranslateError::new(format!(
                "cannot coerce {other:?} to datetime"
            ))),
        }
    }
}
