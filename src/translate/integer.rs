//! Integer coercion.

use super::{Translate, TranslateError};
use crate::value::Value;

/// Coerces a value to `Int`
///
/// Blank values become `Null`. Strings are trimmed and parsed as `i64`;
/// floats truncate toward zero. A non-empty, non-numeric string is a
/// translation error (recorded per record, never aborting the batch).
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Integer {
    /// Create the translation
    pub fn new() -> Self {
        Self
    }
}

impl Translate for Integer {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        if value.is_blank() {
            return Ok(Value::Null);
        }
        match value {
            Value::Int(_) => Ok(value),
            Value::Float(v) => Ok(Value::Int(v.trunc() as i64)),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| TranslateError::new(format!("invalid integer '{s}': {e}"))),
            other => Err(TranslateError::new(format!(
                "cannot coerce {other:?} to integer"
            ))),
        }
    }
}
