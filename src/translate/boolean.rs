//! Boolean coercion.

use super::{Translate, TranslateError};
use crate::value::Value;

const TRUTHY: [&str; 5] = ["1", "t", "true", "y", "yes"];
const FALSY: [&str; 5] = ["0", "f", "false", "n", "no"];

/// Coerces a value to `Bool`
///
/// Blank values become `Null`. Recognizes the common textual encodings
/// `1/t/true/y/yes` and `0/f/false/n/no` (case-insensitive) and the
/// integers `0` and `1`; anything else is a translation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl Boolean {
    /// Create the translation
    pub fn new() -> Self {
        Self
    }
}

impl Translate for Boolean {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        if value.is_blank() {
            return Ok(Value::Null);
        }
        match value {
            Value::Bool(_) => Ok(value),
            Value::Int(0) => Ok(Value::Bool(false)),
            Value::Int(1) => Ok(Value::Bool(true)),
            Value::String(s) => {
                let token = s.trim().to_lowercase();
                if TRUTHY.contains(&token.as_str()) {
                    Ok(Value::Bool(true))
                } else if FALSY.contains(&token.as_str()) {
                    Ok(Value::Bool(false))
                } else {
                    Err(TranslateError::new(format!("invalid boolean '{s}'")))
                }
            }
            other => Err(TranslateError::new(format!(
                "cannot coerce {other:?} to boolean"
            ))),
        }
    }
}
