//! Decimal (floating point) coercion.

use super::{Translate, TranslateError};
use crate::value::Value;

/// Coerces a value to `Float`
///
/// Blank values become `Null`; integers widen. A non-empty, non-numeric
/// string is a translation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decimal;

impl Decimal {
    /// Create the translation
    pub fn new() -> Self {
        Self
    }
}

impl Translate for Decimal {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        if value.is_blank() {
            return Ok(Value::Null);
        }
        match value {
            Value::Float(_) => Ok(value),
            Value::Int(i) => Ok(Value::Float(i as f64)),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| TranslateError::new(format!("invalid decimal '{s}': {e}"))),
            other => Err(TranslateError::new(format!(
                "cannot coerce {other:?} to decimal"
            ))),
        }
    }
}
