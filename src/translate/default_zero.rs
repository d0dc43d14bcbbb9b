//! Blank-to-zero default substitution.

use super::{Translate, TranslateError};
use crate::value::Value;

/// Replaces blank values (`Null` or the empty string) with `Int(0)`
///
/// Useful after a numeric coercion step for feeds that leave counters
/// empty instead of writing `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultZero;

impl DefaultZero {
    /// Create the translation
    pub fn new() -> Self {
        Self
    }
}

impl Translate for DefaultZero {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        if value.is_blank() {
            Ok(Value::Int(0))
        } else {
            Ok(value)
        }
    }
}
