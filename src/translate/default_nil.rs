//! Blank-to-null default substitution.

use super::{Translate, TranslateError};
use crate::value::Value;

/// Replaces blank values (`Null` or the empty string) with `Null`
///
/// Meaningful falsy values pass through unchanged: `Int(0)` stays `0`.
/// Typically the last step of a chain, turning "field was empty in the
/// source" into a uniform absent value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNil;

impl DefaultNil {
    /// Create the translation
    pub fn new() -> Self {
        Self
    }
}

impl Translate for DefaultNil {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        if value.is_blank() {
            Ok(Value::Null)
        } else {
            Ok(value)
        }
    }
}
