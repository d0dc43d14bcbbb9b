//! String rendering.

use super::{Translate, TranslateError};
use crate::value::Value;

/// Renders any value as its trimmed string form
///
/// `Null` renders as the empty string, matching the display form of an
/// absent field. Follow with `default_nil` to keep absence absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stringify;

impl Stringify {
    /// Create the translation
    pub fn new() -> Self {
        Self
    }
}

impl Translate for Stringify {
    fn translate(&self, value: Value) -> Result<Value, TranslateError> {
        Ok(Value::String(value.to_string().trim().to_string()))
    }
}
