//! Translation steps for normalizing field values.
//!
//! A translation is a pure function from one [`Value`] to another: type
//! coercion (`integer`, `date`) or default substitution (`default_nil`,
//! `default_zero`). Attribute mapping entries compose translations into
//! ordered chains; [`apply_chain`] runs a chain left to right, each step
//! consuming the previous step's output.
//!
//! Chains do **not** short-circuit when a value becomes `Null`: the
//! default-substitution steps rely on observing `Null` to replace it, so
//! `["integer", "default_zero"]` turns an empty cell into `Int(0)`.

pub mod boolean;
pub mod date;
pub mod datetime;
pub mod decimal;
pub mod default_nil;
pub mod default_zero;
pub mod integer;
pub mod string;

#[cfg(test)]
pub mod tests;

pub use boolean::Boolean;
pub use date::Date;
pub use datetime::DateTime;
pub use decimal::Decimal;
pub use default_nil::DefaultNil;
pub use default_zero::DefaultZero;
pub use integer::Integer;
pub use string::Stringify;

use crate::value::Value;

/// Failure of a single translation step on a single value
///
/// Recovered at the attribute-map level: the target attribute becomes
/// `Null` and the error is recorded against the record, never raised to
/// the caller of `process()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct TranslateError {
    pub message: String,
}

impl TranslateError {
    /// Create a translation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single value translation step
///
/// Implementations must be deterministic and must not carry run state;
/// a translation built once at definition time is reused across every
/// record of every run.
pub trait Translate {
    /// Map one field value to its translated form
    fn translate(&self, value: Value) -> Result<Value, TranslateError>;
}

/// Run a translation chain left to right over a starting value
///
/// The first failing step aborts the chain and surfaces its error; steps
/// after a `Null` still run (no short-circuit, see the module docs).
pub fn apply_chain(
    chain: &[Box<dyn Translate>],
    value: Value,
) -> Result<Value, TranslateError> {
    let mut current = value;
    for step in chain {
        current = step.translate(current)?;
    }
    Ok(current)
}
