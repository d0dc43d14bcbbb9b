//! Built-in, definition-constructible filters.
//!
//! These cover the common partitioning predicates so job definitions can
//! stay data-only: match a field against a regex, require a field to be
//! present, or compare it against a literal. Arbitrary predicates remain
//! available in code via closures or custom [`super::Filter`] impls.

use regex::Regex;
use serde::Deserialize;

use super::{Filter, FilterError};
use crate::record::Record;
use crate::value::Value;

#[derive(Debug, Deserialize)]
struct FieldMatchesParams {
    field: String,
    pattern: String,
}

/// Matches when a field's string rendering matches a regex
///
/// A missing or blank field never matches.
#[derive(Debug)]
pub struct FieldMatches {
    field: String,
    pattern: Regex,
}

impl FieldMatches {
    /// Create the filter, compiling the pattern
    pub fn new(field: impl Into<String>, pattern: &str) -> crate::Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| crate::Error::definition(format!("invalid filter pattern: {e}")))?;
        Ok(Self {
            field: field.into(),
            pattern,
        })
    }

    /// Build from untyped registry params (`{"field": ..., "pattern": ...}`)
    pub fn from_params(params: &serde_json::Value) -> crate::Result<Self> {
        let params: FieldMatchesParams = serde_json::from_value(params.clone())
            .map_err(|e| crate::Error::definition(format!("field_matches filter: {e}")))?;
        Self::new(params.field, &params.pattern)
    }
}

impl Filter for FieldMatches {
    fn matches(&self, record: &Record) -> Result<bool, FilterError> {
        match record.get(&self.field) {
            Some(value) if !value.is_blank() => Ok(self.pattern.is_match(&value.to_string())),
            _ => Ok(false),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FieldPresentParams {
    field: String,
}

/// Matches when a field exists and is not blank
///
/// `Int(0)` and `Bool(false)` count as present.
#[derive(Debug)]
pub struct FieldPresent {
    field: String,
}

impl FieldPresent {
    /// Create the filter
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build from untyped registry params (`{"field": ...}`)
    pub fn from_params(params: &serde_json::Value) -> crate::Result<Self> {
        let params: FieldPresentParams = serde_json::from_value(params.clone())
            .map_err(|e| crate::Error::definition(format!("field_present filter: {e}")))?;
        Ok(Self::new(params.field))
    }
}

impl Filter for FieldPresent {
    fn matches(&self, record: &Record) -> Result<bool, FilterError> {
        Ok(record.get(&self.field).is_some_and(|v| !v.is_blank()))
    }
}

#[derive(Debug, Deserialize)]
struct FieldEqualsParams {
    field: String,
    value: serde_json::Value,
}

/// Matches when a field equals a literal value
#[derive(Debug)]
pub struct FieldEquals {
    field: String,
    value: Value,
}

impl FieldEquals {
    /// Create the filter
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    /// Build from untyped registry params (`{"field": ..., "value": ...}`)
    pub fn from_params(params: &serde_json::Value) -> crate::Result<Self> {
        let params: FieldEqualsParams = serde_json::from_value(params.clone())
            .map_err(|e| crate::Error::definition(format!("field_equals filter: {e}")))?;
        Ok(Self::new(params.field, Value::from_json(&params.value)))
    }
}

impl Filter for FieldEquals {
    fn matches(&self, record: &Record) -> Result<bool, FilterError> {
        Ok(record.get(&self.field) == Some(&self.value))
    }
}
