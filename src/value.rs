//! Scalar value model for record fields.
//!
//! Readers produce [`Value`]s from raw payloads and translations coerce
//! them into their normalized forms. `Null` is the single "absent" value;
//! blank detection treats `Null` and the empty string as blank, but never
//! a meaningful falsy value such as `Int(0)`.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// A single field value inside a [`crate::record::Record`]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing or explicitly absent value
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Calendar date without time or zone
    Date(NaiveDate),
    /// Local date and time without zone
    DateTime(NaiveDateTime),
}

impl Value {
    /// True for `Null` and the empty string
    ///
    /// Whitespace-only strings are not blank; `Int(0)`, `Float(0.0)` and
    /// `Bool(false)` are meaningful values and never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// True only for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the inner string, if this is a `String` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Inner integer, if this is an `Int` value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Convert a JSON scalar into a `Value`
    ///
    /// Numbers become `Int` when they fit `i64`, otherwise `Float`.
    /// Non-scalar JSON (objects, arrays) renders as its JSON text; the
    /// JSON reader flattens objects before reaching this point, so that
    /// case only arises for arrays and caller-supplied literals.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::String(s.clone()),
            other => Self::String(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    /// Render the value the way the `string` translation and the
    /// `field_matches` filter see it; `Null` renders as the empty string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}
