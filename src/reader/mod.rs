//! Payload readers.
//!
//! A reader turns the provider's opaque payload bytes into a sequence of
//! raw [`Record`]s keyed by source field names. Structural failures
//! (malformed format) are fatal to the run; field-level interpretation is
//! deliberately not a reader concern — cells stay close to their source
//! form and translations own all coercion.

pub mod csv;
pub mod json;

#[cfg(test)]
pub mod tests;

pub use csv::CsvReader;
pub use json::JsonReader;

use crate::error::Result;
use crate::record::Record;

/// External collaborator that parses payload bytes into raw records
pub trait Reader: std::fmt::Debug {
    /// Parse the payload; `Err` is fatal to the run
    fn parse(&self, payload: &[u8]) -> Result<Vec<Record>>;
}
