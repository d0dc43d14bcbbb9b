//! Record filters and the named filter set.
//!
//! A [`Filter`] is a named predicate over a record. The job evaluates
//! every filter against every record independently: partitioning is not
//! mutually exclusive, and a record can land in zero, one, or several
//! buckets. A predicate failure counts as "did not match" for that filter
//! on that record and is recorded, never raised.

pub mod builtin;

#[cfg(test)]
pub mod tests;

pub use builtin::{FieldEquals, FieldMatches, FieldPresent};

use crate::record::Record;

/// Failure of a filter predicate on a single record
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FilterError {
    pub message: String,
}

impl FilterError {
    /// Create a filter error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A partition predicate over one record
pub trait Filter {
    /// Decide whether the record belongs to this filter's bucket
    fn matches(&self, record: &Record) -> Result<bool, FilterError>;
}

/// Plain closures are filters; they cannot fail
impl<F> Filter for F
where
    F: Fn(&Record) -> bool,
{
    fn matches(&self, record: &Record) -> Result<bool, FilterError> {
        Ok(self(record))
    }
}

/// Insertion-ordered mapping from partition name to filter
///
/// Order only affects the iteration order of result buckets; each filter
/// is evaluated independently of the others. Re-inserting an existing
/// name replaces the filter without moving its position.
#[derive(Default)]
pub struct FilterSet {
    filters: Vec<(String, Box<dyn Filter>)>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True if no filters are declared
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Add a named filter, replacing in place if the name exists
    pub fn insert(&mut self, name: impl Into<String>, filter: impl Filter + 'static) {
        self.insert_boxed(name, Box::new(filter));
    }

    /// Add an already-boxed filter (registry factories produce these)
    pub fn insert_boxed(&mut self, name: impl Into<String>, filter: Box<dyn Filter>) {
        let name = name.into();
        match self.filters.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = filter,
            None => self.filters.push((name, filter)),
        }
    }

    /// Look up a filter by name
    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.filters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.as_ref())
    }

    /// Iterate declared filter names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(name, filter)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Filter)> {
        self.filters
            .iter()
            .map(|(name, filter)| (name.as_str(), filter.as_ref()))
    }
}

impl std::fmt::Debug for FilterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterSet")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
