//! Tests for filters and the filter set


use crate::record::Record;
use crate::value::Value;

/// Build a one-field record for predicate tests
pub fn create_record(field: &str, value: Value) -> Record {
    let mut record = Record::new();
    record.set(field, value);
    record
}
