//! Tests for job orchestration
//!
//! Stub collaborators stand in for real providers and readers so the
//! state machine, partitioning, and error recovery can be exercised
//! without I/O.

mod process_tests;

use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::reader::Reader;
use crate::record::Record;
use crate::value::Value;

/// Provider serving a canned payload, optionally with diagnostics
pub struct StubProvider {
    payload: Vec<u8>,
    errors: Vec<String>,
}

impl StubProvider {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }
}

impl Provider for StubProvider {
    fn fetch(&mut self) -> Result<Vec<u8>> {
        Ok(self.payload.clone())
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Provider whose fetch always fails
pub struct FailingProvider;

impl Provider for FailingProvider {
    fn fetch(&mut self) -> Result<Vec<u8>> {
        Err(Error::fetch("connection refused"))
    }

    fn errors(&self) -> &[String] {
        &[]
    }
}

/// Reader yielding canned records, ignoring the payload
#[derive(Debug)]
pub struct StubReader {
    records: Vec<Record>,
}

impl StubReader {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl Reader for StubReader {
    fn parse(&self, _payload: &[u8]) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// Reader that always reports a structural failure
#[derive(Debug)]
pub struct FailingReader;

impl Reader for FailingReader {
    fn parse(&self, _payload: &[u8]) -> Result<Vec<Record>> {
        Err(Error::parse("unexpected end of payload"))
    }
}

/// Build a one-field `name` record
pub fn create_named_record(name: &str) -> Record {
    let mut record = Record::new();
    record.set("name", Value::from(name));
    record
}
