//! Job orchestration: fetch, parse, filter, map.
//!
//! A [`Job`] drives one batch through the pipeline: the provider fetches
//! the raw payload, the reader parses it into raw records, and each
//! record is normalized by the attribute map and partitioned across the
//! filter set. Results and error descriptors accumulate on the job and
//! are readable after [`Job::process`] returns.
//!
//! Filters evaluate against the **normalized** record, so predicates
//! reference mapped attribute names. A job with an empty attribute map
//! passes raw records through unchanged, in which case predicates see the
//! raw field names.
//!
//! A job instance is reusable — every `process()` call resets the
//! run-scoped accumulators first — but not safe for concurrent reuse:
//! callers wanting parallel runs use separate instances.

#[cfg(test)]
pub mod tests;

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::attribute::AttributeMap;
use crate::error::{ProcessingError, Result};
use crate::filter::FilterSet;
use crate::provider::Provider;
use crate::reader::Reader;
use crate::record::Record;

/// Lifecycle of one processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobState {
    /// Wired and waiting for `process()`
    #[default]
    Ready,
    /// Provider fetch in progress
    Fetching,
    /// Reader parse in progress
    Parsing,
    /// Per-record filtering and mapping in progress
    Processing,
    /// Run complete; accumulators stable and readable
    Done,
    /// Run aborted by a fatal fetch or parse error
    Failed,
}

/// One configured import job
///
/// Holds the wired collaborators (provider, reader, filter set, attribute
/// map) plus the run-scoped result state. The collaborators are fixed for
/// the job's lifetime; the result state is exclusively owned by the job
/// and rebuilt on every run.
pub struct Job {
    provider: Box<dyn Provider>,
    reader: Box<dyn Reader>,
    filters: FilterSet,
    attributes: AttributeMap,

    state: JobState,
    total_records: usize,
    all_records: Vec<Record>,
    unfiltered_records: Vec<Record>,
    records: HashMap<String, Vec<Record>>,
    errors: Vec<ProcessingError>,
}

impl Job {
    /// Create a job from its wired collaborators
    pub fn new(
        provider: Box<dyn Provider>,
        reader: Box<dyn Reader>,
        filters: FilterSet,
        attributes: AttributeMap,
    ) -> Self {
        Self {
            provider,
            reader,
            filters,
            attributes,
            state: JobState::Ready,
            total_records: 0,
            all_records: Vec::new(),
            unfiltered_records: Vec::new(),
            records: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Replace the reader (definition overrides, tests)
    pub fn set_reader(&mut self, reader: Box<dyn Reader>) {
        self.reader = reader;
    }

    /// Replace the filter set
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    /// Replace the attribute map
    pub fn set_attributes(&mut self, attributes: AttributeMap) {
        self.attributes = attributes;
    }

    /// Current lifecycle state
    pub fn state(&self) -> JobState {
        self.state
    }

    /// The job's filter set
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The job's attribute map (targets iterate in declaration order)
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Count of raw records the reader yielded in the last run
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Normalized records that matched at least one filter
    ///
    /// With no filters declared, every record lands here. A record
    /// matching several filters appears here once.
    pub fn all_records(&self) -> &[Record] {
        &self.all_records
    }

    /// Normalized records that matched none of the declared filters
    pub fn unfiltered_records(&self) -> &[Record] {
        &self.unfiltered_records
    }

    /// Per-filter result buckets
    ///
    /// Every declared filter owns a bucket, empty or not. Partitioning is
    /// not mutually exclusive: one record can appear in several buckets.
    pub fn records(&self) -> &HashMap<String, Vec<Record>> {
        &self.records
    }

    /// One filter's bucket; empty for an undeclared name
    pub fn partition(&self, name: &str) -> &[Record] {
        self.records.get(name).map_or(&[], Vec::as_slice)
    }

    /// Error descriptors accumulated during the last run
    pub fn errors(&self) -> &[ProcessingError] {
        &self.errors
    }

    /// Run the pipeline over one batch
    ///
    /// Returns `Err` only for fatal failures (provider fetch, reader
    /// parse), which also set the state to `Failed` and leave a matching
    /// descriptor in [`Job::errors`]. Per-record translation and filter
    /// failures are recorded and recovered, never returned. Re-invoking
    /// resets all run-scoped accumulators first.
    pub fn process(&mut self) -> Result<()> {
        self.reset();

        self.state = JobState::Fetching;
        debug!("fetching payload");
        let payload = match self.provider.fetch() {
            Ok(payload) => payload,
            Err(e) => {
                self.errors.push(ProcessingError::Fetch {
                    message: e.to_string(),
                });
                self.state = JobState::Failed;
                return Err(e);
            }
        };
        // Partial failure: the provider produced a payload but reported
        // problems along the way. Record them and keep going.
        for message in self.provider.errors() {
            warn!("provider diagnostic: {message}");
            self.errors.push(ProcessingError::Fetch {
                message: message.clone(),
            });
        }

        self.state = JobState::Parsing;
        let raw_records = match self.reader.parse(&payload) {
            Ok(records) => records,
            Err(e) => {
                self.errors.push(ProcessingError::Parse {
                    message: e.to_string(),
                });
                self.state = JobState::Failed;
                return Err(e);
            }
        };
        self.total_records = raw_records.len();
        info!(total_records = self.total_records, "parsed batch");

        self.state = JobState::Processing;
        for (index, raw) in raw_records.into_iter().enumerate() {
            let normalized = self.normalize(raw, index);
            self.partition_record(normalized, index);
        }

        self.state = JobState::Done;
        info!(
            all = self.all_records.len(),
            unfiltered = self.unfiltered_records.len(),
            errors = self.errors.len(),
            "run complete"
        );
        Ok(())
    }

    /// Clear run-scoped state and seed an empty bucket per filter
    fn reset(&mut self) {
        self.state = JobState::Ready;
        self.total_records = 0;
        self.all_records.clear();
        self.unfiltered_records.clear();
        self.errors.clear();
        self.records.clear();
        for name in self.filters.names() {
            self.records.insert(name.to_string(), Vec::new());
        }
    }

    /// Apply the attribute map; an empty map passes the record through
    fn normalize(&mut self, raw: Record, index: usize) -> Record {
        if self.attributes.is_empty() {
            return raw;
        }
        let (normalized, errors) = self.attributes.apply(&raw, index);
        self.errors.extend(errors);
        normalized
    }

    /// Test the record against every filter and file it accordingly
    fn partition_record(&mut self, record: Record, index: usize) {
        if self.filters.is_empty() {
            self.all_records.push(record);
            return;
        }

        let mut matched = false;
        for (name, filter) in self.filters.iter() {
            match filter.matches(&record) {
                Ok(true) => {
                    matched = true;
                    // Buckets are seeded per filter name in reset()
                    if let Some(bucket) = self.records.get_mut(name) {
                        bucket.push(record.clone());
                    }
                }
                Ok(false) => {}
                // Predicate failure counts as no-match for this filter
                Err(e) => {
                    warn!(filter = name, record = index, "filter predicate failed: {e}");
                    self.errors.push(ProcessingError::Filter {
                        filter: name.to_string(),
                        record: index,
                        message: e.message,
                    });
                }
            }
        }

        if matched {
            self.all_records.push(record);
        } else {
            self.unfiltered_records.push(record);
        }
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("state", &self.state)
            .field("filters", &self.filters)
            .field("attributes", &self.attributes)
            .field("total_records", &self.total_records)
            .field("errors", &self.errors.len())
            .finish()
    }
}
