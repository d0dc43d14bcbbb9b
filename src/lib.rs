//! Intake Library
//!
//! A Rust library for importing third-party data feeds into an
//! application's own data model: a configurable job fetches one batch of
//! raw data, parses it into field-keyed records, partitions the records
//! across named filters, and translates fields into normalized output
//! attributes.
//!
//! This library provides tools for:
//! - Fetching raw payloads through pluggable providers (glob file pickup,
//!   inline payloads)
//! - Parsing payloads into records with pluggable readers (CSV, JSON)
//! - Partitioning records across named, non-exclusive filter buckets
//! - Normalizing fields through ordered translation chains (defaults,
//!   integer/decimal/boolean/date coercion)
//! - Declarative, data-only job definitions resolved through kind
//!   registries
//! - Per-record error recovery: one bad field never discards a batch
//!
//! # Example
//!
//! ```rust
//! use intake::attribute::{AttributeEntry, AttributeMap};
//! use intake::filter::FilterSet;
//! use intake::provider::Inline;
//! use intake::reader::CsvReader;
//! use intake::translate::{Date, DefaultNil};
//! use intake::{Job, Record};
//!
//! # fn main() -> intake::Result<()> {
//! let provider = Inline::new("userName,email,statusDate\nArthur,a@example.com,2024-03-01\n");
//!
//! let mut attributes = AttributeMap::new();
//! attributes.insert(AttributeEntry::new("name", "userName"));
//! attributes.insert(AttributeEntry::new("email", "email").translate(DefaultNil::new()));
//! attributes.insert(AttributeEntry::new("updated_at", "statusDate").translate(Date::new()));
//!
//! let mut filters = FilterSet::new();
//! filters.insert("named", |r: &Record| {
//!     r.get("name").is_some_and(|v| !v.is_blank())
//! });
//!
//! let mut job = Job::new(
//!     Box::new(provider),
//!     Box::new(CsvReader::new()),
//!     filters,
//!     attributes,
//! );
//! job.process()?;
//!
//! assert_eq!(job.total_records(), 1);
//! assert_eq!(job.partition("named").len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Jobs can equally be described as data and loaded by identifier; see
//! [`config::Loader`].

pub mod attribute;
pub mod config;
pub mod error;
pub mod filter;
pub mod job;
pub mod provider;
pub mod reader;
pub mod record;
pub mod registry;
pub mod translate;
pub mod value;

// Re-export commonly used types
pub use config::{JobDefinition, Loader};
pub use error::{Error, ProcessingError, Result};
pub use job::{Job, JobState};
pub use record::Record;
pub use value::Value;
