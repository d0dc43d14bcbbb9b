//! Attribute mapping: raw fields to normalized output attributes.
//!
//! An [`AttributeMap`] is an ordered collection of [`AttributeEntry`]s,
//! built once at definition time and reused read-only across every run.
//! Applying the map to a raw record yields a normalized record containing
//! exactly the declared target names, in declaration order, regardless of
//! which source fields were present in the input.

#[cfg(test)]
pub mod tests;

use tracing::warn;

use crate::error::ProcessingError;
use crate::record::Record;
use crate::translate::{apply_chain, Translate};
use crate::value::Value;

/// One output attribute: target name, candidate source fields, chain
///
/// Source fields are tried in order and the first one present in the raw
/// record wins; a record with none of them feeds `Null` into the chain.
/// The chain runs left to right and does not short-circuit on `Null`
/// (see [`crate::translate`]).
pub struct AttributeEntry {
    target: String,
    sources: Vec<String>,
    translations: Vec<Box<dyn Translate>>,
}

impl AttributeEntry {
    /// Create an entry mapping a single source field to `target`
    pub fn new(target: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            sources: vec![source.into()],
            translations: Vec::new(),
        }
    }

    /// Create an entry whose target and source share one name
    pub fn passthrough(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            sources: vec![name.clone()],
            target: name,
            translations: Vec::new(),
        }
    }

    /// Create an entry with multiple candidate source fields
    pub fn with_sources(
        target: impl Into<String>,
        sources: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            target: target.into(),
            sources: sources.into_iter().map(Into::into).collect(),
            translations: Vec::new(),
        }
    }

    /// Append a translation step to the chain
    pub fn translate(mut self, translation: impl Translate + 'static) -> Self {
        self.translations.push(Box::new(translation));
        self
    }

    /// Append an already-boxed translation (registry factories produce these)
    pub fn translate_boxed(mut self, translation: Box<dyn Translate>) -> Self {
        self.translations.push(translation);
        self
    }

    /// Output attribute name
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Candidate source field names, in priority order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Pick this entry's input value from a raw record
    ///
    /// First present source field wins; field presence counts even when
    /// the value is `Null`. No source present yields `Null`.
    fn source_value(&self, raw: &Record) -> Value {
        self.sources
            .iter()
            .find_map(|source| raw.get(source).cloned())
            .unwrap_or(Value::Null)
    }
}

impl std::fmt::Debug for AttributeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeEntry")
            .field("target", &self.target)
            .field("sources", &self.sources)
            .field("translations", &self.translations.len())
            .finish()
    }
}

/// Ordered set of attribute entries with unique target names
///
/// Insertion order is declaration order is output field order.
/// Re-inserting a target replaces its entry without moving its position.
#[derive(Debug, Default)]
pub struct AttributeMap {
    entries: Vec<AttributeEntry>,
}

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry, replacing in place if the target already exists
    pub fn insert(&mut self, entry: AttributeEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.target == entry.target)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Iterate declared target names in declaration order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.target.as_str())
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &AttributeEntry> {
        self.entries.iter()
    }

    /// Transform one raw record into a normalized record
    ///
    /// The output contains exactly the declared targets, in declaration
    /// order. A failing translation chain sets its target to `Null`,
    /// records a [`ProcessingError::Translation`] tagged with the target
    /// and the offending raw value, and processing continues: a single
    /// bad field never discards the rest of the record.
    pub fn apply(&self, raw: &Record, record_index: usize) -> (Record, Vec<ProcessingError>) {
        let mut normalized = Record::new();
        let mut errors = Vec::new();

        for entry in &self.entries {
            let input = entry.source_value(raw);
            match apply_chain(&entry.translations, input.clone()) {
                Ok(value) => normalized.set(&entry.target, value),
                Err(e) => {
                    warn!(
                        target_attribute = %entry.target,
                        record = record_index,
                        "translation failed: {e}"
                    );
                    errors.push(ProcessingError::Translation {
                        attribute: entry.target.clone(),
                        record: record_index,
                        raw: input,
                        message: e.message,
                    });
                    normalized.set(&entry.target, Value::Null);
                }
            }
        }

        (normalized, errors)
    }
}

impl FromIterator<AttributeEntry> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = AttributeEntry>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for entry in iter {
            map.insert(entry);
        }
        map
    }
}
