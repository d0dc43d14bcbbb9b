//! Declarative job definitions and the definition loader.
//!
//! A job definition is a data-only tree: provider and reader kinds with
//! their params, named filters, and attribute mapping entries. The
//! [`Loader`] resolves an identifier to a `<identifier>.json` file across
//! its load paths, parses the definition, resolves every symbolic kind
//! through the registries, and returns a fully wired, ready-state
//! [`Job`]. No executable configuration: everything a definition can say
//! is data.
//!
//! ```json
//! {
//!   "provider": { "kind": "file", "pattern": "/feeds/members-*.csv" },
//!   "reader": { "kind": "csv" },
//!   "filters": [
//!     { "name": "updated", "kind": "field_present", "field": "updated_at" }
//!   ],
//!   "attributes": [
//!     { "target": "name", "from": "userName" },
//!     { "target": "email" },
//!     { "target": "updated_at", "from": "statusDate", "translations": ["date"] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info};

use crate::attribute::{AttributeEntry, AttributeMap};
use crate::error::{Error, Result};
use crate::filter::{Filter, FilterSet};
use crate::job::Job;
use crate::provider::Provider;
use crate::reader::Reader;
use crate::registry::{
    default_filters, default_providers, default_readers, default_translations, Registry,
};
use crate::translate::Translate;

/// A capability reference: symbolic kind plus its remaining params
#[derive(Debug, Clone, Deserialize)]
pub struct KindConfig {
    /// Registry kind identifier (`"file"`, `"csv"`, ...)
    pub kind: String,
    /// Everything else in the object, passed to the kind's factory
    #[serde(flatten)]
    pub params: serde_json::Value,
}

/// One named filter declaration
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Partition name
    pub name: String,
    /// Filter kind identifier
    pub kind: String,
    /// Remaining params for the filter factory
    #[serde(flatten)]
    pub params: serde_json::Value,
}

/// Source field names for an attribute: one or several candidates
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceFields {
    /// Single source field
    One(String),
    /// Candidates in priority order; first present wins
    Many(Vec<String>),
}

/// One translation step: bare kind or kind with params
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TranslationConfig {
    /// `"integer"`
    Kind(String),
    /// `{ "kind": "date", "format": "%d/%m/%Y" }`
    Configured {
        kind: String,
        #[serde(flatten)]
        params: serde_json::Value,
    },
}

/// One attribute mapping declaration
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeConfig {
    /// Output attribute name
    pub target: String,
    /// Source field(s); defaults to the target name itself
    #[serde(default)]
    pub from: Option<SourceFields>,
    /// Translation chain, applied left to right
    #[serde(default)]
    pub translations: Vec<TranslationConfig>,
}

/// A complete declarative job description
#[derive(Debug, Clone, Deserialize)]
pub struct JobDefinition {
    /// Data source
    pub provider: KindConfig,
    /// Payload format
    pub reader: KindConfig,
    /// Named partitions (may be empty)
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
    /// Output attributes in declaration order (may be empty)
    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,
}

impl JobDefinition {
    /// Parse a definition from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::definition(e.to_string()))
    }
}

/// Resolves identifiers to definitions and builds ready-state jobs
///
/// Registries are populated with the built-in kinds; custom capabilities
/// register through the `*_mut` accessors before the first `define` call.
pub struct Loader {
    load_paths: Vec<PathBuf>,
    providers: Registry<dyn Provider>,
    readers: Registry<dyn Reader>,
    translations: Registry<dyn Translate>,
    filters: Registry<dyn Filter>,
}

impl Loader {
    /// Create a loader with the default registries and no load paths
    pub fn new() -> Self {
        Self {
            load_paths: Vec::new(),
            providers: default_providers(),
            readers: default_readers(),
            translations: default_translations(),
            filters: default_filters(),
        }
    }

    /// Add a directory to search for `<identifier>.json` files
    ///
    /// Paths are searched in the order added; the first hit wins.
    pub fn add_load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.load_paths.push(path.into());
        self
    }

    /// Provider registry, for registering custom kinds
    pub fn providers_mut(&mut self) -> &mut Registry<dyn Provider> {
        &mut self.providers
    }

    /// Reader registry, for registering custom kinds
    pub fn readers_mut(&mut self) -> &mut Registry<dyn Reader> {
        &mut self.readers
    }

    /// Translation registry, for registering custom kinds
    pub fn translations_mut(&mut self) -> &mut Registry<dyn Translate> {
        &mut self.translations
    }

    /// Filter registry, for registering custom kinds
    pub fn filters_mut(&mut self) -> &mut Registry<dyn Filter> {
        &mut self.filters
    }

    /// Resolve an identifier to a definition file and build its job
    pub fn define(&self, identifier: &str) -> Result<Job> {
        let file_name = format!("{identifier}.json");
        for load_path in &self.load_paths {
            let candidate = load_path.join(&file_name);
            if !candidate.is_file() {
                continue;
            }
            debug!(path = %candidate.display(), "loading job definition");
            let text = fs::read_to_string(&candidate)
                .map_err(|e| Error::io(format!("reading {}", candidate.display()), e))?;
            let definition = JobDefinition::from_json(&text).map_err(|e| {
                Error::definition(format!("{}: {e}", candidate.display()))
            })?;
            return self.build(&definition);
        }
        Err(Error::definition_not_found(identifier))
    }

    /// Build a ready-state job from an already-parsed definition
    pub fn build(&self, definition: &JobDefinition) -> Result<Job> {
        let provider = self
            .providers
            .build(&definition.provider.kind, &definition.provider.params)?;
        let reader = self
            .readers
            .build(&definition.reader.kind, &definition.reader.params)?;

        let mut filters = FilterSet::new();
        for filter_config in &definition.filters {
            let filter = self.filters.build(&filter_config.kind, &filter_config.params)?;
            filters.insert_boxed(&filter_config.name, filter);
        }

        let mut attributes = AttributeMap::new();
        for attribute_config in &definition.attributes {
            attributes.insert(self.build_attribute(attribute_config)?);
        }

        info!(
            provider = %definition.provider.kind,
            reader = %definition.reader.kind,
            filters = definition.filters.len(),
            attributes = definition.attributes.len(),
            "job wired"
        );
        Ok(Job::new(provider, reader, filters, attributes))
    }

    fn build_attribute(&self, config: &AttributeConfig) -> Result<AttributeEntry> {
        let mut entry = match &config.from {
            None => AttributeEntry::passthrough(&config.target),
            Some(SourceFields::One(source)) => AttributeEntry::new(&config.target, source),
            Some(SourceFields::Many(sources)) => {
                if sources.is_empty() {
                    return Err(Error::definition(format!(
                        "attribute '{}' has an empty source list",
                        config.target
                    )));
                }
                AttributeEntry::with_sources(&config.target, sources)
            }
        };

        for translation_config in &config.translations {
            let (kind, params) = match translation_config {
                TranslationConfig::Kind(kind) => (kind.as_str(), &serde_json::Value::Null),
                TranslationConfig::Configured { kind, params } => (kind.as_str(), params),
            };
            // Bare kinds reach factories as an empty params object
            let params = if params.is_null() {
                serde_json::Value::Object(serde_json::Map::new())
            } else {
                params.clone()
            };
            entry = entry.translate_boxed(self.translations.build(kind, &params)?);
        }

        Ok(entry)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
