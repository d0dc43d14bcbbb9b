//! Kind registries for definition-time capability lookup.
//!
//! Job definitions refer to providers, readers, translations, and filters
//! by symbolic kind (`"file"`, `"csv"`, `"integer"`, ...). A [`Registry`]
//! maps each kind to a factory that builds the capability from the
//! definition's untyped params. Registries are populated once — the
//! `default_*` constructors pre-register the built-ins — and read-only
//! during job construction and processing.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::filter::{FieldEquals, FieldMatches, FieldPresent, Filter};
use crate::provider::{FileProvider, Inline, Provider};
use crate::reader::{CsvReader, JsonReader, Reader};
use crate::translate::{
    Boolean, Date, DateTime, Decimal, DefaultNil, DefaultZero, Integer, Stringify, Translate,
};

/// Factory resolving untyped definition params into a capability instance
pub type Factory<T> = fn(&serde_json::Value) -> Result<Box<T>>;

/// Mapping from capability kind to factory
pub struct Registry<T: ?Sized> {
    name: &'static str,
    factories: HashMap<String, Factory<T>>,
}

impl<T: ?Sized> Registry<T> {
    /// Create an empty registry; `name` labels lookup errors
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            factories: HashMap::new(),
        }
    }

    /// Register a factory under a kind, replacing any existing one
    pub fn register(&mut self, kind: impl Into<String>, factory: Factory<T>) {
        self.factories.insert(kind.into(), factory);
    }

    /// True if the kind is registered
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered kinds, sorted for stable diagnostics
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Build an instance of `kind` from definition params
    pub fn build(&self, kind: &str, params: &serde_json::Value) -> Result<Box<T>> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| Error::unknown_kind(self.name, kind))?;
        factory(params)
    }
}

impl<T: ?Sized> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("kinds", &self.kinds())
            .finish()
    }
}

/// Provider registry with the built-in kinds pre-registered
pub fn default_providers() -> Registry<dyn Provider> {
    let mut registry: Registry<dyn Provider> = Registry::new("provider");
    registry.register("file", |params| {
        Ok(Box::new(FileProvider::from_params(params)?))
    });
    registry.register("inline", |params| Ok(Box::new(Inline::from_params(params)?)));
    registry
}

/// Reader registry with the built-in kinds pre-registered
pub fn default_readers() -> Registry<dyn Reader> {
    let mut registry: Registry<dyn Reader> = Registry::new("reader");
    registry.register("csv", |params| Ok(Box::new(CsvReader::from_params(params)?)));
    registry.register("json", |_| Ok(Box::new(JsonReader::new())));
    registry
}

/// Translation registry with the built-in kinds pre-registered
pub fn default_translations() -> Registry<dyn Translate> {
    let mut registry: Registry<dyn Translate> = Registry::new("translation");
    registry.register("default_nil", |_| Ok(Box::new(DefaultNil::new())));
    registry.register("default_zero", |_| Ok(Box::new(DefaultZero::new())));
    registry.register("integer", |_| Ok(Box::new(Integer::new())));
    registry.register("decimal", |_| Ok(Box::new(Decimal::new())));
    registry.register("boolean", |_| Ok(Box::new(Boolean::new())));
    registry.register("string", |_| Ok(Box::new(Stringify::new())));
    registry.register("date", |params| Ok(Box::new(Date::from_params(params)?)));
    registry.register("datetime", |params| {
        Ok(Box::new(DateTime::from_params(params)?))
    });
    registry
}

/// Filter registry with the built-in kinds pre-registered
pub fn default_filters() -> Registry<dyn Filter> {
    let mut registry: Registry<dyn Filter> = Registry::new("filter");
    registry.register("field_matches", |params| {
        Ok(Box::new(FieldMatches::from_params(params)?))
    });
    registry.register("field_present", |params| {
        Ok(Box::new(FieldPresent::from_params(params)?))
    });
    registry.register("field_equals", |params| {
        Ok(Box::new(FieldEquals::from_params(params)?))
    });
    registry
}
