//! Error handling for import job processing.
//!
//! Two layers of errors exist: [`Error`] for failures that abort a run or
//! prevent a job from being built (fetch, parse, definition problems), and
//! [`ProcessingError`] for recoverable per-record failures that a job
//! accumulates while continuing to process the batch.

use std::fmt;

use crate::value::Value;

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error types for job construction and run-aborting failures
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Provider failed to retrieve the payload (network/auth/missing file)
    #[error("fetch failed: {message}")]
    Fetch { message: String },

    /// Reader could not structurally interpret the payload
    #[error("parse failed: {message}")]
    Parse { message: String },

    /// Job definition is malformed or inconsistent
    #[error("invalid job definition: {message}")]
    Definition { message: String },

    /// No definition file found for the requested identifier
    #[error("job definition not found: {identifier}")]
    DefinitionNotFound { identifier: String },

    /// Registry lookup for an unregistered kind
    #[error("unknown {registry} kind: {kind}")]
    UnknownKind { registry: String, kind: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a fetch error with context
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a parse error with context
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a definition error
    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition {
            message: message.into(),
        }
    }

    /// Create a definition-not-found error
    pub fn definition_not_found(identifier: impl Into<String>) -> Self {
        Self::DefinitionNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create an unknown-kind error for a registry lookup
    pub fn unknown_kind(registry: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownKind {
            registry: registry.into(),
            kind: kind.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

/// Recoverable per-record error descriptor accumulated during a run
///
/// These never abort a run: the job records them and keeps going. After
/// `process()` they are inspectable via `Job::errors()`. Fatal fetch and
/// parse failures are also mirrored here (as [`ProcessingError::Fetch`] /
/// [`ProcessingError::Parse`]) so a failed run leaves a trace in the same
/// place as the recovered ones.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    /// Provider-reported diagnostic (fatal, or partial-failure note)
    Fetch { message: String },

    /// Reader-reported structural failure
    Parse { message: String },

    /// A translation step failed on one field of one record
    Translation {
        /// Target attribute being populated
        attribute: String,
        /// Zero-based index of the record in the batch
        record: usize,
        /// The raw value the chain was given
        raw: Value,
        message: String,
    },

    /// A filter predicate failed while evaluating a record
    Filter {
        /// Name of the filter whose predicate failed
        filter: String,
        /// Zero-based index of the record in the batch
        record: usize,
        message: String,
    },
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch { message } => write!(f, "fetch: {message}"),
            Self::Parse { message } => write!(f, "parse: {message}"),
            Self::Translation {
                attribute,
                record,
                raw,
                message,
            } => write!(
                f,
                "translation of '{attribute}' on record {record} (raw: {raw}): {message}"
            ),
            Self::Filter {
                filter,
                record,
                message,
            } => write!(f, "filter '{filter}' on record {record}: {message}"),
        }
    }
}
