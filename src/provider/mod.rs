//! Data-source providers.
//!
//! A provider is the job's only I/O collaborator: it retrieves one opaque
//! raw payload per run. A `fetch` error is fatal to the run; diagnostics
//! that did not prevent a payload from being produced (partial failures)
//! are reported through [`Provider::errors`] and folded into the job's
//! error list without stopping the batch.

pub mod file;
pub mod inline;

#[cfg(test)]
pub mod tests;

pub use file::{FileProvider, Pick};
pub use inline::Inline;

use crate::error::Result;

/// External collaborator that retrieves raw payload bytes
pub trait Provider {
    /// Fetch the batch payload; `Err` is fatal to the run
    fn fetch(&mut self) -> Result<Vec<u8>>;

    /// Non-fatal diagnostics from the last fetch; empty means clean
    fn errors(&self) -> &[String];
}
