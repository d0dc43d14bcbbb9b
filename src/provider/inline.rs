//! In-memory payload provider.

use serde::Deserialize;

use super::Provider;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct InlineParams {
    data: String,
}

/// Serves a payload held in memory
///
/// Used for inline feeds embedded in a job definition and as a stand-in
/// source in tests.
#[derive(Debug, Clone)]
pub struct Inline {
    payload: Vec<u8>,
}

impl Inline {
    /// Create the provider from payload bytes
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Build from untyped registry params (`{"data": "..."}`)
    pub fn from_params(params: &serde_json::Value) -> Result<Self> {
        let params: InlineParams = serde_json::from_value(params.clone())
            .map_err(|e| crate::Error::definition(format!("inline provider: {e}")))?;
        Ok(Self::new(params.data.into_bytes()))
    }
}

impl Provider for Inline {
    fn fetch(&mut self) -> Result<Vec<u8>> {
        Ok(self.payload.clone())
    }

    fn errors(&self) -> &[String] {
        &[]
    }
}
