//! Local file provider with glob pattern matching.

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use serde::Deserialize;
use tracing::debug;

use super::Provider;
use crate::error::{Error, Result};

/// Which matching file to fetch when a pattern matches several
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pick {
    /// Most recently modified file
    #[default]
    Newest,
    /// Least recently modified file
    Oldest,
}

#[derive(Debug, Deserialize)]
struct FileParams {
    pattern: String,
    #[serde(default)]
    pick: Pick,
}

/// Fetches the newest (or oldest) file matching a glob pattern
///
/// Feeds are commonly dropped into a directory with timestamped names;
/// the pattern selects the family and [`Pick`] selects the batch.
/// Candidates whose metadata cannot be read are skipped and reported as
/// non-fatal diagnostics; no readable candidate at all is a fatal fetch
/// error.
#[derive(Debug, Clone)]
pub struct FileProvider {
    pattern: String,
    pick: Pick,
    errors: Vec<String>,
}

impl FileProvider {
    /// Create the provider for a glob pattern, picking the newest match
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            pick: Pick::Newest,
            errors: Vec::new(),
        }
    }

    /// Select which of several matching files to fetch
    pub fn pick(mut self, pick: Pick) -> Self {
        self.pick = pick;
        self
    }

    /// Build from untyped registry params (`{"pattern": ..., "pick": ...}`)
    pub fn from_params(params: &serde_json::Value) -> Result<Self> {
        let params: FileParams = serde_json::from_value(params.clone())
            .map_err(|e| crate::Error::definition(format!("file provider: {e}")))?;
        Ok(Self::new(params.pattern).pick(params.pick))
    }

    /// Resolve the pattern to the single file to read
    fn select_path(&mut self) -> Result<PathBuf> {
        let entries = glob::glob(&self.pattern)
            .map_err(|e| Error::fetch(format!("invalid file pattern '{}': {e}", self.pattern)))?;

        let mut candidates: Vec<(PathBuf, SystemTime)> = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    self.errors.push(format!("unreadable match: {e}"));
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(modified) => candidates.push((path, modified)),
                Err(e) => {
                    self.errors
                        .push(format!("cannot read metadata for {}: {e}", path.display()));
                }
            }
        }

        let selected = match self.pick {
            Pick::Newest => candidates.into_iter().max_by_key(|(_, m)| *m),
            Pick::Oldest => candidates.into_iter().min_by_key(|(_, m)| *m),
        };

        selected.map(|(path, _)| path).ok_or_else(|| {
            Error::fetch(format!("no file matches pattern '{}'", self.pattern))
        })
    }
}

impl Provider for FileProvider {
    fn fetch(&mut self) -> Result<Vec<u8>> {
        self.errors.clear();

        let path = self.select_path()?;
        debug!(path = %path.display(), "fetching feed file");

        fs::read(&path).map_err(|e| Error::fetch(format!("cannot read {}: {e}", path.display())))
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }
}
