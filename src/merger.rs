//! Config merger
//!
//! Orchestrates one run: load the target, deep-merge the fragments into it,
//! force the provider credential, and write the result back in place.

use crate::credential::{apply_credential_override, set_path, Credential, API_KEY_PATH, REDACTED};
use crate::document::{self, Document};
use crate::error::MergeError;
use crate::fragment::{builtin_fragment, load_fragment};
use crate::merge::merge_all;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// File that was rewritten
    pub target: PathBuf,
    /// Top-level keys the target did not have before
    pub added: Vec<String>,
    /// Top-level keys whose value changed
    pub updated: Vec<String>,
}

impl MergeReport {
    fn compare(target: &Path, before: &Document, after: &Document) -> Self {
        let mut added = Vec::new();
        let mut updated = Vec::new();
        for (key, value) in after {
            match before.get(key) {
                None => added.push(key.clone()),
                Some(previous) if previous != value => updated.push(key.clone()),
                Some(_) => {}
            }
        }
        Self {
            target: target.to_path_buf(),
            added,
            updated,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

/// Merges override fragments and a provider credential into a config file.
#[derive(Debug)]
pub struct ConfigMerger {
    target: PathBuf,
    credential: Credential,
    fragments: Vec<Document>,
}

impl ConfigMerger {
    /// Merger for `target` using the built-in fragment.
    pub fn new(target: impl Into<PathBuf>, credential: Credential) -> Self {
        Self {
            target: target.into(),
            credential,
            fragments: vec![builtin_fragment()],
        }
    }

    /// Append fragments applied after the ones already configured.
    pub fn with_fragments(mut self, fragments: impl IntoIterator<Item = Document>) -> Self {
        self.fragments.extend(fragments);
        self
    }

    /// Append fragments read from files, in order.
    pub fn with_fragment_files<P: AsRef<Path>>(self, paths: &[P]) -> Result<Self, MergeError> {
        let fragments = paths
            .iter()
            .map(load_fragment)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_fragments(fragments))
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Merge `base` with every fragment and force the credential.
    pub fn merge_document(&self, base: &Document) -> Document {
        let mut merged = merge_all(base, &self.fragments);
        apply_credential_override(&mut merged, &self.credential);
        merged
    }

    /// Load, merge and write back the target file.
    pub fn run(&self) -> Result<MergeReport, MergeError> {
        info!(path = %self.target.display(), fragments = self.fragments.len(), "Merging config");

        let base = document::load(&self.target)?;
        let merged = self.merge_document(&base);
        let report = MergeReport::compare(&self.target, &base, &merged);
        debug!(added = ?report.added, updated = ?report.updated, "Merge computed");

        document::save(&self.target, &merged)?;
        info!(path = %self.target.display(), "Config written");
        Ok(report)
    }

    /// Render what `run` would write, with the credential redacted.
    pub fn preview(&self) -> Result<String, MergeError> {
        let base = document::load(&self.target)?;
        let mut merged = self.merge_document(&base);
        set_path(&mut merged, &API_KEY_PATH, Value::String(REDACTED.to_string()));
        document::render(&merged).map_err(|e| MergeError::write(&self.target, e))
    }
}
