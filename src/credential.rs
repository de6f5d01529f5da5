//! Provider credential and its forced placement in a document.

use crate::document::Document;
use crate::error::MergeError;
use crate::fragment::PROVIDER_NAME;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Placeholder written in place of the credential in previews.
pub const REDACTED: &str = "[REDACTED]";

/// Key path of the provider API key inside a document.
pub const API_KEY_PATH: [&str; 4] = ["models", "providers", PROVIDER_NAME, "apiKey"];

/// An API key. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Result<Self, MergeError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(MergeError::MissingCredential(
                "credential is empty".to_string(),
            ));
        }
        Ok(Self(secret))
    }

    /// Read a secret file; surrounding whitespace and the final newline are dropped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MergeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            MergeError::MissingCredential(format!(
                "failed to read credential file {:?}: {}",
                path, e
            ))
        })?;
        Self::new(contents.trim())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", REDACTED)
    }
}

/// Force the provider API key to `credential`, creating missing parents.
///
/// Runs after the merge and always wins over whatever the merge produced.
pub fn apply_credential_override(document: &mut Document, credential: &Credential) {
    set_path(
        document,
        &API_KEY_PATH,
        Value::String(credential.expose().to_string()),
    );
}

/// Set `value` at `path`, creating intermediate objects as needed.
///
/// An intermediate that exists but is not an object is replaced by an
/// empty object.
pub fn set_path(document: &mut Document, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = document;
    for (depth, key) in parents.iter().enumerate() {
        let entry = current
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            warn!(
                path = %path[..=depth].join("."),
                "Replacing non-object value on credential path"
            );
            *entry = Value::Object(Map::new());
        }
        let Value::Object(map) = entry else {
            return;
        };
        current = map;
    }

    current.insert(last.to_string(), value);
}
