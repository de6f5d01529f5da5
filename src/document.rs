//! Config document load and save
//!
//! A document is a JSON object. Saving writes pretty-printed JSON with a
//! trailing newline via temporary file + rename.

use crate::error::MergeError;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A config document: string keys to arbitrary JSON values, in file order.
pub type Document = Map<String, Value>;

/// Load a document from a UTF-8 JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document, MergeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| MergeError::parse(path, e))?;
    let document = parse(&text).map_err(|message| MergeError::parse(path, message))?;
    debug!(path = %path.display(), keys = document.len(), "Loaded document");
    Ok(document)
}

/// Parse JSON text whose top-level value must be an object.
pub fn parse(text: &str) -> Result<Document, String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!(
            "expected a JSON object at top level, found {}",
            kind(&other)
        )),
        Err(e) => Err(format!("invalid JSON: {}", e)),
    }
}

/// Render a document exactly as `save` writes it.
pub fn render(document: &Document) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(document)?;
    text.push('\n');
    Ok(text)
}

/// Save a document atomically, replacing any existing content.
///
/// A symlinked target is written through to the file it points at, and the
/// target's permission bits are kept.
pub fn save<P: AsRef<Path>>(path: P, document: &Document) -> Result<(), MergeError> {
    let path = resolve_target(path.as_ref());
    let text = render(document).map_err(|e| MergeError::write(&path, e))?;
    let permissions = fs::metadata(&path).ok().map(|m| m.permissions());

    let temp_path = temp_path_for(&path);
    write_private(&temp_path, text.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MergeError::write(&temp_path, e)
    })?;

    if let Some(permissions) = permissions {
        fs::set_permissions(&temp_path, permissions).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            MergeError::write(&temp_path, format!("failed to copy permissions: {}", e))
        })?;
    }

    fs::rename(&temp_path, &path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MergeError::write(&path, format!("rename from {:?} failed: {}", temp_path, e))
    })?;

    debug!(path = %path.display(), bytes = text.len(), "Saved document");
    Ok(())
}

/// Follow symlinks so the rename replaces the real file, not the link.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Write `bytes` to a fresh file readable only by the owner until the
/// target's own permissions are applied.
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let _ = fs::remove_file(path);
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Sibling temp file, so the rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
