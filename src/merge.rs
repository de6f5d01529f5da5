//! Deep merge of config documents
//!
//! - Objects: deep-merge by key (recursive)
//! - Arrays: replaced wholesale, never merged element-wise
//! - Scalars, null and type mismatches: overlay wins

use crate::document::Document;
use serde_json::Value;

/// Merge `overlay` into a copy of `base`.
///
/// Neither input is touched; the result shares no structure with them.
pub fn deep_merge(base: &Document, overlay: &Document) -> Document {
    let mut out = base.clone();
    merge_into(&mut out, overlay.clone());
    out
}

/// Merge two JSON values by value.
pub fn merge_value(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            merge_into(&mut base_map, overlay_map);
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Apply fragments in order on top of `base`; later fragments win.
pub fn merge_all<'a, I>(base: &Document, fragments: I) -> Document
where
    I: IntoIterator<Item = &'a Document>,
{
    fragments
        .into_iter()
        .fold(base.clone(), |acc, fragment| deep_merge(&acc, fragment))
}

fn merge_into(target: &mut Document, overlay: Document) {
    for (key, overlay_value) in overlay {
        // get_mut keeps the key's position, so existing keys stay in place
        // and new keys are appended.
        match target.get_mut(&key) {
            Some(existing) => {
                let current = existing.take();
                *existing = merge_value(current, overlay_value);
            }
            None => {
                target.insert(key, overlay_value);
            }
        }
    }
}
