//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::MergeError;

/// Line printed after a successful merge.
pub const SUCCESS_MESSAGE: &str = "merged";

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &MergeError) -> String {
    match e {
        MergeError::MissingCredential(_) => format!(
            "{}\nProvide the provider API key via CLAWMERGE_API_KEY or --api-key-file.",
            e
        ),
        _ => e.to_string(),
    }
}
