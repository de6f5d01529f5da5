//! Clawmerge: OpenClaw config merging
//!
//! Deep-merges an override fragment into a user's OpenClaw JSON config file,
//! forces the model provider credential, and writes the file back in place.

pub mod cli;
pub mod config;
pub mod credential;
pub mod document;
pub mod error;
pub mod fragment;
pub mod logging;
pub mod merge;
pub mod merger;

pub use credential::{apply_credential_override, Credential};
pub use document::Document;
pub use error::MergeError;
pub use merge::deep_merge;
pub use merger::{ConfigMerger, MergeReport};
