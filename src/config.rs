//! Configuration System
//!
//! Tool settings for clawmerge: which file to rewrite, where the provider
//! credential comes from, extra fragments and logging. Layered as built-in
//! defaults, then an optional TOML file, then `CLAWMERGE_*` environment
//! variables. CLI flags are applied on top by the caller.

use crate::credential::{Credential, REDACTED};
use crate::error::MergeError;
use crate::logging::LoggingConfig;
use config::Environment;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

mod global_file;
mod merge_policy;

pub use global_file::global_config_path;

/// Prefix of environment variables read into settings.
pub const ENV_PREFIX: &str = "CLAWMERGE";

/// Root settings structure
#[derive(Clone, Default, Deserialize)]
pub struct MergeSettings {
    /// Config file to rewrite (default: ~/.openclaw/openclaw.json)
    pub target: Option<PathBuf>,

    /// Inline provider credential (usually from CLAWMERGE_API_KEY).
    /// Validated by [`MergeSettings::credential`], never printed.
    pub api_key: Option<String>,

    /// File holding the provider credential; wins over `api_key`
    pub api_key_file: Option<PathBuf>,

    /// Extra fragments applied after the built-in one, in order
    #[serde(default)]
    pub fragments: Vec<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MergeSettings {
    /// Resolve the target path, falling back to the OpenClaw default.
    pub fn target_path(&self) -> Result<PathBuf, MergeError> {
        match &self.target {
            Some(path) => Ok(path.clone()),
            None => default_target_path(),
        }
    }

    /// Resolve the provider credential.
    pub fn credential(&self) -> Result<Credential, MergeError> {
        if let Some(path) = &self.api_key_file {
            return Credential::from_file(path);
        }
        match &self.api_key {
            Some(secret) => Credential::new(secret.as_str()),
            None => Err(MergeError::MissingCredential(format!(
                "set {}_API_KEY or pass --api-key-file",
                ENV_PREFIX
            ))),
        }
    }
}

impl fmt::Debug for MergeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSettings")
            .field("target", &self.target)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("api_key_file", &self.api_key_file)
            .field("fragments", &self.fragments)
            .field("logging", &self.logging)
            .finish()
    }
}

/// `~/.openclaw/openclaw.json`
pub fn default_target_path() -> Result<PathBuf, MergeError> {
    let base = directories::BaseDirs::new()
        .ok_or_else(|| MergeError::Config("Could not determine home directory".to_string()))?;
    Ok(base.home_dir().join(".openclaw").join("openclaw.json"))
}

/// Loads [`MergeSettings`] from defaults, file and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings using the global config file if it exists.
    pub fn load() -> Result<MergeSettings, MergeError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        Self::finish(builder)
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<MergeSettings, MergeError> {
        if !path.exists() {
            return Err(MergeError::Config(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_file(builder, path, true);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<MergeSettings, MergeError> {
        let settings: MergeSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        debug!(
            target_set = settings.target.is_some(),
            fragments = settings.fragments.len(),
            "Settings loaded"
        );
        Ok(settings)
    }
}
