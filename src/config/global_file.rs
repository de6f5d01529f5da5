//! Settings file source: ~/.config/clawmerge/config.toml or $XDG_CONFIG_HOME/clawmerge/config.toml

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to the global settings file.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => directories::BaseDirs::new()?.home_dir().join(".config"),
    };
    Some(config_home.join("clawmerge").join("config.toml"))
}

/// Add the global settings file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.exists() => Ok(add_file(builder, &path, false)),
        Some(path) => {
            debug!(config_path = %path.display(), "No global settings file");
            Ok(builder)
        }
        None => Ok(builder),
    }
}

/// Add a TOML settings file source.
pub fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).format(FileFormat::Toml).required(required))
}
