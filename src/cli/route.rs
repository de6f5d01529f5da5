//! CLI route: resolve settings from flags and hand them to the merger.

use super::output::SUCCESS_MESSAGE;
use super::parse::Cli;
use crate::config::{ConfigLoader, MergeSettings};
use crate::error::MergeError;
use crate::logging::LoggingConfig;
use crate::merger::ConfigMerger;
use tracing::info;

/// Resolved settings for one invocation.
#[derive(Debug)]
pub struct RunContext {
    settings: MergeSettings,
    dry_run: bool,
}

impl RunContext {
    /// Load settings and apply CLI flags on top.
    /// Precedence: CLI flags override environment override settings file override defaults.
    pub fn new(cli: &Cli) -> Result<Self, MergeError> {
        let settings = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::from_settings(settings, cli))
    }

    /// Apply CLI flags to already-loaded settings.
    pub fn from_settings(mut settings: MergeSettings, cli: &Cli) -> Self {
        if let Some(target) = &cli.target {
            settings.target = Some(target.clone());
        }
        if let Some(path) = &cli.api_key_file {
            settings.api_key_file = Some(path.clone());
        }
        settings.fragments.extend(cli.fragments.iter().cloned());

        if cli.verbose {
            settings.logging.level = "debug".to_string();
        }
        if let Some(level) = &cli.log_level {
            settings.logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            settings.logging.format = format.clone();
        }

        Self {
            settings,
            dry_run: cli.dry_run,
        }
    }

    pub fn settings(&self) -> &MergeSettings {
        &self.settings
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.settings.logging
    }

    /// Run the merge; returns the text to print on stdout.
    pub fn execute(&self) -> Result<String, MergeError> {
        let target = self.settings.target_path()?;
        let credential = self.settings.credential()?;
        let merger =
            ConfigMerger::new(target, credential).with_fragment_files(&self.settings.fragments)?;

        if self.dry_run {
            let preview = merger.preview()?;
            return Ok(preview.trim_end().to_string());
        }

        let report = merger.run()?;
        info!(
            path = %report.target.display(),
            added = report.added.len(),
            updated = report.updated.len(),
            "Merge complete"
        );
        Ok(SUCCESS_MESSAGE.to_string())
    }
}
