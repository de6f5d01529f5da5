//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs always go to stderr so
//! stdout carries only the tool's own output.

use crate::error::MergeError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system
///
/// `CLAWMERGE_LOG` and `CLAWMERGE_LOG_FORMAT` take priority over `config`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), MergeError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| MergeError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Build environment filter from `CLAWMERGE_LOG` or the configured level
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, MergeError> {
    if let Ok(filter) = EnvFilter::try_from_env("CLAWMERGE_LOG") {
        return Ok(filter);
    }

    parse_level(&config.level)
}

fn parse_level(level: &str) -> Result<EnvFilter, MergeError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(EnvFilter::new(level)),
        other => Err(MergeError::Config(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error or off)",
            other
        ))),
    }
}

/// Determine output format from environment or config
fn determine_format(config: &LoggingConfig) -> Result<String, MergeError> {
    if let Ok(format) = std::env::var("CLAWMERGE_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    validate_format(&config.format)
}

fn validate_format(format: &str) -> Result<String, MergeError> {
    if format != "json" && format != "text" {
        return Err(MergeError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(format.to_string())
}
