//! CLI parse: clap types for clawmerge. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Merge the OpenClaw override fragment and provider credential into a config file
#[derive(Parser, Debug)]
#[command(name = "clawmerge", version)]
#[command(about = "Deep-merge overrides and a provider credential into an OpenClaw config file")]
pub struct Cli {
    /// Config file to rewrite (default: ~/.openclaw/openclaw.json)
    #[arg(long, short = 't')]
    pub target: Option<PathBuf>,

    /// Extra fragment merged after the built-in one (repeatable, applied in order)
    #[arg(long = "fragment", short = 'f')]
    pub fragments: Vec<PathBuf>,

    /// File containing the provider API key
    #[arg(long)]
    pub api_key_file: Option<PathBuf>,

    /// Print the merged result with the credential redacted instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Settings file path (overrides default settings loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
