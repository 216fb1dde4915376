//! Environment configuration and log setup
//!
//! Configuration is read once at startup. Command line flags take precedence over
//! the environment.

use anyhow::{Context, anyhow};
use clap::ValueEnum;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Filter directive variable, e.g. `TALLY_LOG=debug`
pub const LOG_FILTER_VAR: &str = "TALLY_LOG";
/// Log format variable, `text` or `json`
pub const LOG_FORMAT_VAR: &str = "TALLY_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Runtime configuration for the `tally` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `EnvFilter` directive
    pub log_filter: String,
    pub log_format: LogFormat,
    /// A `TALLY_LOG_FORMAT` value that was not understood, reported once logging is up
    pub rejected_log_format: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            rejected_log_format: None,
        }
    }
}

impl CliConfig {
    /// Create configuration from environment variables
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.log_format = format,
                None => config.rejected_log_format = Some(raw),
            }
        }

        config
    }

    /// Applies command line flags on top of the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.verbose {
            self.log_filter = VERBOSE_LOG_FILTER.to_string();
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
            self.rejected_log_format = None;
        }
        self
    }
}

/// Installs the global `tracing` subscriber. Logs go to stderr so stdout carries
/// only results.
pub fn init_tracing(config: &CliConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    if let Some(raw) = &config.rejected_log_format {
        warn!(value = %raw, variable = LOG_FORMAT_VAR, "Unknown log format, using text");
    }

    Ok(())
}
