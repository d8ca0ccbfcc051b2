//! CLI runtime configuration.
//!
//! Configuration is resolved once at process startup (after `.env` has been loaded) and then
//! passed to the command handlers. Nothing below `main` reads environment variables.

use clap::ValueEnum;
use std::str::FromStr;

/// Default tracing directive when neither `RUST_LOG` nor `DXR_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "dxr=info";

/// Tracing directive used by `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "dxr=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid output format '{0}' (expected 'text' or 'json')")]
    InvalidFormat(String),
    #[error("log filter cannot be empty")]
    EmptyLogFilter,
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// How assessments are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report blocks.
    #[default]
    Text,
    /// Pretty-printed JSON array of assessments.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// CLI configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    log_filter: String,
    format: OutputFormat,
}

impl CliConfig {
    pub fn new(log_filter: String, format: OutputFormat) -> ConfigResult<Self> {
        if log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(Self { log_filter, format })
    }

    /// Resolve configuration from the process environment, letting flags take precedence.
    ///
    /// - `RUST_LOG`, then `DXR_LOG`, then [`DEFAULT_LOG_FILTER`]; `--verbose` overrides all
    /// - `DXR_FORMAT` (`text` | `json`), overridden by `--format`
    pub fn from_env(format_flag: Option<OutputFormat>, verbose: bool) -> ConfigResult<Self> {
        let log_filter = if verbose {
            VERBOSE_LOG_FILTER.to_string()
        } else {
            log_filter_from_env_values(
                std::env::var("RUST_LOG").ok(),
                std::env::var("DXR_LOG").ok(),
            )
        };

        let format = match format_flag {
            Some(format) => format,
            None => output_format_from_env_value(std::env::var("DXR_FORMAT").ok())?,
        };

        Self::new(log_filter, format)
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Parse the output format from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`OutputFormat::Text`].
pub fn output_format_from_env_value(value: Option<String>) -> ConfigResult<OutputFormat> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<OutputFormat>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Pick the first non-blank filter, falling back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter_from_env_values(rust_log: Option<String>, dxr_log: Option<String>) -> String {
    [rust_log, dxr_log]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
