//! Configuration management.
//!
//! Settings are read from a TOML file and can be overridden with
//! `ARXIV_CITE_`-prefixed environment variables, using `__` between section
//! and key (`ARXIV_CITE_LOGGING__LEVEL=debug`).

mod file_config;

pub use file_config::{default_config_path, find_config_file, CONFIG_FILE_NAME};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "ARXIV_CITE";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// How citations are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The BibTeX entry as text
    #[default]
    Bibtex,
    /// All citation fields plus the entry as JSON
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print a newline after each entry
    #[serde(default = "default_true")]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            trailing_newline: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file already exists: {0}")]
    AlreadyExists(String),
}

/// Load configuration from a file, with environment overrides on top
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Get the configuration from defaults and environment overrides only
pub fn get_config() -> Result<Config, ConfigError> {
    let settings = config::Config::builder().add_source(environment()).build()?;

    Ok(settings.try_deserialize()?)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.output.format, OutputFormat::Bibtex);
        assert!(config.output.trailing_newline);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.trailing_newline);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_invalid_value() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nformat = \"xml\"").unwrap();

        assert!(matches!(load_config(file.path()), Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config(Path::new("/nonexistent/arxiv-cite.toml"));
        assert!(result.is_err());
    }
}
