//! Configuration file discovery and generation.
//!
//! # Configuration File Format
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "text"   # or "json"
//!
//! [output]
//! format = "bibtex" # or "json"
//! trailing_newline = true
//! ```

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "arxiv-cite.toml";

/// Per-user config location (`~/.config/arxiv-cite/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arxiv-cite").join("config.toml"))
}

/// Find a config file in the working directory, then in the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    default_config_path().filter(|path| path.is_file())
}

impl Config {
    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the default configuration to `path`, refusing to overwrite
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.display().to_string()));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, Config::default().to_toml()?)?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }
}
