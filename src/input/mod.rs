//! Loading paper metadata from JSON or TOML documents.

use std::io::Read;
use std::path::Path;

use crate::models::DocMetadata;

/// Serialization format of a metadata document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Infer the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

/// Metadata loading errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML metadata: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parse a metadata document
pub fn parse_metadata(text: &str, format: InputFormat) -> Result<DocMetadata, InputError> {
    let doc = match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Toml => toml::from_str(text)?,
    };
    Ok(doc)
}

/// Load a metadata document from `path`, or from stdin when `path` is `-`
pub fn load_metadata(path: &Path) -> Result<DocMetadata, InputError> {
    let io_err = |source| InputError::Io {
        path: path.display().to_string(),
        source,
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_err)?
    };

    let doc = parse_metadata(&text, InputFormat::from_path(path))?;
    tracing::debug!(arxiv_id = %doc.arxiv_id, "Loaded metadata from {}", path.display());
    Ok(doc)
}
