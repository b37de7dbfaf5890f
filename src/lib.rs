//! # arXiv Cite
//!
//! Generates BibTeX `@misc` entries for arXiv papers from their metadata.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (DocMetadata, AuthorEntry, etc.)
//! - [`authors`]: Author-string parsing behind the [`AuthorParser`] trait
//! - [`cite`]: Title normalization, author formatting, citation keys and the BibTeX template
//! - [`input`]: Loading metadata documents from JSON or TOML
//! - [`config`]: Configuration management

pub mod authors;
pub mod cite;
pub mod config;
pub mod input;
pub mod models;

// Re-export commonly used types
pub use authors::{ArxivAuthorParser, AuthorParser};
pub use cite::{arxiv_bibtex, Citation, CitationBuilder};
pub use models::{AuthorEntry, DocMetadata};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
