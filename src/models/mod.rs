//! Core data models for paper metadata and parsed author names.

mod author;
mod metadata;

pub use author::AuthorEntry;
pub use metadata::{AuthorList, Category, DocMetadata, DocMetadataBuilder, VersionEntry};
