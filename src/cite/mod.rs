//! BibTeX citation generation for arXiv papers.
//!
//! The pipeline normalizes the title, parses and formats the author list,
//! derives a citation key and fills in a fixed `@misc` template:
//!
//! ```rust
//! use arxiv_cite::cite::arxiv_bibtex;
//! use arxiv_cite::models::DocMetadataBuilder;
//! use chrono::{TimeZone, Utc};
//!
//! let doc = DocMetadataBuilder::new("1706.03762", "Attention Is\n All You Need")
//!     .authors("Ashish Vaswani, Noam Shazeer")
//!     .primary_category("cs.CL")
//!     .version(1)
//!     .submitted(1, Utc.with_ymd_and_hms(2017, 6, 12, 17, 57, 34).unwrap())
//!     .build();
//!
//! let bibtex = arxiv_bibtex(&doc);
//! assert!(bibtex.starts_with("@misc{vaswani2017attention,\n"));
//! assert!(bibtex.contains("author={Ashish Vaswani and Noam Shazeer}"));
//! ```
//!
//! Formatting never fails. Missing years, categories, authors or title words
//! show up as `unknown` in the output instead.

mod bibtex;
mod format;
mod key;
mod normalize;
mod stopwords;

pub use bibtex::{arxiv_bibtex, primary_class, resolve_year, Citation, CitationBuilder};
pub use format::{format_author, format_author_list, AUTHOR_SEPARATOR, SUFFIX_MARKER};
pub use key::{citation_key, first_author_part, first_significant_word};
pub use normalize::{chars_only, normalize_whitespace};
pub use stopwords::{is_stopword, STOPWORDS};

/// Placeholder used for any field that cannot be determined
pub const UNKNOWN: &str = "unknown";
