//! Author-string parsing.
//!
//! This module defines the [`AuthorParser`] trait the citation pipeline uses to
//! turn a raw author line into structured [`AuthorEntry`] values. Parsing rules
//! are entirely up to the implementation; the formatter and key builder accept
//! whatever shape comes back, including empty or single-part entries.
//!
//! [`ArxivAuthorParser`] handles the author lines found in arXiv listings:
//!
//! ```rust
//! use arxiv_cite::authors::{ArxivAuthorParser, AuthorParser};
//!
//! let entries = ArxivAuthorParser.parse("Ludwig van Beethoven (Bonn), J. Smith, Jr.");
//! assert_eq!(entries[0].surname(), Some("van Beethoven"));
//! assert_eq!(entries[1].suffix(), Some("Jr"));
//! ```
//!
//! Closures with the right signature are parsers too, which keeps tests and
//! alternative front-ends cheap:
//!
//! ```rust
//! use arxiv_cite::authors::AuthorParser;
//! use arxiv_cite::models::AuthorEntry;
//!
//! let fixed = |_: &str| vec![AuthorEntry::new(["Lecun", "Y."])];
//! assert_eq!(fixed.parse("ignored")[0].given(), Some("Y."));
//! ```

mod arxiv;

pub use arxiv::ArxivAuthorParser;

use crate::models::AuthorEntry;

/// Turns a raw author/affiliation string into ordered author entries
pub trait AuthorParser: Send + Sync {
    fn parse(&self, raw: &str) -> Vec<AuthorEntry>;
}

impl<F> AuthorParser for F
where
    F: Fn(&str) -> Vec<AuthorEntry> + Send + Sync,
{
    fn parse(&self, raw: &str) -> Vec<AuthorEntry> {
        self(raw)
    }
}
