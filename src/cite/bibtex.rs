//! Assembly of the `@misc` BibTeX entry for an arXiv paper.

use chrono::Datelike;
use serde::Serialize;

use super::format::format_author_list;
use super::key::citation_key;
use super::normalize::normalize_whitespace;
use super::UNKNOWN;
use crate::authors::{ArxivAuthorParser, AuthorParser};
use crate::models::DocMetadata;

/// Year of the current version's submission, or `unknown`
pub fn resolve_year(doc: &DocMetadata) -> String {
    doc.get_datetime_of_version(None)
        .map(|published| published.year().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Primary category tag, or `unknown`
pub fn primary_class(doc: &DocMetadata) -> String {
    doc.primary_category
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Every field that goes into the BibTeX entry, already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub key: String,
    pub title: String,
    pub authors: String,
    pub year: String,
    pub eprint: String,
    pub primary_class: String,
}

impl Citation {
    /// Render the fixed `@misc` template
    pub fn to_bibtex(&self) -> String {
        format!(
            "@misc{{{key},\n      \
             title={{{title}}}, \n      \
             author={{{authors}}},\n      \
             year={{{year}}},\n      \
             eprint={{{eprint}}},\n      \
             archivePrefix={{arXiv}},\n      \
             primaryClass={{{primary_class}}}\n\
             }}",
            key = self.key,
            title = self.title,
            authors = self.authors,
            year = self.year,
            eprint = self.eprint,
            primary_class = self.primary_class,
        )
    }
}

/// Builds citations using a pluggable author parser
pub struct CitationBuilder {
    parser: Box<dyn AuthorParser>,
}

impl Default for CitationBuilder {
    fn default() -> Self {
        Self::new(ArxivAuthorParser)
    }
}

impl CitationBuilder {
    pub fn new(parser: impl AuthorParser + 'static) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }

    /// Collect and format every citation field for `doc`
    pub fn cite(&self, doc: &DocMetadata) -> Citation {
        let year = resolve_year(doc);
        let title = normalize_whitespace(&doc.title);
        let entries = self.parser.parse(&doc.authors.raw);
        let authors = format_author_list(&entries);
        let key = citation_key(doc, &entries, &year);

        tracing::trace!(arxiv_id = %doc.arxiv_id, %key, authors = entries.len(), "Built citation");

        Citation {
            key,
            title,
            authors,
            year,
            eprint: doc.arxiv_id.clone(),
            primary_class: primary_class(doc),
        }
    }

    /// Render the BibTeX entry for `doc`
    pub fn bibtex(&self, doc: &DocMetadata) -> String {
        self.cite(doc).to_bibtex()
    }
}

/// BibTeX entry for `doc` using the arXiv author parser
pub fn arxiv_bibtex(doc: &DocMetadata) -> String {
    CitationBuilder::default().bibtex(doc)
}
