//! Document metadata for an arXiv paper, as consumed by the citation formatter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An arXiv subject classification (e.g. `cs.LG`, `hep-th`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the archive part of the tag (`cs` for `cs.LG`, `hep-th` for `hep-th`)
    pub fn archive(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// One entry of a paper's submission history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version number, starting at 1
    pub version: u32,

    /// When this version was submitted
    pub submitted: DateTime<Utc>,

    /// Size of the submission in kilobytes
    #[serde(default)]
    pub size_kb: Option<u32>,
}

/// The unparsed author line of a paper, affiliations included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorList {
    pub raw: String,
}

impl AuthorList {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Metadata describing a single arXiv paper
///
/// Only `arxiv_id` and `title` are required when deserializing; everything
/// else falls back to an empty value so partially populated records still
/// produce a citation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMetadata {
    /// Canonical arXiv identifier without version suffix (e.g. `2101.00001`)
    pub arxiv_id: String,

    /// Paper title, possibly spanning several lines
    pub title: String,

    /// Raw author string
    #[serde(default)]
    pub authors: AuthorList,

    /// Primary subject classification
    #[serde(default)]
    pub primary_category: Option<Category>,

    /// Cross-listed classifications
    #[serde(default)]
    pub secondary_categories: Vec<Category>,

    /// Current (latest) version number; 0 when unknown
    #[serde(default)]
    pub version: u32,

    /// Submission history
    #[serde(default)]
    pub version_history: Vec<VersionEntry>,

    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    #[serde(default)]
    pub doi: Option<String>,

    #[serde(default)]
    pub journal_ref: Option<String>,

    #[serde(default)]
    pub comments: Option<String>,
}

impl DocMetadata {
    /// Create a record with only the required fields set
    pub fn new(arxiv_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            arxiv_id: arxiv_id.into(),
            title: title.into(),
            authors: AuthorList::default(),
            primary_category: None,
            secondary_categories: Vec::new(),
            version: 0,
            version_history: Vec::new(),
            abstract_text: String::new(),
            doi: None,
            journal_ref: None,
            comments: None,
        }
    }

    /// Returns the submission date of `version`, or of the current version when `None`
    ///
    /// A record with `version == 0` treats the highest version in its history
    /// as current. Returns `None` if the history has no matching entry.
    pub fn get_datetime_of_version(&self, version: Option<u32>) -> Option<DateTime<Utc>> {
        let wanted = match version {
            Some(v) => v,
            None if self.version > 0 => self.version,
            None => self.version_history.iter().map(|v| v.version).max()?,
        };

        self.version_history
            .iter()
            .find(|entry| entry.version == wanted)
            .map(|entry| entry.submitted)
    }

    /// Returns the identifier with the current version appended (`2101.00001v2`)
    pub fn versioned_id(&self) -> String {
        if self.version > 0 {
            format!("{}v{}", self.arxiv_id, self.version)
        } else {
            self.arxiv_id.clone()
        }
    }

    /// Returns the primary category followed by the cross-lists
    pub fn all_categories(&self) -> Vec<&Category> {
        self.primary_category
            .iter()
            .chain(self.secondary_categories.iter())
            .collect()
    }
}

/// Builder for constructing [`DocMetadata`] records
#[derive(Debug, Clone)]
pub struct DocMetadataBuilder {
    doc: DocMetadata,
}

impl DocMetadataBuilder {
    /// Create a new builder with required fields
    pub fn new(arxiv_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            doc: DocMetadata::new(arxiv_id, title),
        }
    }

    /// Set the raw author string
    pub fn authors(mut self, raw: impl Into<String>) -> Self {
        self.doc.authors = AuthorList::new(raw);
        self
    }

    /// Set the primary category
    pub fn primary_category(mut self, tag: impl Into<String>) -> Self {
        self.doc.primary_category = Some(Category::new(tag));
        self
    }

    /// Add a cross-listed category
    pub fn secondary_category(mut self, tag: impl Into<String>) -> Self {
        self.doc.secondary_categories.push(Category::new(tag));
        self
    }

    /// Set the current version number
    pub fn version(mut self, version: u32) -> Self {
        self.doc.version = version;
        self
    }

    /// Record a submission in the version history
    pub fn submitted(mut self, version: u32, at: DateTime<Utc>) -> Self {
        self.doc.version_history.push(VersionEntry {
            version,
            submitted: at,
            size_kb: None,
        });
        self
    }

    /// Set abstract
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.doc.abstract_text = abstract_text.into();
        self
    }

    /// Set DOI
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.doc.doi = Some(doi.into());
        self
    }

    /// Set journal reference
    pub fn journal_ref(mut self, journal_ref: impl Into<String>) -> Self {
        self.doc.journal_ref = Some(journal_ref.into());
        self
    }

    /// Set submitter comments
    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.doc.comments = Some(comments.into());
        self
    }

    /// Build the record
    pub fn build(self) -> DocMetadata {
        self.doc
    }
}
