//! Structured author names produced by an author-string parser.

use serde::{Deserialize, Serialize};

/// A parsed author name as ordered parts: surname, given names, suffix
///
/// Only the first part is expected; the other two may be missing or empty.
/// Parsers are free to return fewer parts (or none at all), so the accessors
/// all return `Option` rather than assuming a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorEntry {
    parts: Vec<String>,
}

impl AuthorEntry {
    /// Build an entry from its name parts, in order
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Convenience constructor for the common three-part case
    pub fn from_parts(surname: &str, given: Option<&str>, suffix: Option<&str>) -> Self {
        let mut parts = vec![surname.to_string(), given.unwrap_or_default().to_string()];
        if let Some(suffix) = suffix {
            parts.push(suffix.to_string());
        }
        Self { parts }
    }

    /// The raw parts as returned by the parser
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// First part, whatever it contains
    pub fn surname(&self) -> Option<&str> {
        self.parts.first().map(String::as_str)
    }

    /// Given names, if present and non-empty
    pub fn given(&self) -> Option<&str> {
        self.non_empty_part(1)
    }

    /// Generational suffix (`Jr`, `III`), if present and non-empty
    pub fn suffix(&self) -> Option<&str> {
        self.non_empty_part(2)
    }

    fn non_empty_part(&self, index: usize) -> Option<&str> {
        self.parts
            .get(index)
            .map(String::as_str)
            .filter(|part| !part.is_empty())
    }
}
