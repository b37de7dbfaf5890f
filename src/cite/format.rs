//! Author list formatting for the `author` field.

use crate::models::AuthorEntry;

/// Literal token written after a name suffix
///
/// Kept as-is for output compatibility with existing arXiv BibTeX entries.
pub const SUFFIX_MARKER: &str = "au2";

/// Separator between authors in a BibTeX `author` field
pub const AUTHOR_SEPARATOR: &str = " and ";

/// Format a single author as `Given Surname Suffix au2`
///
/// Empty given names and suffixes are skipped. An entry with no parts at all
/// renders as an empty string.
pub fn format_author(entry: &AuthorEntry) -> String {
    let mut out = String::new();

    if let Some(given) = entry.given() {
        out.push_str(given);
        out.push(' ');
    }

    out.push_str(entry.surname().unwrap_or_default());

    if let Some(suffix) = entry.suffix() {
        out.push(' ');
        out.push_str(suffix);
        out.push(' ');
        out.push_str(SUFFIX_MARKER);
    }

    out
}

/// Format all authors, joined with ` and `
pub fn format_author_list(entries: &[AuthorEntry]) -> String {
    entries
        .iter()
        .map(format_author)
        .collect::<Vec<_>>()
        .join(AUTHOR_SEPARATOR)
}
