//! Citation key derivation (`abadi2016tensorflow` style).

use super::normalize::chars_only;
use super::stopwords::is_stopword;
use super::UNKNOWN;
use crate::models::{AuthorEntry, DocMetadata};

/// First name part of the first author, if there is one
pub fn first_author_part(authors: &[AuthorEntry]) -> Option<&str> {
    authors.first()?.surname()
}

/// First space-separated title word that is not a stopword
///
/// Splits on the space character only, so words keep their punctuation and
/// any embedded newlines. Empty fragments from repeated spaces are skipped.
pub fn first_significant_word(title: &str) -> Option<&str> {
    title
        .split(' ')
        .find(|word| !word.is_empty() && !is_stopword(word))
}

/// Build the citation key from first author, year and first significant title word
///
/// Missing pieces are replaced with `unknown`. The result is lowercased and
/// stripped of everything but alphanumeric characters.
pub fn citation_key(doc: &DocMetadata, authors: &[AuthorEntry], year: &str) -> String {
    let author = first_author_part(authors).unwrap_or_else(|| {
        tracing::debug!(arxiv_id = %doc.arxiv_id, "No first author for citation key");
        UNKNOWN
    });

    let title_word = first_significant_word(&doc.title).unwrap_or_else(|| {
        tracing::debug!(arxiv_id = %doc.arxiv_id, "No significant title word for citation key");
        UNKNOWN
    });

    let year = if year.is_empty() { UNKNOWN } else { year };

    chars_only(&format!("{author}{year}{title_word}")).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str) -> DocMetadata {
        DocMetadata::new("1234.5678", title)
    }

    #[test]
    fn test_key_strips_punctuation() {
        let authors = vec![AuthorEntry::new(["O'Brien", "K."])];
        let key = citation_key(&doc("The Graph-Theory Problem"), &authors, "2020");
        assert_eq!(key, "obrien2020graphtheory");
    }

    #[test]
    fn test_key_all_unknown() {
        assert_eq!(citation_key(&doc(""), &[], ""), "unknownunknownunknown");
    }

    #[test]
    fn test_key_all_stopwords() {
        let authors = vec![AuthorEntry::new(["Doe"])];
        assert_eq!(
            citation_key(&doc("The Other One"), &authors, "1999"),
            "doe1999unknown"
        );
    }

    #[test]
    fn test_key_entry_without_parts() {
        let authors = vec![AuthorEntry::default(), AuthorEntry::new(["Second"])];
        assert_eq!(citation_key(&doc("Graphs"), &authors, "2001"), "unknown2001graphs");
    }

    #[test]
    fn test_key_is_deterministic() {
        let authors = vec![AuthorEntry::new(["Abadi", "Martín"])];
        let d = doc("TensorFlow: Large-Scale Machine Learning");
        let first = citation_key(&d, &authors, "2016");
        for _ in 0..5 {
            assert_eq!(citation_key(&d, &authors, "2016"), first);
        }
        assert_eq!(first, "abadi2016tensorflow");
    }

    #[test]
    fn test_key_keeps_unicode_letters() {
        let authors = vec![AuthorEntry::new(["Müller"])];
        assert_eq!(citation_key(&doc("Über Graphen"), &authors, "2010"), "müller2010über");
    }

    #[test]
    fn test_first_significant_word_skips_empty_fragments() {
        assert_eq!(first_significant_word("  the  Deep Nets"), Some("Deep"));
        assert_eq!(first_significant_word(""), None);
        assert_eq!(first_significant_word("of the"), None);
    }

    #[test]
    fn test_first_significant_word_splits_on_space_only() {
        assert_eq!(first_significant_word("Deep\nLearning"), Some("Deep\nLearning"));
    }
}
