//! Parser for arXiv-style author lines.

use regex::Regex;
use std::sync::LazyLock;

use super::AuthorParser;
use crate::models::AuthorEntry;

static ET_AL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\s,]*\bet\.?\s+al\.?\s*$").expect("valid et al pattern"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,;&]\s*|\s+and\s+").expect("valid separator pattern"));

/// Lowercase name particles that belong to the surname
const PARTICLES: &[&str] = &[
    "van", "von", "der", "den", "de", "la", "le", "du", "del", "della", "di", "da", "dos", "ter",
];

/// Parser for author lines as they appear in arXiv listings
///
/// Handles comma, semicolon, ampersand and `and` separated lists, drops
/// parenthesised affiliations and a trailing `et al`, and recognises
/// generational suffixes written either inline (`John Smith Jr`) or after a
/// comma (`John Smith, Jr.`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ArxivAuthorParser;

impl AuthorParser for ArxivAuthorParser {
    fn parse(&self, raw: &str) -> Vec<AuthorEntry> {
        let stripped = strip_affiliations(raw);
        let stripped = ET_AL.replace(&stripped, "");

        let mut names: Vec<ParsedName> = Vec::new();
        for chunk in SEPARATORS.split(&stripped) {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }

            // "Smith, Jr." splits the suffix into its own chunk
            if is_suffix(chunk) {
                if let Some(prev) = names.last_mut().filter(|n| n.suffix.is_none()) {
                    prev.suffix = Some(clean_suffix(chunk));
                    continue;
                }
            }

            if let Some(name) = ParsedName::from_chunk(chunk) {
                names.push(name);
            }
        }

        tracing::trace!(raw, count = names.len(), "Parsed author line");
        names.into_iter().map(ParsedName::into_entry).collect()
    }
}

#[derive(Debug)]
struct ParsedName {
    surname: String,
    given: String,
    suffix: Option<String>,
}

impl ParsedName {
    fn from_chunk(chunk: &str) -> Option<Self> {
        let mut tokens: Vec<&str> = chunk.split_whitespace().collect();

        let suffix = match tokens.last() {
            Some(last) if tokens.len() > 1 && is_suffix(last) => tokens.pop().map(clean_suffix),
            _ => None,
        };

        let mut start = tokens.len().checked_sub(1)?;
        while start > 0 && PARTICLES.contains(&tokens[start - 1]) {
            start -= 1;
        }

        Some(Self {
            surname: tokens[start..].join(" "),
            given: tokens[..start].join(" "),
            suffix,
        })
    }

    fn into_entry(self) -> AuthorEntry {
        match self.suffix {
            Some(suffix) => AuthorEntry::new([self.surname, self.given, suffix]),
            None if self.given.is_empty() => AuthorEntry::new([self.surname]),
            None => AuthorEntry::new([self.surname, self.given]),
        }
    }
}

/// Removes parenthesised groups, nested ones included
fn strip_affiliations(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;

    for ch in raw.chars() {
        match ch {
            '(' => depth += 1,
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    out.push(' ');
                }
            }
            ')' => {}
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_suffix(token: &str) -> bool {
    matches!(
        token.trim_end_matches(['.', ',']),
        "Jr" | "JR" | "Sr" | "SR" | "II" | "III" | "IV"
    )
}

fn clean_suffix(token: &str) -> String {
    token.trim_end_matches(['.', ',']).to_string()
}
