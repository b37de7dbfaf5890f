//! Text normalization helpers.

/// Collapse every whitespace run to a single space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep only alphanumeric characters (Unicode aware)
pub fn chars_only(text: &str) -> String {
    text.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_multiline_title() {
        let title = "  Attention Is\n   All You\tNeed \n";
        assert_eq!(normalize_whitespace(title), "Attention Is All You Need");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for title in ["", " a  b ", "x\n\ny", "Déjà\u{00a0}vu  encore", "plain"] {
            let once = normalize_whitespace(title);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_normalize_whitespace_only() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \t\n\r  "), "");
    }

    #[test]
    fn test_chars_only() {
        assert_eq!(chars_only("O'Brien2020Graph-Theory"), "OBrien2020GraphTheory");
        assert_eq!(chars_only("Müller–Łukasz"), "MüllerŁukasz");
        assert_eq!(chars_only("{}$\\"), "");
    }
}
