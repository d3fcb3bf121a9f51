use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical decomposition (NFD), then lowercase.
pub fn normalize(text: &str) -> String {
    text.nfd().collect::<String>().to_lowercase()
}

/// Collapse whitespace runs to single spaces, then [`normalize`].
pub fn normalize_phrase(text: &str) -> String {
    normalize(&text.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Drop everything that is not a letter or digit, then [`normalize`].
///
/// Combining marks are kept so pre-decomposed input ("e\u{301}") cleans the
/// same as its precomposed form ("é").
pub fn clean_word(word: &str) -> String {
    let kept: String = word
        .chars()
        .filter(|c| c.is_alphanumeric() || is_combining_mark(*c))
        .collect();
    normalize(&kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_and_decomposed_clean_alike() {
        assert_eq!(clean_word("José!"), clean_word("Jose\u{301}"));
        assert_eq!(clean_word("\"CRÈME,\""), normalize("crème"));
    }

    #[test]
    fn punctuation_and_symbols_are_stripped() {
        assert_eq!(clean_word("(banana)."), "banana");
        assert_eq!(clean_word("🎉"), "");
        assert_eq!(clean_word("R2-D2"), "r2d2");
    }

    #[test]
    fn phrases_collapse_whitespace() {
        assert_eq!(normalize_phrase("  Chocolate \t RIVERS "), "chocolate rivers");
    }
}
