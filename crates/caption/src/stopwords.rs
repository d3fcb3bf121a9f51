/// Function words that are never highlighted, even when a user typed one.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "for", "of", "in", "on", "at", "to",
    "by", "with", "from", "as", "is", "am", "are", "was", "were", "be", "been", "being", "has",
    "have", "had", "do", "does", "did", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "my", "your", "his", "its", "our", "their", "this", "that",
];

/// `word` must already be cleaned and normalized.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
