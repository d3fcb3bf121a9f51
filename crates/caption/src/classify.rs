use std::collections::HashSet;

use chortle_codec::{FieldValue, StoryRecord};

use crate::normalize::{clean_word, normalize_phrase};
use crate::stopwords::is_stop_word;

const MIN_WORD_CHARS: usize = 2;

/// Which words and phrases of a story came from the user's answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilledWords {
    /// Cleaned, normalized single words.
    pub words: HashSet<String>,
    /// Normalized multi-word answers, in first-seen order.
    pub phrases: Vec<String>,
}

impl FilledWords {
    /// Whether a word as displayed in the story (punctuation, case and all)
    /// belongs to an answer.
    pub fn contains(&self, display_word: &str) -> bool {
        let cleaned = clean_word(display_word);
        !cleaned.is_empty() && self.words.contains(&cleaned)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }
}

/// Work out which words in `story_text` are attributable to `values`.
///
/// Only text answers take part; numbers print as-is without emphasis.
/// Stop words and single-character pieces never count as filled.
pub fn classify(values: &StoryRecord, story_text: &str) -> FilledWords {
    let mut filled = FilledWords::default();

    for text in values.values().filter_map(FieldValue::as_text) {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        if text.contains(char::is_whitespace) {
            let phrase = normalize_phrase(text);
            if !filled.phrases.contains(&phrase) {
                filled.phrases.push(phrase);
            }
        }

        for piece in text.split_whitespace() {
            let cleaned = clean_word(piece);
            if cleaned.chars().count() >= MIN_WORD_CHARS && !is_stop_word(&cleaned) {
                filled.words.insert(cleaned);
            }
        }
    }

    tracing::trace!(
        story_chars = story_text.len(),
        words = filled.words.len(),
        phrases = filled.phrases.len(),
        "filled_words_classified"
    );

    filled
}
