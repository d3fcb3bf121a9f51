use chortle_codec::StoryRecord;
use serde::{Deserialize, Serialize};

use crate::classify::{FilledWords, classify};
use crate::markup::strip_markup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionWord {
    /// As displayed, punctuation included.
    pub text: String,
    pub is_filled: bool,
}

/// A run of consecutive story words shown together on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionChunk {
    pub words: Vec<CaptionWord>,
    pub has_filled_words: bool,
    /// Every multi-word answer in the story. Carried by each chunk so a
    /// line can group a phrase's words even when its neighbours are cut off.
    pub filled_phrases: Vec<String>,
}

impl CaptionChunk {
    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn default_small_screen_words() -> usize {
    8
}

fn default_large_screen_words() -> usize {
    12
}

/// How many words go on one caption line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkPolicy {
    #[serde(default = "default_small_screen_words")]
    pub small_screen_words: usize,
    #[serde(default = "default_large_screen_words")]
    pub large_screen_words: usize,
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self {
            small_screen_words: default_small_screen_words(),
            large_screen_words: default_large_screen_words(),
        }
    }
}

impl ChunkPolicy {
    pub fn words_per_chunk(&self, screen_is_small: bool) -> usize {
        let words = if screen_is_small {
            self.small_screen_words
        } else {
            self.large_screen_words
        };
        words.max(1)
    }
}

/// Splits story text into caption chunks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chunker {
    policy: ChunkPolicy,
}

impl Chunker {
    pub fn new(policy: ChunkPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ChunkPolicy {
        self.policy
    }

    /// Chunk `story_text` (plain or HTML) with an existing classification.
    pub fn chunk(
        &self,
        story_text: &str,
        filled: &FilledWords,
        screen_is_small: bool,
    ) -> Vec<CaptionChunk> {
        let plain = strip_markup(story_text);
        let words: Vec<&str> = plain.split_whitespace().collect();
        let size = self.policy.words_per_chunk(screen_is_small);

        let chunks: Vec<CaptionChunk> = words
            .chunks(size)
            .map(|group| {
                let words: Vec<CaptionWord> = group
                    .iter()
                    .map(|text| CaptionWord {
                        text: text.to_string(),
                        is_filled: filled.contains(text),
                    })
                    .collect();
                CaptionChunk {
                    has_filled_words: words.iter().any(|w| w.is_filled),
                    words,
                    filled_phrases: filled.phrases.clone(),
                }
            })
            .collect();

        tracing::debug!(
            words = words.len(),
            chunks = chunks.len(),
            words_per_chunk = size,
            "caption_chunks_built"
        );

        chunks
    }

    /// Classify `values` against `story_text`, then chunk it.
    pub fn chunk_story(
        &self,
        story_text: &str,
        values: &StoryRecord,
        screen_is_small: bool,
    ) -> Vec<CaptionChunk> {
        let filled = classify(values, story_text);
        self.chunk(story_text, &filled, screen_is_small)
    }
}

/// Caption chunks with the default policy: 8 words per line on small
/// screens, 12 otherwise.
pub fn chunk(story_text: &str, values: &StoryRecord, screen_is_small: bool) -> Vec<CaptionChunk> {
    Chunker::default().chunk_story(story_text, values, screen_is_small)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twenty_words() -> String {
        (1..=20).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    fn sizes(chunks: &[CaptionChunk]) -> Vec<usize> {
        chunks.iter().map(CaptionChunk::len).collect()
    }

    #[test]
    fn chunk_sizes_follow_screen_size() {
        let values = StoryRecord::new("t");
        assert_eq!(sizes(&chunk(&twenty_words(), &values, true)), [8, 8, 4]);
        assert_eq!(sizes(&chunk(&twenty_words(), &values, false)), [12, 8]);
    }

    #[test]
    fn custom_policy_is_respected() {
        let chunker = Chunker::new(ChunkPolicy {
            small_screen_words: 5,
            large_screen_words: 0,
        });
        let values = StoryRecord::new("t");
        assert_eq!(sizes(&chunker.chunk_story(&twenty_words(), &values, true)), [5; 4]);
        // a zero-sized policy still makes progress
        assert_eq!(chunker.chunk_story("a b", &values, false).len(), 2);
    }

    #[test]
    fn empty_and_blank_text_yield_no_chunks() {
        let values = StoryRecord::new("t").with("x", "word");
        assert!(chunk("", &values, true).is_empty());
        assert!(chunk(" \n\t ", &values, false).is_empty());
        assert!(chunk("<p></p>", &values, false).is_empty());
    }

    #[test]
    fn words_are_flagged_and_phrases_attached() {
        let values = StoryRecord::new("t")
            .with("adjective", "purple")
            .with("food", "banana split")
            .with("n", 3i64);
        let story = "I ate purple bananas and a banana split. The end of the story is near, friend.";

        let chunks = chunk(story, &values, true);
        assert_eq!(sizes(&chunks), [8, 8]);

        let flagged: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.words.iter())
            .filter(|w| w.is_filled)
            .map(|w| w.text.as_str())
            .collect();
        assert_eq!(flagged, ["purple", "banana", "split."]);

        assert!(chunks[0].has_filled_words);
        assert!(!chunks[1].has_filled_words);
        assert!(chunks.iter().all(|c| c.filled_phrases == ["banana split"]));
    }

    #[test]
    fn markup_is_stripped_before_chunking() {
        let values = StoryRecord::new("t").with("name", "Zoë");
        let chunks = chunk(
            r#"Hello <strong class="filled">Zoë</strong>!<br>Bye &amp; see you"#,
            &values,
            false,
        );
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text(), "Hello Zoë! Bye & see you");
        assert!(chunks[0].words[1].is_filled);
    }

    #[test]
    fn chunking_is_deterministic() {
        let values = StoryRecord::new("t").with("a", "quick brown").with("b", "fox");
        let story = "The quick brown fox jumps over the lazy dog again and again and again.";
        assert_eq!(chunk(story, &values, true), chunk(story, &values, true));
    }

    #[test]
    fn chunk_shape_snapshot() {
        let values = StoryRecord::new("t").with("a", "fox");
        let chunks = chunk("red fox", &values, true);
        insta::assert_snapshot!(
            format!("{:?}", chunks[0]),
            @r#"CaptionChunk { words: [CaptionWord { text: "red", is_filled: false }, CaptionWord { text: "fox", is_filled: true }], has_filled_words: true, filled_phrases: [] }"#
        );
    }
}
