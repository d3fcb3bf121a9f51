use chortle_caption::{CaptionChunk, clean_word};
use serde::{Deserialize, Serialize};

/// A run of words on the current line that share one highlight state.
///
/// Segments carry no surrounding whitespace; renderers join them with a
/// single space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Everything an overlay needs to draw one moment of the teleprompter:
/// the line just read, the line to read now, and the line coming up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeleprompterFrame {
    pub index: usize,
    pub total: usize,
    pub previous: Option<String>,
    pub current: Vec<Segment>,
    pub next: Option<String>,
}

impl TeleprompterFrame {
    /// `index` must be in bounds.
    pub(crate) fn at(chunks: &[CaptionChunk], index: usize) -> Self {
        Self {
            index,
            total: chunks.len(),
            previous: index
                .checked_sub(1)
                .and_then(|i| chunks.get(i))
                .map(plain_line),
            current: chunks.get(index).map(highlighted_line).unwrap_or_default(),
            next: chunks.get(index + 1).map(plain_line),
        }
    }

    /// The current line without highlight information.
    pub fn current_text(&self) -> String {
        self.current
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Previous and next lines render without emphasis.
pub fn plain_line(chunk: &CaptionChunk) -> String {
    chunk.text()
}

/// The current line, with each maximal run of highlighted words merged into
/// one segment so a phrase like "chocolate rivers" reads as a single unit.
pub fn highlighted_line(chunk: &CaptionChunk) -> Vec<Segment> {
    let marks = highlight_marks(chunk);
    let mut segments: Vec<Segment> = Vec::new();

    for (word, highlighted) in chunk.words.iter().zip(marks) {
        match segments.last_mut() {
            Some(last) if last.highlighted == highlighted => {
                last.text.push(' ');
                last.text.push_str(&word.text);
            }
            _ => segments.push(Segment {
                text: word.text.clone(),
                highlighted,
            }),
        }
    }

    segments
}

/// A word is highlighted if it was filled on its own, or if it sits inside
/// an occurrence of a multi-word answer within this line. The latter picks
/// up stop words inside phrases ("king of spain").
fn highlight_marks(chunk: &CaptionChunk) -> Vec<bool> {
    let mut marks: Vec<bool> = chunk.words.iter().map(|w| w.is_filled).collect();
    if chunk.filled_phrases.is_empty() {
        return marks;
    }

    let line: Vec<String> = chunk.words.iter().map(|w| clean_word(&w.text)).collect();

    for phrase in &chunk.filled_phrases {
        let target: Vec<String> = phrase
            .split_whitespace()
            .map(clean_word)
            .filter(|w| !w.is_empty())
            .collect();
        if target.len() < 2 || target.len() > line.len() {
            continue;
        }

        for start in 0..=line.len() - target.len() {
            let end = start + target.len();
            if line[start..end] == target[..] {
                marks[start..end].fill(true);
            }
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chortle_caption::CaptionWord;

    fn chunk(words: &[(&str, bool)], phrases: &[&str]) -> CaptionChunk {
        let words: Vec<CaptionWord> = words
            .iter()
            .map(|(text, is_filled)| CaptionWord {
                text: text.to_string(),
                is_filled: *is_filled,
            })
            .collect();
        CaptionChunk {
            has_filled_words: words.iter().any(|w| w.is_filled),
            words,
            filled_phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn seg(text: &str, highlighted: bool) -> Segment {
        Segment {
            text: text.to_string(),
            highlighted,
        }
    }

    #[test]
    fn consecutive_filled_words_merge_into_one_span() {
        let line = highlighted_line(&chunk(
            &[("a", false), ("purple", true), ("banana", true), ("fell", false)],
            &[],
        ));
        assert_eq!(
            line,
            [seg("a", false), seg("purple banana", true), seg("fell", false)]
        );
    }

    #[test]
    fn phrase_pulls_in_its_stop_words() {
        let line = highlighted_line(&chunk(
            &[
                ("the", false),
                ("King", true),
                ("of", false),
                ("Spain,", true),
                ("of", false),
                ("course", false),
            ],
            &["king of spain"],
        ));
        assert_eq!(
            line,
            [
                seg("the", false),
                seg("King of Spain,", true),
                seg("of course", false)
            ]
        );
    }

    #[test]
    fn phrase_cut_by_line_edge_is_not_extended() {
        let line = highlighted_line(&chunk(
            &[("of", false), ("Spain", true), ("again", false)],
            &["king of spain"],
        ));
        assert_eq!(
            line,
            [seg("of", false), seg("Spain", true), seg("again", false)]
        );
    }

    #[test]
    fn unhighlighted_line_is_one_segment() {
        let line = highlighted_line(&chunk(&[("just", false), ("prose", false)], &[]));
        assert_eq!(line, [seg("just prose", false)]);
        assert!(highlighted_line(&chunk(&[], &[])).is_empty());
    }

    #[test]
    fn frame_windows() {
        let chunks = vec![
            chunk(&[("one", false)], &[]),
            chunk(&[("two", true)], &[]),
            chunk(&[("three", false)], &[]),
        ];

        let first = TeleprompterFrame::at(&chunks, 0);
        assert_eq!(first.previous, None);
        assert_eq!(first.current_text(), "one");
        assert_eq!(first.next.as_deref(), Some("two"));

        let last = TeleprompterFrame::at(&chunks, 2);
        assert_eq!(last.previous.as_deref(), Some("two"));
        assert_eq!(last.next, None);
        assert_eq!(last.total, 3);
    }

    #[test]
    fn frame_json_shape() {
        let chunks = vec![
            chunk(&[("hello", false), ("Zoë", true)], &[]),
            chunk(&[("bye", false)], &[]),
        ];
        insta::assert_snapshot!(
            serde_json::to_string(&TeleprompterFrame::at(&chunks, 0)).unwrap(),
            @r#"{"index":0,"total":2,"previous":null,"current":[{"text":"hello","highlighted":false},{"text":"Zoë","highlighted":true}],"next":"bye"}"#
        );
    }
}
