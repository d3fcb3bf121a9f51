//! Caption script derivation for read-aloud recordings.
//!
//! Story text is split into short chunks of words, and each word is tagged
//! with whether it came from a user's answer rather than template prose so
//! the reader can see what to emphasise.

mod chunk;
mod classify;
mod markup;
mod normalize;
mod stopwords;

pub use chunk::{CaptionChunk, CaptionWord, ChunkPolicy, Chunker, chunk};
pub use classify::{FilledWords, classify};
pub use markup::strip_markup;
pub use normalize::{clean_word, normalize, normalize_phrase};
pub use stopwords::{STOP_WORDS, is_stop_word};
