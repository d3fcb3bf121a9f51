use chortle_caption::CaptionChunk;
use serde::{Deserialize, Serialize};

use crate::view::TeleprompterFrame;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeleprompterState {
    #[default]
    Idle,
    Running,
    /// One full pass is done. The last frame stays visible.
    Stopped,
}

#[derive(Debug, Clone)]
struct Cursor {
    chunks: Vec<CaptionChunk>,
    index: usize,
}

/// Cursor over caption chunks that moves forward one chunk per
/// [`advance`](Self::advance) and never wraps around.
///
/// ```text
/// Idle ──start──▶ Running ──advance past last──▶ Stopped
///   ▲                │                              │
///   └──────stop──────┴─────────────stop─────────────┘
/// ```
#[derive(Debug, Default)]
pub struct Teleprompter {
    state: TeleprompterState,
    cursor: Option<Cursor>,
}

impl Teleprompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TeleprompterState {
        self.state
    }

    /// Position of the current chunk, if a cursor exists.
    pub fn index(&self) -> Option<usize> {
        self.cursor.as_ref().map(|c| c.index)
    }

    pub fn len(&self) -> usize {
        self.cursor.as_ref().map_or(0, |c| c.chunks.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Begin a fresh pass over `chunks`, replacing any previous one.
    ///
    /// Returns the first frame, or `None` (leaving everything untouched)
    /// when there is nothing to show.
    pub fn start(&mut self, chunks: Vec<CaptionChunk>) -> Option<TeleprompterFrame> {
        if chunks.is_empty() {
            tracing::debug!("teleprompter_start_skipped_empty");
            return None;
        }

        self.stop();
        self.cursor = Some(Cursor { chunks, index: 0 });
        self.state = TeleprompterState::Running;
        self.frame()
    }

    /// Move to the next chunk and return its frame.
    ///
    /// Past the last chunk the machine becomes `Stopped` and returns `None`.
    /// Outside `Running` this does nothing.
    pub fn advance(&mut self) -> Option<TeleprompterFrame> {
        if self.state != TeleprompterState::Running {
            return None;
        }
        let cursor = self.cursor.as_mut()?;

        if cursor.index + 1 >= cursor.chunks.len() {
            self.state = TeleprompterState::Stopped;
            tracing::debug!(chunks = cursor.chunks.len(), "teleprompter_pass_complete");
            return None;
        }

        cursor.index += 1;
        self.frame()
    }

    /// Drop the cursor and return to `Idle`. Safe to call in any state, any
    /// number of times.
    pub fn stop(&mut self) {
        self.cursor = None;
        self.state = TeleprompterState::Idle;
    }

    pub fn frame(&self) -> Option<TeleprompterFrame> {
        let cursor = self.cursor.as_ref()?;
        Some(TeleprompterFrame::at(&cursor.chunks, cursor.index))
    }
}
