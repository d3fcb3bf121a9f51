use chortle_caption::ChunkPolicy;
use chortle_teleprompter::Cadence;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "CHORTLE_";

/// Tuning knobs read from `CHORTLE_*` variables. Unset values fall back to
/// the library defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Env {
    #[serde(default)]
    pub small_screen_words: Option<usize>,
    #[serde(default)]
    pub large_screen_words: Option<usize>,
    #[serde(default)]
    pub reveal_interval_ms: Option<u64>,
}

impl Env {
    pub fn chunk_policy(&self) -> ChunkPolicy {
        let defaults = ChunkPolicy::default();
        ChunkPolicy {
            small_screen_words: self
                .small_screen_words
                .unwrap_or(defaults.small_screen_words),
            large_screen_words: self
                .large_screen_words
                .unwrap_or(defaults.large_screen_words),
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.reveal_interval_ms
            .map(Cadence::from_millis)
            .unwrap_or_default()
    }
}

/// Reads `.env` from the working directory if present, then the process
/// environment.
pub fn load() -> Result<Env, envy::Error> {
    let _ = dotenvy::dotenv();
    envy::prefixed(ENV_PREFIX).from_env()
}
