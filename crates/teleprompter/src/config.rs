use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_reveal_interval_ms() -> u64 {
    4500
}

/// Time between caption advances. Uniform across all chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            reveal_interval_ms: default_reveal_interval_ms(),
        }
    }
}

impl Cadence {
    pub fn from_millis(reveal_interval_ms: u64) -> Self {
        Self { reveal_interval_ms }
    }

    /// Never zero; tokio intervals reject a zero period.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cadence: Cadence = serde_json::from_str("{}").unwrap();
        assert_eq!(cadence.interval(), Duration::from_millis(4500));
        assert_eq!(Cadence::from_millis(0).interval(), Duration::from_millis(1));
    }
}
