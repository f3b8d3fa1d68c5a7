use serde::{Deserialize, Serialize};
use std::time::Duration;
use tictactoe_common::SessionRng;
use tictactoe_common::config::Validate;

const MAX_DELAY_MS: u64 = 5000;

/// Pause before the computer's move is revealed, drawn uniformly from `min_ms..=max_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiDelayConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl AiDelayConfig {
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn sample(&self, rng: &mut SessionRng) -> Duration {
        if self.min_ms >= self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.random_range(self.min_ms..=self.max_ms))
    }
}

impl Default for AiDelayConfig {
    fn default() -> Self {
        Self {
            min_ms: 300,
            max_ms: 800,
        }
    }
}

impl Validate for AiDelayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.min_ms > self.max_ms {
            return Err(format!(
                "ai_delay min_ms ({}) must not exceed max_ms ({})",
                self.min_ms, self.max_ms
            ));
        }
        if self.max_ms > MAX_DELAY_MS {
            return Err(format!("ai_delay max_ms must not exceed {}", MAX_DELAY_MS));
        }
        Ok(())
    }
}
