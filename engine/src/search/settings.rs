use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const MAX_STEP_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub use_opening_shortcuts: bool,
    pub visualize: bool,
    /// Pacing between frames of a stepped search. Only the consumer of the
    /// frames waits; the engine never sleeps.
    pub step_delay_ms: u64,
}

impl SearchConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn without_shortcuts() -> Self {
        Self {
            use_opening_shortcuts: false,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            use_opening_shortcuts: true,
            visualize: false,
            step_delay_ms: 0,
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.step_delay_ms > MAX_STEP_DELAY_MS {
            return Err(format!(
                "step_delay_ms must not exceed {} (got {})",
                MAX_STEP_DELAY_MS, self.step_delay_ms
            ));
        }
        Ok(())
    }
}
