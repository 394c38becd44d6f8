//! Engine configuration parameters
//!
//! Fixed at construction.  The simulator can load them from JSON.

use serde::{Deserialize, Serialize};

use crate::drivers::debounce::DEBOUNCE_MS;
use crate::error::ConfigError;

/// Core engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log every state entry / exit at `info` level
    pub debug: bool,
    /// Debounce window applied to buttons built from this config (milliseconds)
    pub debounce_ms: u32,
    /// Scheduler tick period used by `Fsm::run` (milliseconds)
    pub tick_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debug: false,
            debounce_ms: DEBOUNCE_MS,
            tick_interval_ms: 10, // 100 Hz
        }
    }
}

impl EngineConfig {
    /// Polling must be faster than the debounce window, otherwise a press
    /// can be confirmed and released between two polls.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 || self.tick_interval_ms >= self.debounce_ms {
            return Err(ConfigError::InvalidTiming {
                tick_interval_ms: self.tick_interval_ms,
                debounce_ms: self.debounce_ms,
            });
        }
        Ok(())
    }
}
