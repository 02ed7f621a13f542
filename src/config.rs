//! Runtime configuration from environment variables.
//!
//! - `SNAKE_SPEED`: ticks per second (default 7)
//! - `SNAKE_SEED`: RNG seed (default: random)
//! - `SNAKE_LOG_PATH`: JSON-lines event log (default: disabled)
//!
//! Board size is fixed at compile time.

use crate::types::SPEED;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ticks_per_second: u32,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticks_per_second: SPEED,
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse from an arbitrary key lookup. Missing or malformed values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ticks_per_second = lookup("SNAKE_SPEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(SPEED);

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse::<u64>().ok());

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            ticks_per_second,
            seed,
            log_path,
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
