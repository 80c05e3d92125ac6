//! Runner configuration from environment variables.
//!
//! - `SNAKE_SEED`: apple RNG seed (default: derived from the clock)
//! - `SNAKE_FRAME_MS`: frame interval in milliseconds (default: `FRAME_MS`, min 1)
//! - `SNAKE_LOG_PATH`: file to write logs to (default: no logging)
//!
//! Unparseable values fall back to the defaults. Gameplay rules (world size,
//! movement interval, points) are compile-time constants in `types`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub frame_ms: u32,
    pub log_path: Option<String>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("SNAKE_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(FRAME_MS)
            .max(1);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            frame_ms,
            log_path,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            frame_ms: FRAME_MS,
            log_path: None,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
