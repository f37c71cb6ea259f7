//! Host configuration from environment variables.
//!
//! Simulation constants (field size, speeds, start geometry) are fixed; only
//! the host's pacing, input heuristics and logging are configurable.

use std::env;

use crate::input::handler::{DEFAULT_KEY_RELEASE_TIMEOUT_MS, DEFAULT_KEY_REPEAT_DELAY_MS};
use crate::types::TICK_MS;

/// Default `BLUB_LOG` filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Fixed timestep in milliseconds (`BLUB_TICK_MS`, at least 1).
    pub tick_ms: u32,
    /// Auto-release timeout for terminals without key release events
    /// once the key is auto-repeating (`BLUB_KEY_RELEASE_MS`).
    pub key_release_ms: u32,
    /// How long a fresh press counts as held before the terminal's first
    /// auto-repeat arrives (`BLUB_KEY_REPEAT_DELAY_MS`).
    pub key_repeat_delay_ms: u32,
    /// Log file (`BLUB_LOG_PATH`). Interactive runs log nowhere without it.
    pub log_path: Option<String>,
    /// env_logger filter directives (`BLUB_LOG`).
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            key_release_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            key_repeat_delay_ms: DEFAULT_KEY_REPEAT_DELAY_MS,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl HostConfig {
    /// Create from environment variables.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("BLUB_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(defaults.tick_ms)
            .max(1);

        let key_release_ms = lookup("BLUB_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_release_ms);

        let key_repeat_delay_ms = lookup("BLUB_KEY_REPEAT_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_repeat_delay_ms);

        let log_path = lookup("BLUB_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("BLUB_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            tick_ms,
            key_release_ms,
            key_repeat_delay_ms,
            log_path,
            log_filter,
        }
    }
}
