//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using timeouts.
//! A fresh press stays held long enough for the terminal's auto-repeat to
//! kick in; once repeats are arriving, a short timeout after the last one
//! ends the hold.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::map_key;
use crate::types::{NetInput, NetKey};

/// Hold timeout after the last auto-repeat.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Hold timeout after a fresh press. Above the common 500 ms desktop
/// auto-repeat delay so a held key never stalls before repeats start.
pub const DEFAULT_KEY_REPEAT_DELAY_MS: u32 = 550;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    /// Last press or repeat.
    at: Instant,
    /// At least one repeat arrived while the key was held.
    repeating: bool,
}

/// Tracks which net keys are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    down: Option<Held>,
    up: Option<Held>,
    /// `None` when the terminal reports releases and no timeout is needed.
    key_release_timeout_ms: Option<u32>,
    key_repeat_delay_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            down: None,
            up: None,
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            key_repeat_delay_ms: DEFAULT_KEY_REPEAT_DELAY_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Only consulted while a release timeout is set.
    pub fn with_key_repeat_delay_ms(mut self, delay_ms: u32) -> Self {
        self.key_repeat_delay_ms = delay_ms;
        self
    }

    /// Record a press (or auto-repeat) of `code`.
    ///
    /// Returns the net key it maps to, or `None` for keys the net ignores.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<NetKey> {
        self.handle_key_press_at(code, Instant::now())
    }

    pub fn handle_key_press_at(&mut self, code: KeyCode, now: Instant) -> Option<NetKey> {
        let key = map_key(code)?;
        self.expire(now);
        let slot = self.slot(key);
        *slot = Some(Held {
            at: now,
            repeating: slot.is_some(),
        });
        Some(key)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(key) = map_key(code) {
            *self.slot(key) = None;
        }
    }

    /// Held state for the tick about to run.
    pub fn sample(&mut self) -> NetInput {
        self.sample_at(Instant::now())
    }

    pub fn sample_at(&mut self, now: Instant) -> NetInput {
        self.expire(now);
        NetInput {
            down: self.down.is_some(),
            up: self.up.is_some(),
        }
    }

    pub fn reset(&mut self) {
        self.down = None;
        self.up = None;
    }

    /// Drop keys whose hold timed out.
    fn expire(&mut self, now: Instant) {
        let Some(release_ms) = self.key_release_timeout_ms else {
            return;
        };
        let release = Duration::from_millis(release_ms as u64);
        let first_repeat = Duration::from_millis(self.key_repeat_delay_ms.max(release_ms) as u64);

        for slot in [&mut self.down, &mut self.up] {
            if let Some(held) = *slot {
                let limit = if held.repeating { release } else { first_repeat };
                if now.saturating_duration_since(held.at) > limit {
                    *slot = None;
                }
            }
        }
    }

    fn slot(&mut self, key: NetKey) -> &mut Option<Held> {
        match key {
            NetKey::Down => &mut self.down,
            NetKey::Up => &mut self.up,
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
