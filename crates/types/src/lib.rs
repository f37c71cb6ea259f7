//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain values with no behaviour beyond construction and
//! conversion, making them usable in any context (simulation, rendering,
//! headless runs).
//!
//! # Arena
//!
//! The arena is a fixed 640x480 field. Coordinates are `i64` with the origin at
//! the top-left corner, +x to the right and +y downwards. The net is never
//! clamped, so its position is only bounded by how long a key is held.
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_WIDTH` | 640 | Arena width; the fish escaping past it ends the round |
//! | `FIELD_HEIGHT` | 480 | Arena height |
//! | `FISH_SPEED` | 3 | Per-axis fish speed (units per tick) |
//! | `NET_SPEED` | 6 | Net vertical step per held key per tick |
//! | `TICK_MS` | 16 | Default fixed timestep (~60 ticks per second) |
//!
//! # Examples
//!
//! ```
//! use blub_types::{NetInput, NetKey, Rect, FIELD_WIDTH, INITIAL_NET};
//!
//! let input = NetInput::from_str("down").unwrap();
//! assert!(input.is_held(NetKey::Down));
//! assert!(!input.is_held(NetKey::Up));
//!
//! assert_eq!(INITIAL_NET, Rect::new(600, 200, 15, 100));
//! assert_eq!(FIELD_WIDTH, 640);
//! ```

use serde::Serialize;

/// Window title announced by the host.
pub const WINDOW_TITLE: &str = "Blub";

/// Arena width in arena units.
pub const FIELD_WIDTH: i64 = 640;

/// Arena height in arena units.
pub const FIELD_HEIGHT: i64 = 480;

/// Per-axis fish speed (units per tick).
pub const FISH_SPEED: i64 = 3;

/// Net vertical step per held key per tick.
pub const NET_SPEED: i64 = 6;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 ticks per second).
pub const TICK_MS: u32 = 16;

/// Net geometry at process start.
pub const INITIAL_NET: Rect = Rect::new(600, 200, 15, 100);

/// Fish geometry at process start.
pub const INITIAL_FISH: Rect = Rect::new(0, 0, 15, 15);

/// Fish velocity at process start (`vx`, `vy`).
pub const INITIAL_FISH_VELOCITY: (i64, i64) = (FISH_SPEED, FISH_SPEED);

/// Axis-aligned rectangle in arena coordinates.
///
/// Width and height are positive and fixed for the lifetime of the value that
/// owns the rectangle; only the position moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }

    /// Bottom edge (`y + h`), saturating at the numeric limit.
    pub const fn bottom(&self) -> i64 {
        self.y.saturating_add(self.h)
    }
}

/// The two logical keys that steer the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetKey {
    /// Move the net towards +y
    Down,
    /// Move the net towards -y
    Up,
}

/// Held state of the net keys for a single tick.
///
/// Both keys may be held at once; the simulation applies both adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NetInput {
    pub down: bool,
    pub up: bool,
}

impl NetInput {
    pub const NONE: Self = Self {
        down: false,
        up: false,
    };
    pub const DOWN: Self = Self {
        down: true,
        up: false,
    };
    pub const UP: Self = Self {
        down: false,
        up: true,
    };
    pub const BOTH: Self = Self {
        down: true,
        up: true,
    };

    pub fn is_held(&self, key: NetKey) -> bool {
        match key {
            NetKey::Down => self.down,
            NetKey::Up => self.up,
        }
    }

    /// Parse a held-key set by name (case-insensitive)
    ///
    /// Accepts "none", "down", "up" and "both".
    ///
    /// # Examples
    ///
    /// ```
    /// use blub_types::NetInput;
    ///
    /// assert_eq!(NetInput::from_str("BOTH"), Some(NetInput::BOTH));
    /// assert_eq!(NetInput::from_str("left"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(NetInput::NONE),
            "down" => Some(NetInput::DOWN),
            "up" => Some(NetInput::UP),
            "both" => Some(NetInput::BOTH),
            _ => None,
        }
    }
}
