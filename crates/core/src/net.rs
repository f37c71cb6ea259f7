//! The player-controlled net.

use crate::types::{NetInput, Rect, INITIAL_NET, NET_SPEED};

/// A net that slides vertically along a fixed column.
///
/// Only `rect.y` ever changes. There is no clamping: holding a key long enough
/// walks the net off the visible field, and it stays reachable by holding the
/// opposite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Net {
    pub rect: Rect,
}

impl Net {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Apply one tick of vertical input.
    ///
    /// Each held key contributes its own step, so holding both keys leaves the
    /// net where it was. Steps saturate at the numeric limits.
    pub fn move_on_key_press(&mut self, input: NetInput) {
        if input.down {
            self.rect.y = self.rect.y.saturating_add(NET_SPEED);
        }
        if input.up {
            self.rect.y = self.rect.y.saturating_sub(NET_SPEED);
        }
    }
}

impl Default for Net {
    fn default() -> Self {
        Self::new(INITIAL_NET)
    }
}
