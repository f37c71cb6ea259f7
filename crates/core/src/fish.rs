//! The bouncing fish.

use crate::types::{Rect, INITIAL_FISH, INITIAL_FISH_VELOCITY};

/// Fish with a constant per-axis velocity.
///
/// Velocity components are always `±FISH_SPEED`; collisions change their sign
/// but never their magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fish {
    pub rect: Rect,
    /// x velocity per tick
    pub vx: i64,
    /// y velocity per tick
    pub vy: i64,
}

impl Fish {
    pub fn new(rect: Rect, vx: i64, vy: i64) -> Self {
        Self { rect, vx, vy }
    }

    /// Move one tick along the current velocity.
    pub fn advance(&mut self) {
        self.rect.x += self.vx;
        self.rect.y += self.vy;
    }

    /// Put the fish back at the arena origin, keeping its velocity.
    pub fn return_to_origin(&mut self) {
        self.rect.x = 0;
        self.rect.y = 0;
    }
}

impl Default for Fish {
    fn default() -> Self {
        let (vx, vy) = INITIAL_FISH_VELOCITY;
        Self::new(INITIAL_FISH, vx, vy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_adds_velocity() {
        let mut fish = Fish::new(Rect::new(10, 20, 15, 15), 3, -3);
        fish.advance();
        assert_eq!((fish.rect.x, fish.rect.y), (13, 17));
        fish.advance();
        assert_eq!((fish.rect.x, fish.rect.y), (16, 14));
        assert_eq!((fish.vx, fish.vy), (3, -3));
    }

    #[test]
    fn return_to_origin_keeps_velocity_and_size() {
        let mut fish = Fish::new(Rect::new(641, 77, 15, 15), -3, 3);
        fish.return_to_origin();
        assert_eq!(fish.rect, Rect::new(0, 0, 15, 15));
        assert_eq!((fish.vx, fish.vy), (-3, 3));
    }

    #[test]
    fn default_fish_starts_at_origin_heading_down_right() {
        let fish = Fish::default();
        assert_eq!(fish.rect, INITIAL_FISH);
        assert!(fish.vx > 0 && fish.vy > 0);
    }
}
