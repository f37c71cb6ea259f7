use serde::Serialize;

use crate::types::{Rect, INITIAL_FISH, INITIAL_NET};

/// Read-only view of the simulation handed to renderers and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SimSnapshot {
    pub fish: Rect,
    pub vx: i64,
    pub vy: i64,
    pub net: Rect,
    pub score: u32,
    pub high_score: u32,
}

impl Default for SimSnapshot {
    fn default() -> Self {
        Self {
            fish: INITIAL_FISH,
            vx: 0,
            vy: 0,
            net: INITIAL_NET,
            score: 0,
            high_score: 0,
        }
    }
}
