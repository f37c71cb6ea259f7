//! Simulation state - owns the net, the fish and the score counters
//!
//! One call to [`Simulation::update`] is one tick. The order inside a tick is
//! fixed: net input, fish motion, wall collision, net collision. Collisions are
//! always evaluated against the post-motion position.

use crate::fish::Fish;
use crate::net::Net;
use crate::snapshot::SimSnapshot;
use crate::types::{NetInput, FIELD_HEIGHT, FIELD_WIDTH, FISH_SPEED};

/// Which wall rule fired during a tick, if any.
///
/// The rules are checked in declaration order and at most one fires per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WallContact {
    #[default]
    None,
    /// Fish reached `x >= FIELD_WIDTH`; the round was reset.
    Escaped,
    /// Fish went past the left edge; `vx` forced positive.
    Left,
    /// Fish touched the top edge; `vy` forced positive.
    Top,
    /// Fish touched the bottom edge; `vy` forced negative.
    Bottom,
}

/// What happened during a single tick.
///
/// Pure data for the host (logging, headless output). Producing it never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TickReport {
    pub wall: WallContact,
    /// Score the round ended with, when `wall == Escaped`.
    pub round_score: u32,
    pub net_hit: bool,
    /// `high_score` increased during this tick.
    pub new_high_score: bool,
}

impl TickReport {
    pub fn round_reset(&self) -> bool {
        self.wall == WallContact::Escaped
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Simulation {
    net: Net,
    fish: Fish,
    score: u32,
    /// Best score seen by this process. Never reset.
    high_score: u32,
}

impl Simulation {
    /// Create a simulation with the fixed start geometry.
    pub fn new() -> Self {
        Self::from_parts(Net::default(), Fish::default(), 0, 0)
    }

    /// Create a simulation from explicit parts.
    ///
    /// `high_score` is raised to `score` if it is lower.
    pub fn from_parts(net: Net, fish: Fish, score: u32, high_score: u32) -> Self {
        Self {
            net,
            fish,
            score,
            high_score: high_score.max(score),
        }
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    pub fn fish(&self) -> &Fish {
        &self.fish
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Advance the simulation by one tick.
    pub fn update(&mut self, input: NetInput) -> TickReport {
        let high_before = self.high_score;
        let round_score = self.score;

        self.net.move_on_key_press(input);
        self.fish.advance();
        let wall = self.wall_collision();
        let net_hit = self.net_collision();

        TickReport {
            wall,
            round_score: if wall == WallContact::Escaped {
                round_score
            } else {
                0
            },
            net_hit,
            new_high_score: self.high_score > high_before,
        }
    }

    /// Apply the first matching wall rule.
    ///
    /// Escaping past the right edge ends the round. The other rules set the
    /// velocity sign outright rather than toggling it, so a fish that stays
    /// beyond a wall for several ticks keeps heading back inside.
    pub fn wall_collision(&mut self) -> WallContact {
        let pos = self.fish.rect;

        if pos.x >= FIELD_WIDTH {
            self.reset();
            WallContact::Escaped
        } else if pos.x < 0 {
            self.fish.vx = FISH_SPEED;
            WallContact::Left
        } else if pos.y <= 0 {
            self.fish.vy = FISH_SPEED;
            WallContact::Top
        } else if pos.y >= FIELD_HEIGHT {
            self.fish.vy = -FISH_SPEED;
            WallContact::Bottom
        } else {
            WallContact::None
        }
    }

    /// Bounce the fish off the net and score.
    ///
    /// Only the fish's top coordinate is tested against the net's vertical
    /// span. There is no cooldown: if the fish is still in the band next tick,
    /// it scores again and reverses again.
    pub fn net_collision(&mut self) -> bool {
        let fish = self.fish.rect;
        let net = self.net.rect;

        let hit = fish.x >= net.x && fish.y >= net.y && fish.y <= net.bottom();
        if hit {
            self.fish.vx = -self.fish.vx;
            self.score = self.score.saturating_add(1);
            if self.score > self.high_score {
                self.high_score = self.score;
            }
        }
        hit
    }

    /// Start a new round: fish back to the origin, score cleared.
    ///
    /// Velocity, net position and high score carry over.
    pub fn reset(&mut self) {
        self.fish.return_to_origin();
        self.score = 0;
    }

    pub fn snapshot_into(&self, out: &mut SimSnapshot) {
        out.fish = self.fish.rect;
        out.vx = self.fish.vx;
        out.vy = self.fish.vy;
        out.net = self.net.rect;
        out.score = self.score;
        out.high_score = self.high_score;
    }

    pub fn snapshot(&self) -> SimSnapshot {
        let mut s = SimSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread a simulation through one tick by value.
pub fn step(mut sim: Simulation, input: NetInput) -> Simulation {
    sim.update(input);
    sim
}
