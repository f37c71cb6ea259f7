//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation rules: the net, the fish, the wall and net
//! collisions and the round/score state machine. It has **zero dependencies** on
//! terminals, input devices or I/O, making it:
//!
//! - **Deterministic**: the same input sequence always produces the same state
//! - **Testable**: every rule is reachable from plain values
//! - **Portable**: the terminal host and the headless runner drive the same code
//! - **Allocation-free**: ticking and snapshotting never touch the heap
//!
//! # Module Structure
//!
//! - [`net`]: vertical net movement from held keys
//! - [`fish`]: constant-velocity fish motion
//! - [`simulation`]: tick ordering, wall and net collisions, scoring, reset
//! - [`snapshot`]: read-only state handed to renderers
//!
//! # Game Rules
//!
//! Each tick runs, in order:
//!
//! 1. **Net input**: the net moves `NET_SPEED` per held key (no clamping)
//! 2. **Fish motion**: the fish moves by its velocity
//! 3. **Wall collision**, first match wins:
//!    escaping past the right edge resets the round; past the left edge forces
//!    `vx` positive; touching the top forces `vy` positive; touching the bottom
//!    forces `vy` negative
//! 4. **Net collision**: when the fish's left edge is at or past the net and its
//!    top lies within the net's vertical span, `vx` reverses and the score goes up
//!
//! # Example
//!
//! ```
//! use blub_core::Simulation;
//! use blub_types::NetInput;
//!
//! let mut sim = Simulation::new();
//! for _ in 0..160 {
//!     sim.update(NetInput::NONE);
//! }
//!
//! // The fish bounced off the bottom wall on tick 160.
//! assert_eq!(sim.fish().rect.y, 480);
//! assert_eq!(sim.fish().vy, -3);
//! ```

pub mod fish;
pub mod net;
pub mod simulation;
pub mod snapshot;

pub use blub_types as types;

pub use fish::Fish;
pub use net::Net;
pub use simulation::{step, Simulation, TickReport, WallContact};
pub use snapshot::SimSnapshot;
