//! Terminal input for the net.
//!
//! Maps `crossterm` key events onto the two net keys and tracks which of them
//! are held, including on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use blub_types as types;

pub use handler::HeldKeys;
pub use map::{map_key, should_quit};
