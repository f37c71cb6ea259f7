//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! The simulation snapshot is first turned into a fixed list of draw commands
//! (filled rectangles and text in arena coordinates), then rasterized into a
//! framebuffer of styled cells, then flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the draw commands independent of the terminal so other hosts can
//!   consume them
//! - Preserve the arena's aspect ratio on 1:2 terminal glyphs

pub mod draw;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blub_core as core;
pub use blub_types as types;

pub use draw::{draw_list, draw_list_into, DrawCommand, DrawList, Label};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FieldLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
