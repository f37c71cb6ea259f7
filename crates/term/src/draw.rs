//! Draw commands: what a frame shows, in arena coordinates.
//!
//! This is the boundary between the simulation and any rasterizer. A frame is
//! always the same five commands in the same order, so the list has a fixed
//! capacity and building it never allocates.

use std::fmt::Write;

use arrayvec::{ArrayString, ArrayVec};

use crate::core::SimSnapshot;
use crate::fb::Rgb;
use crate::types::{Rect, FIELD_HEIGHT, FIELD_WIDTH};

pub const BACKGROUND_COLOR: Rgb = Rgb::new(41, 170, 240);
pub const ENTITY_COLOR: Rgb = Rgb::new(212, 51, 52);
pub const TEXT_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Anchor of the "Score" label.
pub const SCORE_LABEL_POS: (i64, i64) = (10, 10);
/// Anchor of the "High Score" label.
pub const HIGH_SCORE_LABEL_POS: (i64, i64) = (10, 30);

/// Text payload; "High Score: " plus any `u32` fits.
pub type Label = ArrayString<32>;

/// Number of commands in every frame.
pub const FRAME_COMMANDS: usize = 5;

pub type DrawList = ArrayVec<DrawCommand, FRAME_COMMANDS>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Rgb },
    Text { x: i64, y: i64, text: Label, color: Rgb },
}

/// Build the draw commands for one frame.
pub fn draw_list(snap: &SimSnapshot) -> DrawList {
    let mut out = DrawList::new();
    draw_list_into(snap, &mut out);
    out
}

/// Build the draw commands for one frame into a reused list.
///
/// Order: background, net, fish, score label, high score label.
pub fn draw_list_into(snap: &SimSnapshot, out: &mut DrawList) {
    out.clear();

    out.push(DrawCommand::FillRect {
        rect: Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT),
        color: BACKGROUND_COLOR,
    });
    out.push(DrawCommand::FillRect {
        rect: snap.net,
        color: ENTITY_COLOR,
    });
    out.push(DrawCommand::FillRect {
        rect: snap.fish,
        color: ENTITY_COLOR,
    });

    let (x, y) = SCORE_LABEL_POS;
    out.push(DrawCommand::Text {
        x,
        y,
        text: label("Score: ", snap.score),
        color: TEXT_COLOR,
    });

    let (x, y) = HIGH_SCORE_LABEL_POS;
    out.push(DrawCommand::Text {
        x,
        y,
        text: label("High Score: ", snap.high_score),
        color: TEXT_COLOR,
    });
}

fn label(prefix: &str, value: u32) -> Label {
    let mut text = Label::new();
    // Capacity covers the longest prefix plus ten digits.
    let _ = write!(text, "{}{}", prefix, value);
    text
}
