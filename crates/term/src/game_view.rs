//! GameView: rasterizes draw commands into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SimSnapshot;
use crate::draw::{draw_list_into, DrawCommand, DrawList};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, FIELD_HEIGHT, FIELD_WIDTH, WINDOW_TITLE};

const HINT: &str = "↑/↓ or k/j move net · q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the field lands inside the viewport.
///
/// `x, y` is the top-left field cell (inside the border); `cols x rows` is the
/// field size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl FieldLayout {
    /// Arena x to field column (floor; may be negative or past the field).
    pub fn col_of(&self, ax: i64) -> i64 {
        scale_floor(ax, self.cols, FIELD_WIDTH)
    }

    /// Arena y to field row (floor; may be negative or past the field).
    pub fn row_of(&self, ay: i64) -> i64 {
        scale_floor(ay, self.rows, FIELD_HEIGHT)
    }

    /// Cells covered by an arena rectangle, clipped to the field.
    ///
    /// Start edges round down and end edges round up, and any rectangle keeps
    /// at least one cell on each axis before clipping so small entities never
    /// vanish. Returns `(x, y, w, h)` in viewport cells.
    pub fn cells_of(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let (c0, c1) = scale_span(rect.x, rect.w, self.cols, FIELD_WIDTH);
        let (r0, r1) = scale_span(rect.y, rect.h, self.rows, FIELD_HEIGHT);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((
            self.x + c0,
            self.y + r0,
            c1 - c0,
            r1 - r0,
        ))
    }
}

/// Coordinates further than one field away on either side all land off-field,
/// so they are pinned there before scaling.
fn pin(a: i64, extent: i64) -> i64 {
    a.clamp(-extent, 2 * extent)
}

fn scale_floor(a: i64, cells: u16, extent: i64) -> i64 {
    (pin(a, extent) * cells as i64).div_euclid(extent)
}

/// Scale `[start, start + len)` from `extent` arena units to `cells`, clip to
/// `[0, cells)`.
fn scale_span(start: i64, len: i64, cells: u16, extent: i64) -> (u16, u16) {
    let lo = scale_floor(start, cells, extent);
    let end = pin(start.saturating_add(len), extent) * cells as i64;
    let cells = cells as i64;
    let mut hi = -(-end).div_euclid(extent);
    if hi <= lo {
        hi = lo + 1;
    }
    let lo = lo.clamp(0, cells) as u16;
    let hi = hi.clamp(0, cells) as u16;
    (lo, hi)
}

/// A lightweight terminal renderer for the arena.
pub struct GameView {
    /// Terminal glyph height divided by width.
    glyph_aspect: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Most terminal fonts are about twice as tall as they are wide.
        Self { glyph_aspect: 2 }
    }
}

impl GameView {
    /// Fit the field into `viewport`, leaving room for a one-cell border.
    ///
    /// Returns `None` when the viewport cannot hold even a single field cell.
    pub fn layout(&self, viewport: Viewport) -> Option<FieldLayout> {
        let avail_w = viewport.width.saturating_sub(2) as i64;
        let avail_h = viewport.height.saturating_sub(2) as i64;
        let cols_per_row = FIELD_WIDTH as i64 * self.glyph_aspect as i64;

        let rows = avail_h.min(avail_w * FIELD_HEIGHT as i64 / cols_per_row);
        let cols = rows * cols_per_row / FIELD_HEIGHT as i64;
        if rows <= 0 || cols <= 0 {
            return None;
        }
        let (rows, cols) = (rows as u16, cols as u16);

        let frame_w = cols + 2;
        let frame_h = rows + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        Some(FieldLayout {
            x: start_x + 1,
            y: start_y + 1,
            cols,
            rows,
        })
    }

    /// Render the current simulation state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &SimSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let mut list = DrawList::new();
        draw_list_into(snap, &mut list);
        self.render_list_into(&list, viewport, fb);
    }

    /// Rasterize an already-built frame.
    pub fn render_list_into(&self, list: &DrawList, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let Some(field) = self.layout(viewport) else {
            return;
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(fb, field, border);

        let mut last_label_row: Option<u16> = None;
        for cmd in list {
            match cmd {
                DrawCommand::FillRect { rect, color } => {
                    if let Some((x, y, w, h)) = field.cells_of(*rect) {
                        fb.fill_rect(x, y, w, h, CellStyle::solid(*color).cell('█'));
                    }
                }
                DrawCommand::Text { x, y, text, color } => {
                    last_label_row =
                        self.draw_label(fb, field, (*x, *y), text, *color, last_label_row);
                }
            }
        }

        self.draw_hint(fb, field, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SimSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw a label over whatever is already in the field, keeping each label
    /// on its own row. Returns the row used.
    fn draw_label(
        &self,
        fb: &mut FrameBuffer,
        field: FieldLayout,
        (ax, ay): (i64, i64),
        text: &str,
        color: Rgb,
        last_row: Option<u16>,
    ) -> Option<u16> {
        let col = field.col_of(ax);
        let mut row = field.row_of(ay);
        if let Some(last) = last_row {
            row = row.max(last as i64 + 1);
        }
        if col < 0 || row < 0 || col >= field.cols as i64 || row >= field.rows as i64 {
            return last_row;
        }
        let (col, row) = (col as u16, row as u16);

        let py = field.y + row;
        let field_end = field.x + field.cols;
        for (px, ch) in (field.x + col..field_end).zip(text.chars()) {
            let bg = fb.get(px, py).map(|c| c.style.bg).unwrap_or_default();
            let style = CellStyle {
                fg: color,
                bg,
                bold: true,
            };
            fb.set(px, py, style.cell(ch));
        }
        Some(row)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, field: FieldLayout, style: CellStyle) {
        let x0 = field.x - 1;
        let y0 = field.y - 1;
        let x1 = field.x + field.cols;
        let y1 = field.y + field.rows;

        fb.set(x0, y0, style.cell('┌'));
        fb.set(x1, y0, style.cell('┐'));
        fb.set(x0, y1, style.cell('└'));
        fb.set(x1, y1, style.cell('┘'));
        for x in field.x..x1 {
            fb.set(x, y0, style.cell('─'));
            fb.set(x, y1, style.cell('─'));
        }
        for y in field.y..y1 {
            fb.set(x0, y, style.cell('│'));
            fb.set(x1, y, style.cell('│'));
        }

        // Title centered in the top edge, when it fits with a space either side.
        let title_w = WINDOW_TITLE.chars().count() as u16 + 2;
        if field.cols >= title_w + 2 {
            let tx = field.x + (field.cols - title_w) / 2;
            let title = CellStyle { bold: true, ..style };
            fb.set(tx, y0, title.cell(' '));
            fb.put_str(tx + 1, y0, x1, WINDOW_TITLE, title);
            fb.set(tx + title_w - 1, y0, title.cell(' '));
        }
    }

    fn draw_hint(&self, fb: &mut FrameBuffer, field: FieldLayout, viewport: Viewport) {
        let y = field.y + field.rows + 1;
        if y >= viewport.height {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        fb.put_str(field.x - 1, y, viewport.width, HINT, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(cols: u16, rows: u16) -> FieldLayout {
        FieldLayout {
            x: 1,
            y: 1,
            cols,
            rows,
        }
    }

    #[test]
    fn layout_keeps_aspect_ratio() {
        let view = GameView::default();
        // 80x24: rows = min(22, 78 * 480 / 1280 = 29) = 22, cols = 22 * 1280 / 480 = 58
        let field = view.layout(Viewport::new(80, 24)).unwrap();
        assert_eq!((field.cols, field.rows), (58, 22));
        assert_eq!(field.x, (80 - 60) / 2 + 1);
        assert_eq!(field.y, 1);
    }

    #[test]
    fn layout_is_width_bound_on_narrow_viewports() {
        let view = GameView::default();
        // 34x40: rows = min(38, 32 * 480 / 1280 = 12) = 12, cols = 32
        let field = view.layout(Viewport::new(34, 40)).unwrap();
        assert_eq!((field.cols, field.rows), (32, 12));
        assert_eq!(field.y, (40 - 14) / 2 + 1);
    }

    #[test]
    fn layout_rejects_tiny_viewports() {
        let view = GameView::default();
        assert!(view.layout(Viewport::new(2, 2)).is_none());
        assert!(view.layout(Viewport::new(4, 10)).is_none());
    }

    #[test]
    fn full_field_covers_every_cell() {
        let field = layout(64, 48);
        assert_eq!(
            field.cells_of(Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT)),
            Some((1, 1, 64, 48))
        );
    }

    #[test]
    fn small_rect_keeps_one_cell() {
        // 15 units at 64/640 scale is 1.5 cells; start 0, end ceil(1.5) = 2.
        let field = layout(64, 48);
        assert_eq!(field.cells_of(Rect::new(0, 0, 15, 15)), Some((1, 1, 2, 2)));
        // 2 units at x=5: lo = 0, hi = ceil(0.7) = 1.
        assert_eq!(field.cells_of(Rect::new(5, 5, 2, 2)), Some((1, 1, 1, 1)));
    }

    #[test]
    fn rect_outside_field_is_dropped() {
        let field = layout(64, 48);
        assert_eq!(field.cells_of(Rect::new(600, -200, 15, 100)), None);
        assert_eq!(field.cells_of(Rect::new(600, 480, 15, 100)), None);
    }

    #[test]
    fn rect_partly_off_field_is_clipped() {
        let field = layout(64, 48);
        // net at y=-50..50 => rows -5..5 => clipped to 0..5; x 60..61.5 => 60..62
        assert_eq!(
            field.cells_of(Rect::new(600, -50, 15, 100)),
            Some((61, 1, 2, 5))
        );
    }

    #[test]
    fn far_off_field_rects_are_dropped() {
        let field = layout(64, 48);
        assert_eq!(field.cells_of(Rect::new(600, i64::MAX - 50, 15, 100)), None);
        assert_eq!(field.cells_of(Rect::new(600, i64::MIN, 15, 100)), None);
        assert_eq!(field.cells_of(Rect::new(600, 3_000_000_000, 15, 100)), None);
    }

    #[test]
    fn net_far_below_field_still_renders_frame() {
        let snap = SimSnapshot {
            net: Rect::new(600, i64::MAX, 15, 100),
            ..SimSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        // Net column stays water-colored on every field row.
        for y in 1..23 {
            assert_ne!(fb.get(65, y).map(|c| c.ch), Some('█'));
        }
    }
}
