//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It only reads game state.

use crate::core::{Drawable, GameState};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Cell, BOARD_BACKGROUND_COLOR, BORDER_COLOR};

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

/// Minimum panel width (columns) before the side panel is drawn.
const PANEL_MIN_WIDTH: u16 = 12;

const LABEL: GlyphStyle = GlyphStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: GlyphStyle = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HINT: GlyphStyle = GlyphStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered play area in terminal cells.
    ///
    /// Saturates at `u16::MAX` for boards too large for any terminal.
    pub fn frame_size(&self, state: &GameState) -> (u16, u16) {
        let board = state.board();
        (
            frame_extent(board.width(), self.cell_w),
            frame_extent(board.height(), self.cell_h),
        )
    }

    /// Render the game into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport; reusing one across frames
    /// avoids reallocating.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(state);
        let saturated = frame_w == u16::MAX || frame_h == u16::MAX;
        if saturated || viewport.width < frame_w || viewport.height < frame_h {
            self.draw_too_small(fb, viewport, frame_w, frame_h);
            return;
        }

        let start_x = (viewport.width - frame_w) / 2;
        let start_y = (viewport.height - frame_h) / 2;

        let background = GlyphStyle::new(BOARD_BACKGROUND_COLOR, BOARD_BACKGROUND_COLOR);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', background);
        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for entity in state.drawables() {
            self.draw_entity(fb, state, start_x, start_y, entity);
        }

        self.draw_side_panel(fb, state, viewport, (start_x + frame_w).saturating_add(2), start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_entity(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        entity: &dyn Drawable,
    ) {
        let board = state.board();
        // Outline glyphs in the border colour over the entity fill.
        let style = GlyphStyle::new(entity.border_color(), entity.color());
        entity.for_each_cell(&mut |cell: Cell| {
            if board.contains(cell) {
                self.fill_board_cell(fb, start_x, start_y, cell, style);
            }
        });
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        style: GlyphStyle,
    ) {
        let px = start_x + 1 + (cell.col as u16) * self.cell_w;
        let py = start_y + 1 + (cell.row as u16) * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                fb.put_char(px + dx, py + dy, self.cell_glyph(dx), style);
            }
        }
    }

    fn cell_glyph(&self, dx: u16) -> char {
        match (self.cell_w, dx) {
            (1, _) => '#',
            (_, 0) => '[',
            (w, x) if x == w - 1 => ']',
            _ => ' ',
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let rows: [(&str, u64); 4] = [
            ("LENGTH", state.snake().len() as u64),
            ("BEST", state.best_length() as u64),
            ("EPISODE", state.episode() as u64 + 1),
            ("TICK", state.tick_count()),
        ];

        let mut y = start_y;
        fb.put_str(panel_x, y, "SNAKE", LABEL);
        y = y.saturating_add(2);
        for (label, value) in rows {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u64(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "arrows/wasd", HINT);
        fb.put_str(panel_x, y.saturating_add(1), "q quit", HINT);
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
        let mid_y = viewport.height / 2;
        fb.put_str(0, mid_y, "TOO SMALL", LABEL);
        let y = mid_y.saturating_add(1);
        fb.put_str(0, y, "need ", VALUE);
        fb.put_u64(5, y, need_w as u64, VALUE);
        let x = 5 + digit_count(need_w);
        fb.put_char(x, y, 'x', VALUE);
        fb.put_u64(x + 1, y, need_h as u64, VALUE);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = GlyphStyle::new(BORDER_COLOR, BOARD_BACKGROUND_COLOR);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Cells along one axis, including both border columns or rows.
fn frame_extent(cells: i32, cell_span: u16) -> u16 {
    u16::try_from(cells)
        .unwrap_or(u16::MAX)
        .saturating_mul(cell_span)
        .saturating_add(2)
}

fn digit_count(mut n: u16) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
