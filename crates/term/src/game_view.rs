//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const APP_BG: Rgb = Rgb::new(250, 248, 239);
const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const TEXT_DARK: Rgb = Rgb::new(119, 110, 101);
const TEXT_LIGHT: Rgb = Rgb::new(249, 246, 242);

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

/// A lightweight terminal renderer for the sliding-tile board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles near-square and leaves room for four-digit values.
        Self {
            cell_w: 6,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let backdrop = CellStyle {
            fg: TEXT_DARK,
            bg: APP_BG,
            bold: false,
            dim: false,
        };
        fb.clear(backdrop.into_cell(' '));

        let board_px_w = (snap.width as u16) * self.cell_w;
        let board_px_h = (snap.height as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board = CellStyle {
            fg: EMPTY_BG,
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };

        // Background for the board area; tile gutters show through it.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', board);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, backdrop);

        for y in 0..snap.height as u16 {
            for x in 0..snap.width as u16 {
                let value = snap.value_at(x as u8, y as u8);
                if value > 0 {
                    self.draw_tile(fb, start_x, start_y, x, y, value);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over_overlay(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
        )
    }

    /// Tile block size within a cell, leaving a gutter when there is room.
    fn block_size(&self) -> (u16, u16) {
        let w = if self.cell_w > 2 {
            self.cell_w - 1
        } else {
            self.cell_w
        };
        let h = if self.cell_h > 1 {
            self.cell_h - 1
        } else {
            self.cell_h
        };
        (w, h)
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        value: u32,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        let (bw, bh) = self.block_size();
        let style = tile_style(value);
        fb.fill_rect(px, py, bw, bh, ' ', style);

        let text_y = py + bh / 2;
        let text_x = px + bw.saturating_sub(decimal_width(value)) / 2;
        fb.put_u32(text_x, text_y, value, style);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        let (bw, bh) = self.block_size();
        let style = CellStyle {
            fg: BOARD_BG,
            bg: EMPTY_BG,
            bold: false,
            dim: false,
        };
        fb.fill_rect(px, py, bw, bh, ' ', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let title = CellStyle {
            fg: Rgb::new(237, 194, 46),
            bg: APP_BG,
            bold: true,
            dim: false,
        };
        let label = CellStyle {
            fg: TEXT_DARK,
            bg: APP_BG,
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: TEXT_DARK,
            bg: APP_BG,
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "2048", title);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ARROWS  MOVE", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "R       NEW GAME", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "Q       QUIT", hint);
    }

    fn draw_game_over_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let inner_x = start_x + 1;
        let inner_w = frame_w.saturating_sub(2);
        let mid_y = start_y.saturating_add(frame_h / 2);
        let band_y = mid_y.saturating_sub(1);

        let base = CellStyle {
            fg: TEXT_LIGHT,
            bg: TEXT_DARK,
            bold: false,
            dim: false,
        };
        fb.fill_rect(inner_x, band_y, inner_w, 3, ' ', base);
        fb.put_str_centered(inner_x, mid_y, inner_w, "GAME OVER", CellStyle { bold: true, ..base });
        fb.put_str_centered(
            inner_x,
            mid_y.saturating_add(1),
            inner_w,
            "R  NEW GAME",
            CellStyle { dim: true, ..base },
        );
    }
}

/// Classic palette: light tiles carry dark text, hot tiles carry light text.
fn tile_style(value: u32) -> CellStyle {
    let (bg, dark_text) = match value {
        2 => (Rgb::new(238, 228, 218), true),
        4 => (Rgb::new(237, 224, 200), true),
        8 => (Rgb::new(242, 177, 121), false),
        16 => (Rgb::new(245, 149, 99), false),
        32 => (Rgb::new(246, 124, 95), false),
        64 => (Rgb::new(246, 94, 59), false),
        128 => (Rgb::new(237, 207, 114), false),
        256 => (Rgb::new(237, 204, 97), false),
        512 => (Rgb::new(237, 200, 80), false),
        1024 => (Rgb::new(237, 197, 63), false),
        2048 => (Rgb::new(237, 194, 46), false),
        _ => (Rgb::new(60, 58, 50), false),
    };
    CellStyle {
        fg: if dark_text { TEXT_DARK } else { TEXT_LIGHT },
        bg,
        bold: true,
        dim: false,
    }
}

fn decimal_width(value: u32) -> u16 {
    let mut n = value;
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
