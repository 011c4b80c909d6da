//! BoardView: maps a `BoardSnapshot` into a framebuffer.
//!
//! This module is pure (no I/O). The top row of the board is drawn first.

use crate::core::BoardSnapshot;
use crate::fb::{FrameBuffer, FrameCell};
use crate::types::Coord;

/// Gap between the board frame and the score panel
const PANEL_GAP: u16 = 2;

/// Widest panel line ("LINES  4294967295")
const PANEL_WIDTH: u16 = 17;

pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Frame size needed for a snapshot (board frame plus side panel)
    pub fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        let frame_w = snap.bounds.width() as u16 * self.cell_w + 2;
        let frame_h = snap.bounds.height() as u16 + 2;
        (frame_w + PANEL_GAP + PANEL_WIDTH, frame_h.max(4))
    }

    pub fn render_into(&self, snap: &BoardSnapshot, fb: &mut FrameBuffer) {
        let (w, h) = self.frame_size(snap);
        if fb.width() != w || fb.height() != h {
            fb.resize(w, h);
        } else {
            fb.clear();
        }

        let b = snap.bounds;
        let board_w = b.width() as u16 * self.cell_w;
        let board_h = b.height() as u16;

        self.draw_border(fb, board_w + 2, board_h + 2);

        for (i, y) in (b.y_min..b.y_max).rev().enumerate() {
            for (j, x) in (b.x_min..b.x_max).enumerate() {
                let cell = match snap.tile_at(Coord::new(x, y)) {
                    Some(tile) => FrameCell {
                        ch: '█',
                        tile: Some(tile),
                    },
                    None => FrameCell { ch: '·', tile: None },
                };
                for dx in 0..self.cell_w {
                    fb.set(1 + j as u16 * self.cell_w + dx, 1 + i as u16, cell);
                }
            }
        }

        let panel_x = board_w + 2 + PANEL_GAP;
        let s = snap.session;
        fb.put_str(panel_x, 1, &format!("SCORE  {}", s.score));
        fb.put_str(panel_x, 2, &format!("LEVEL  {}", s.level));
        fb.put_str(panel_x, 3, &format!("LINES  {}", s.lines));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(snap, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        let plain = |ch| FrameCell { ch, tile: None };
        for x in 1..w - 1 {
            fb.set(x, 0, plain('─'));
            fb.set(x, h - 1, plain('─'));
        }
        for y in 1..h - 1 {
            fb.set(0, y, plain('│'));
            fb.set(w - 1, y, plain('│'));
        }
        fb.set(0, 0, plain('┌'));
        fb.set(w - 1, 0, plain('┐'));
        fb.set(0, h - 1, plain('└'));
        fb.set(w - 1, h - 1, plain('┘'));
    }
}
