//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are always full redraws; the demo draws once per locked piece.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::Tile;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Clear the screen and draw a frame from the top-left corner
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        encode_full_into(fb, &mut self.buf)?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Option<Tile>> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some(cell.tile) {
                match cell.tile {
                    Some(tile) => out.queue(SetForegroundColor(tile_color(tile)))?,
                    None => out.queue(ResetColor)?,
                };
                current = Some(cell.tile);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

pub fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Cyan => Color::Cyan,
        Tile::Yellow => Color::Yellow,
        Tile::Purple => Color::Magenta,
        Tile::Blue => Color::Blue,
        Tile::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        Tile::Green => Color::Green,
        Tile::Red => Color::Red,
    }
}
