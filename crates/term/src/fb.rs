//! FrameBuffer: a fixed grid of characters, each optionally tinted by a tile.

use crate::types::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCell {
    pub ch: char,
    pub tile: Option<Tile>,
}

impl Default for FrameCell {
    fn default() -> Self {
        Self { ch: ' ', tile: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<FrameCell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![FrameCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, FrameCell::default());
        self.clear();
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = FrameCell::default();
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<FrameCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Out-of-range writes are clipped.
    pub fn set(&mut self, x: u16, y: u16, cell: FrameCell) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = cell;
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x.saturating_add(i as u16), y, FrameCell { ch, tile: None });
        }
    }

    /// Plain text lines, trailing spaces trimmed.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let line: String = (0..self.width)
                    .map(|x| self.get(x, y).unwrap_or_default().ch)
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }
}
