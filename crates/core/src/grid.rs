//! Grid module - the occupancy store behind the board
//!
//! The grid is a `width x height` rectangle of cells centered on the origin,
//! with y growing upward. Uses a flat vector allocated once at construction;
//! nothing resizes it afterwards.
//!
//! The grid does not decide what a legal write is. Callers validate through
//! [`crate::bounds::is_valid_position`] first; a write outside the extent is a
//! contract violation and panics.

use crate::types::{Bounds, Cell, Coord, Tile};

/// Fixed-size occupancy grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    bounds: Bounds,
    /// Flat array of cells, row-major from the bottom row (y_min) upward
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive or the cell count
    /// overflows `usize`.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let len = (width as usize)
            .checked_mul(height as usize)
            .unwrap_or_else(|| panic!("grid dimensions overflow: {width}x{height}"));
        Self {
            bounds: Bounds::centered(width, height),
            cells: vec![None; len],
        }
    }

    /// Calculate flat index for a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.bounds.contains(coord) {
            return None;
        }
        let col = (coord.x - self.bounds.x_min) as usize;
        let row = (coord.y - self.bounds.y_min) as usize;
        Some(row * self.bounds.width() as usize + col)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Check whether a coordinate holds a tile
    ///
    /// Coordinates outside the grid never hold a tile.
    pub fn has_tile(&self, coord: Coord) -> bool {
        self.tile(coord).is_some()
    }

    /// Get the tile at a coordinate, `None` if empty or outside the grid
    pub fn tile(&self, coord: Coord) -> Cell {
        self.index(coord).and_then(|idx| self.cells[idx])
    }

    /// Write a tile (or `None` to empty the cell)
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    pub fn set_tile(&mut self, coord: Coord, cell: Cell) {
        match self.index(coord) {
            Some(idx) => self.cells[idx] = cell,
            None => panic!(
                "write outside grid extent: ({}, {}) not in [{}, {}) x [{}, {})",
                coord.x,
                coord.y,
                self.bounds.x_min,
                self.bounds.x_max,
                self.bounds.y_min,
                self.bounds.y_max
            ),
        }
    }

    /// Empty every cell
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells, bottom row first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of a single row, left to right
    ///
    /// Returns an empty slice for rows outside the grid.
    pub fn row(&self, y: i32) -> &[Cell] {
        if y < self.bounds.y_min || y >= self.bounds.y_max {
            return &[];
        }
        let width = self.bounds.width() as usize;
        let start = (y - self.bounds.y_min) as usize * width;
        &self.cells[start..start + width]
    }

    /// Build a grid from text rows, top row first
    ///
    /// `.` is empty; any other character places a tile of the given kind.
    /// Handy for tests and benchmarks.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged or empty.
    pub fn from_rows(rows: &[&str], tile: Tile) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Grid::new(width, height);
        let bounds = grid.bounds;
        for (i, text) in rows.iter().enumerate() {
            assert_eq!(text.chars().count() as i32, width, "ragged row {i}");
            let y = bounds.y_max - 1 - i as i32;
            for (j, ch) in text.chars().enumerate() {
                if ch != '.' {
                    grid.set_tile(Coord::new(bounds.x_min + j as i32, y), Some(tile));
                }
            }
        }
        grid
    }

    /// Render rows as text, top row first (inverse of [`Grid::from_rows`])
    pub fn to_rows(&self) -> Vec<String> {
        (self.bounds.y_min..self.bounds.y_max)
            .rev()
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|cell| cell.map_or('.', |t| t.glyph()))
                    .collect()
            })
            .collect()
    }
}
