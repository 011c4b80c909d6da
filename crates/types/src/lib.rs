//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types shared by the board engine, the
//! terminal view and the demo binary. Everything here is plain data with no
//! game logic attached.
//!
//! # Coordinates
//!
//! The board uses integer coordinates with a centered origin and y pointing up:
//!
//! - A board of width `W` and height `H` covers `[-W/2, -W/2 + W) x [-H/2, -H/2 + H)`
//! - Integer division rounds toward zero, so for odd dimensions the extra unit
//!   falls toward the positive axes
//! - Row `y_min` is the bottom row, row `y_max - 1` is the top row
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 10 | Columns |
//! | `DEFAULT_BOARD_HEIGHT` | 20 | Rows |
//! | `DEFAULT_SPAWN_ANCHOR` | (-1, 8) | Anchor for freshly spawned pieces |
//! | `MAX_BOARD_DIMENSION` | 1024 | Largest configurable width or height |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level step |
//!
//! # Examples
//!
//! ```
//! use tetris_board_types::{Bounds, Coord, TetrominoKind};
//!
//! let bounds = Bounds::centered(10, 20);
//! assert_eq!(bounds.x_min, -5);
//! assert_eq!(bounds.y_max, 10);
//! assert!(bounds.contains(Coord::new(4, 9)));
//! assert!(!bounds.contains(Coord::new(5, 0)));
//!
//! assert_eq!(TetrominoKind::from_str("t"), Some(TetrominoKind::T));
//! ```

use std::ops::{Add, Sub};

use serde::Deserialize;

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: i32 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: i32 = 20;

/// Default spawn anchor, two rows below the top of a 10x20 board
pub const DEFAULT_SPAWN_ANCHOR: Coord = Coord::new(-1, 8);

/// Largest accepted board width or height
pub const MAX_BOARD_DIMENSION: i32 = 1024;

/// Level increases once every `LINES_PER_LEVEL` cleared lines
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear multipliers (classic single/double/triple/tetris)
///
/// Indexed by lines cleared in one event. Index 0 is never scored.
/// Counts outside `1..=4` fall back to [`FALLBACK_MULTIPLIER`].
pub const LINE_MULTIPLIERS: [u32; 5] = [FALLBACK_MULTIPLIER, 40, 100, 300, 1200];

/// Multiplier used for clear counts without a table entry
pub const FALLBACK_MULTIPLIER: u32 = 1;

/// An integer grid coordinate (x grows right, y grows up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

/// Rectangular extent of the board, half-open on the max side
///
/// `x_min..x_max` are the columns, `y_min..y_max` are the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Bounds {
    /// Build the extent of a `width x height` board centered on the origin
    pub const fn centered(width: i32, height: i32) -> Self {
        let x_min = -width / 2;
        let y_min = -height / 2;
        Self {
            x_min,
            y_min,
            x_max: x_min + width,
            y_max: y_min + height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub const fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Lower-left corner of the board
    pub const fn origin(&self) -> Coord {
        Coord::new(self.x_min, self.y_min)
    }

    /// Check if a coordinate lies inside the extent
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.x_min && coord.x < self.x_max && coord.y >= self.y_min && coord.y < self.y_max
    }
}

/// Visual identifier of a locked or falling cell
///
/// The view layer maps each tile to a color; the engine only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Cyan,
    Yellow,
    Purple,
    Blue,
    Orange,
    Green,
    Red,
}

impl Tile {
    /// Single-character glyph used by text views
    pub fn glyph(&self) -> char {
        match self {
            Tile::Cyan => 'I',
            Tile::Yellow => 'O',
            Tile::Purple => 'T',
            Tile::Blue => 'J',
            Tile::Orange => 'L',
            Tile::Green => 'S',
            Tile::Red => 'Z',
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell occupied by a tile of that kind
pub type Cell = Option<Tile>;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl TetrominoKind {
    /// Every kind, in catalog order
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::J,
        TetrominoKind::L,
        TetrominoKind::S,
        TetrominoKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_board_types::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_str("i"), Some(TetrominoKind::I));
    /// assert_eq!(TetrominoKind::from_str("Z"), Some(TetrominoKind::Z));
    /// assert_eq!(TetrominoKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(TetrominoKind::I),
            "o" => Some(TetrominoKind::O),
            "t" => Some(TetrominoKind::T),
            "j" => Some(TetrominoKind::J),
            "l" => Some(TetrominoKind::L),
            "s" => Some(TetrominoKind::S),
            "z" => Some(TetrominoKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "i",
            TetrominoKind::O => "o",
            TetrominoKind::T => "t",
            TetrominoKind::J => "j",
            TetrominoKind::L => "l",
            TetrominoKind::S => "s",
            TetrominoKind::Z => "z",
        }
    }

    /// Tile drawn for cells of this kind
    pub fn tile(&self) -> Tile {
        match self {
            TetrominoKind::I => Tile::Cyan,
            TetrominoKind::O => Tile::Yellow,
            TetrominoKind::T => Tile::Purple,
            TetrominoKind::J => Tile::Blue,
            TetrominoKind::L => Tile::Orange,
            TetrominoKind::S => Tile::Green,
            TetrominoKind::Z => Tile::Red,
        }
    }

    /// Whether quarter turns pivot around the half-cell center instead of a cell
    pub fn rotates_about_half_cell(&self) -> bool {
        matches!(self, TetrominoKind::I | TetrominoKind::O)
    }
}
