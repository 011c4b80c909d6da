//! Active piece - the falling tetromino the player controls
//!
//! The board never owns the falling piece. It only reads the piece's
//! footprint, anchor and tile through [`ActivePiece`]. [`Piece`] is the
//! stock implementation: it follows the erase / validate / redraw protocol for
//! every move, so the piece is always drawn on the grid between calls.

use crate::board::Board;
use crate::catalog::{PieceCells, TetrominoData};
use crate::rng::PieceRandomizer;
use crate::types::{Coord, TetrominoKind, Tile, DEFAULT_SPAWN_ANCHOR};

/// What the board needs to know about a falling piece
pub trait ActivePiece {
    /// Reset the piece to a fresh catalog entry at `anchor`
    fn initialize(&mut self, data: &TetrominoData, anchor: Coord);

    /// Cell offsets relative to the anchor
    fn footprint(&self) -> &[Coord];

    fn anchor(&self) -> Coord;

    fn tile(&self) -> Tile;
}

/// Stock falling piece: one catalog entry plus position and orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    data: TetrominoData,
    cells: PieceCells,
    anchor: Coord,
    /// Quarter turns clockwise from spawn orientation (0..4)
    rotation: u8,
}

impl Piece {
    pub fn new(data: TetrominoData, anchor: Coord) -> Self {
        Self {
            data,
            cells: data.cells,
            anchor,
            rotation: 0,
        }
    }

    pub fn kind(&self) -> TetrominoKind {
        self.data.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Try to shift the piece by `(dx, dy)`
    ///
    /// Returns false and leaves the piece where it was if the target is blocked.
    pub fn try_move<R: PieceRandomizer>(&mut self, board: &mut Board<R>, dx: i32, dy: i32) -> bool {
        board.clear_piece(self);

        let target = self.anchor + Coord::new(dx, dy);
        let valid = board.is_valid_position(&self.cells, target);
        if valid {
            self.anchor = target;
        }

        board.set_piece(self);
        valid
    }

    /// Try a quarter turn about the piece origin
    ///
    /// There are no wall kicks: a blocked rotation is simply rejected.
    pub fn try_rotate<R: PieceRandomizer>(&mut self, board: &mut Board<R>, clockwise: bool) -> bool {
        board.clear_piece(self);

        let rotated = rotate_cells(&self.cells, self.data.kind, clockwise);
        let valid = board.is_valid_position(&rotated, self.anchor);
        if valid {
            self.cells = rotated;
            self.rotation = if clockwise {
                (self.rotation + 1) % 4
            } else {
                (self.rotation + 3) % 4
            };
        }

        board.set_piece(self);
        valid
    }

    /// Drop straight down until blocked, returning the distance fallen
    pub fn hard_drop<R: PieceRandomizer>(&mut self, board: &mut Board<R>) -> u32 {
        let mut distance = 0;
        while self.try_move(board, 0, -1) {
            distance += 1;
        }
        distance
    }
}

impl Default for Piece {
    /// An I piece at the default spawn anchor, replaced on the first spawn
    fn default() -> Self {
        Self::new(TetrominoData::new(TetrominoKind::I), DEFAULT_SPAWN_ANCHOR)
    }
}

impl ActivePiece for Piece {
    fn initialize(&mut self, data: &TetrominoData, anchor: Coord) {
        *self = Piece::new(*data, anchor);
    }

    fn footprint(&self) -> &[Coord] {
        &self.cells
    }

    fn anchor(&self) -> Coord {
        self.anchor
    }

    fn tile(&self) -> Tile {
        self.data.tile
    }
}

/// Rotate cells a quarter turn (y up)
///
/// I and O pivot on the corner shared by their four central cells, so their
/// offsets are doubled around a half-cell center before turning.
pub fn rotate_cells(cells: &PieceCells, kind: TetrominoKind, clockwise: bool) -> PieceCells {
    let mut out = *cells;
    for cell in &mut out {
        *cell = if kind.rotates_about_half_cell() {
            let (x2, y2) = (2 * cell.x - 1, 2 * cell.y - 1);
            let (rx, ry) = if clockwise { (y2, -x2) } else { (-y2, x2) };
            Coord::new((rx + 1).div_euclid(2), (ry + 1).div_euclid(2))
        } else if clockwise {
            Coord::new(cell.y, -cell.x)
        } else {
            Coord::new(-cell.y, cell.x)
        };
    }
    out
}
