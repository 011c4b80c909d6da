//! Catalog module - tetromino shape data
//!
//! Each catalog entry holds the cells of its kind in spawn orientation and the
//! tile it draws with. Entries are derived once when the catalog is built and
//! never change afterwards.

use crate::types::{Coord, TetrominoKind, Tile};

/// Cells of one piece relative to its anchor
pub type PieceCells = [Coord; 4];

/// Shape and tile of one tetromino kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TetrominoData {
    pub kind: TetrominoKind,
    pub cells: PieceCells,
    pub tile: Tile,
}

impl TetrominoData {
    /// Derive the shape data for a kind
    pub fn new(kind: TetrominoKind) -> Self {
        Self {
            kind,
            cells: spawn_cells(kind),
            tile: kind.tile(),
        }
    }
}

/// Spawn-orientation cells (y up, anchor at the origin)
pub fn spawn_cells(kind: TetrominoKind) -> PieceCells {
    let c = Coord::new;
    match kind {
        TetrominoKind::I => [c(-1, 1), c(0, 1), c(1, 1), c(2, 1)],
        TetrominoKind::J => [c(-1, 1), c(-1, 0), c(0, 0), c(1, 0)],
        TetrominoKind::L => [c(1, 1), c(-1, 0), c(0, 0), c(1, 0)],
        TetrominoKind::O => [c(0, 1), c(1, 1), c(0, 0), c(1, 0)],
        TetrominoKind::S => [c(0, 1), c(1, 1), c(-1, 0), c(0, 0)],
        TetrominoKind::T => [c(0, 1), c(-1, 0), c(0, 0), c(1, 0)],
        TetrominoKind::Z => [c(-1, 1), c(0, 1), c(0, 0), c(1, 0)],
    }
}

/// Immutable set of pieces the spawner draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TetrominoData>,
}

impl Catalog {
    /// Initialize the catalog for the given kinds, in order
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty; the spawner needs at least one piece.
    pub fn initialize(kinds: &[TetrominoKind]) -> Self {
        assert!(!kinds.is_empty(), "catalog needs at least one tetromino kind");
        Self {
            entries: kinds.iter().map(|&kind| TetrominoData::new(kind)).collect(),
        }
    }

    /// All seven tetrominoes
    pub fn standard() -> Self {
        Self::initialize(&TetrominoKind::ALL)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TetrominoData> {
        self.entries.get(index)
    }

    /// Look up the entry for a kind
    pub fn find(&self, kind: TetrominoKind) -> Option<&TetrominoData> {
        self.entries.iter().find(|data| data.kind == kind)
    }

    pub fn entries(&self) -> &[TetrominoData] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
