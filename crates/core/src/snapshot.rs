use crate::session::GameSession;
use crate::types::{Bounds, Cell, Coord, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Read-only copy of the session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl From<&GameSession> for SessionSnapshot {
    fn from(value: &GameSession) -> Self {
        Self {
            score: value.score(),
            level: value.level(),
            lines: value.lines(),
        }
    }
}

/// Read-only copy of the whole board, handed to view collaborators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub bounds: Bounds,
    /// Row-major from the bottom-left corner (y_min, x_min)
    pub cells: Vec<Cell>,
    pub session: SessionSnapshot,
    pub piece_id: u32,
    pub episode_id: u32,
}

impl BoardSnapshot {
    pub fn tile_at(&self, coord: Coord) -> Cell {
        if !self.bounds.contains(coord) {
            return None;
        }
        let col = (coord.x - self.bounds.x_min) as usize;
        let row = (coord.y - self.bounds.y_min) as usize;
        self.cells
            .get(row * self.bounds.width() as usize + col)
            .copied()
            .flatten()
    }

    /// Cells of row `y`, left to right; empty for rows outside the board
    pub fn row_tiles(&self, y: i32) -> &[Cell] {
        if y < self.bounds.y_min || y >= self.bounds.y_max {
            return &[];
        }
        let width = self.bounds.width() as usize;
        let start = (y - self.bounds.y_min) as usize * width;
        self.cells.get(start..start + width).unwrap_or(&[])
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        let bounds = Bounds::centered(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
        Self {
            bounds,
            cells: vec![None; (bounds.width() * bounds.height()) as usize],
            session: SessionSnapshot::default(),
            piece_id: 0,
            episode_id: 0,
        }
    }
}
