//! Piece placement - writes and erases footprints on the grid
//!
//! Neither function validates. Callers check with
//! [`crate::bounds::is_valid_position`] first.

use crate::grid::Grid;
use crate::types::{Coord, Tile};

/// Write `tile` at every absolute cell of the footprint
pub fn set_piece(grid: &mut Grid, footprint: &[Coord], anchor: Coord, tile: Tile) {
    for &offset in footprint {
        grid.set_tile(offset + anchor, Some(tile));
    }
}

/// Empty every absolute cell of the footprint
pub fn clear_piece(grid: &mut Grid, footprint: &[Coord], anchor: Coord) {
    for &offset in footprint {
        grid.set_tile(offset + anchor, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: [Coord; 4] = [
        Coord::new(-1, 1),
        Coord::new(0, 1),
        Coord::new(1, 1),
        Coord::new(2, 1),
    ];

    #[test]
    fn test_set_then_clear_restores_grid() {
        let mut grid = Grid::new(10, 20);
        let anchor = Coord::new(0, 0);

        set_piece(&mut grid, &BAR, anchor, Tile::Cyan);
        assert_eq!(grid.occupied_count(), 4);
        for offset in BAR {
            assert_eq!(grid.tile(offset + anchor), Some(Tile::Cyan));
        }

        clear_piece(&mut grid, &BAR, anchor);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clear_only_touches_footprint() {
        let mut grid = Grid::new(10, 20);
        grid.set_tile(Coord::new(-5, -10), Some(Tile::Red));

        set_piece(&mut grid, &BAR, Coord::new(0, 3), Tile::Cyan);
        clear_piece(&mut grid, &BAR, Coord::new(0, 3));

        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.tile(Coord::new(-5, -10)), Some(Tile::Red));
    }
}
