//! Line clearing - detects full rows and compacts the stack downward
//!
//! Rows are scanned bottom to top. When a row is cleared, everything above it
//! shifts down one and the same row is tested again, so stacked or scattered
//! full rows all collapse in a single pass.

use crate::grid::Grid;
use crate::types::Coord;

/// Check if every column of a row is occupied
pub fn is_line_full(grid: &Grid, row: i32) -> bool {
    let bounds = grid.bounds();
    (bounds.x_min..bounds.x_max).all(|col| grid.has_tile(Coord::new(col, row)))
}

/// Empty a row, then shift every row above it down by one
///
/// The top row is refilled from above the grid, which is always empty.
pub fn clear_line(grid: &mut Grid, row: i32) {
    let bounds = grid.bounds();

    for col in bounds.x_min..bounds.x_max {
        grid.set_tile(Coord::new(col, row), None);
    }

    for y in row..bounds.y_max {
        for col in bounds.x_min..bounds.x_max {
            let above = grid.tile(Coord::new(col, y + 1));
            grid.set_tile(Coord::new(col, y), above);
        }
    }
}

/// Clear all full rows and return how many were cleared
pub fn clear_lines(grid: &mut Grid) -> u32 {
    let bounds = grid.bounds();
    let mut row = bounds.y_min;
    let mut cleared = 0;

    while row < bounds.y_max {
        if is_line_full(grid, row) {
            clear_line(grid, row);
            cleared += 1;
        } else {
            row += 1;
        }
    }

    cleared
}
