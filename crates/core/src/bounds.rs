//! Bounds checking - the single legality gate for placements
//!
//! Both the spawn controller and the active-piece collaborator call
//! [`is_valid_position`] before any footprint lands on the grid.

use crate::grid::Grid;
use crate::types::Coord;

/// Check if a footprint fits on the grid at `anchor`
///
/// Every absolute cell (`offset + anchor`) must be empty and inside the grid.
/// Stops at the first violation.
pub fn is_valid_position(grid: &Grid, footprint: &[Coord], anchor: Coord) -> bool {
    let bounds = grid.bounds();
    footprint.iter().all(|&offset| {
        let cell = offset + anchor;
        !grid.has_tile(cell) && bounds.contains(cell)
    })
}
