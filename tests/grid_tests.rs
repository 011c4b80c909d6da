//! Grid, bounds checking and placement tests

use tetris_board::core::bounds::is_valid_position;
use tetris_board::core::placement::{clear_piece, set_piece};
use tetris_board::core::Grid;
use tetris_board::types::{Coord, Tile, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

const SQUARE: [Coord; 4] = [
    Coord::new(0, 1),
    Coord::new(1, 1),
    Coord::new(0, 0),
    Coord::new(1, 0),
];

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);

    let b = grid.bounds();
    for y in b.y_min..b.y_max {
        for x in b.x_min..b.x_max {
            assert!(!grid.has_tile(Coord::new(x, y)), "({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_grid_origin_is_centered() {
    let grid = Grid::new(10, 20);
    assert_eq!(grid.bounds().origin(), Coord::new(-5, -10));

    let odd = Grid::new(9, 7);
    assert_eq!(odd.bounds().origin(), Coord::new(-4, -3));
    assert_eq!((odd.bounds().x_max, odd.bounds().y_max), (5, 4));
}

#[test]
fn test_grid_outside_reads_as_empty() {
    let grid = Grid::new(10, 20);
    assert!(!grid.has_tile(Coord::new(-6, 0)));
    assert!(!grid.has_tile(Coord::new(0, 10)));
    assert_eq!(grid.tile(Coord::new(5, -10)), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(10, 20);

    grid.set_tile(Coord::new(0, 0), Some(Tile::Purple));
    assert!(grid.has_tile(Coord::new(0, 0)));
    assert_eq!(grid.tile(Coord::new(0, 0)), Some(Tile::Purple));

    grid.set_tile(Coord::new(-5, -10), Some(Tile::Cyan));
    assert_eq!(grid.tile(Coord::new(-5, -10)), Some(Tile::Cyan));

    grid.set_tile(Coord::new(0, 0), None);
    assert!(!grid.has_tile(Coord::new(0, 0)));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_grid_clear_all() {
    let mut grid = Grid::from_rows(&["OO", "OO"], Tile::Yellow);
    assert_eq!(grid.occupied_count(), 4);
    grid.clear_all();
    assert!(grid.is_empty());
    assert_eq!(grid.width(), 2);
}

#[test]
#[should_panic(expected = "write outside grid extent")]
fn test_grid_write_above_top_panics() {
    let mut grid = Grid::new(10, 20);
    grid.set_tile(Coord::new(0, 10), Some(Tile::Red));
}

#[test]
fn test_valid_position_on_empty_grid() {
    let grid = Grid::new(10, 20);
    assert!(is_valid_position(&grid, &SQUARE, Coord::new(-1, 8)));
    assert!(is_valid_position(&grid, &SQUARE, Coord::new(-5, -10)));
    assert!(is_valid_position(&grid, &SQUARE, Coord::new(3, 8)));
}

#[test]
fn test_valid_position_rejects_out_of_bounds() {
    let grid = Grid::new(10, 20);
    assert!(!is_valid_position(&grid, &SQUARE, Coord::new(-6, 0))); // left
    assert!(!is_valid_position(&grid, &SQUARE, Coord::new(4, 0))); // right
    assert!(!is_valid_position(&grid, &SQUARE, Coord::new(0, -11))); // floor
    assert!(!is_valid_position(&grid, &SQUARE, Coord::new(0, 9))); // ceiling
}

#[test]
fn test_valid_position_rejects_occupied() {
    let mut grid = Grid::new(10, 20);
    grid.set_tile(Coord::new(0, 1), Some(Tile::Blue));

    assert!(!is_valid_position(&grid, &SQUARE, Coord::new(0, 0)));
    assert!(!is_valid_position(&grid, &SQUARE, Coord::new(-1, 0)));
    assert!(is_valid_position(&grid, &SQUARE, Coord::new(1, 0)));
}

#[test]
fn test_set_piece_writes_footprint() {
    let mut grid = Grid::new(10, 20);
    let anchor = Coord::new(3, 5);

    set_piece(&mut grid, &SQUARE, anchor, Tile::Yellow);

    assert_eq!(grid.tile(Coord::new(3, 5)), Some(Tile::Yellow));
    assert_eq!(grid.tile(Coord::new(4, 5)), Some(Tile::Yellow));
    assert_eq!(grid.tile(Coord::new(3, 6)), Some(Tile::Yellow));
    assert_eq!(grid.tile(Coord::new(4, 6)), Some(Tile::Yellow));
    assert_eq!(grid.occupied_count(), 4);

    // a placed piece blocks itself
    assert!(!is_valid_position(&grid, &SQUARE, anchor));
}

#[test]
fn test_clear_piece_erases_footprint_only() {
    let mut grid = Grid::new(10, 20);
    grid.set_tile(Coord::new(4, 4), Some(Tile::Red));

    set_piece(&mut grid, &SQUARE, Coord::new(3, 5), Tile::Yellow);
    clear_piece(&mut grid, &SQUARE, Coord::new(3, 5));

    assert_eq!(grid.occupied_count(), 1);
    assert_eq!(grid.tile(Coord::new(4, 4)), Some(Tile::Red));
}
