//! Integration tests for the full piece lifecycle

use tetris_board::core::{
    ActivePiece, Board, BoardConfig, BoardSnapshot, Piece, ScriptedRandomizer, SimpleRng,
    SpawnOutcome,
};
use tetris_board::types::{Coord, TetrominoKind};

fn scripted(picks: Vec<usize>) -> Board<ScriptedRandomizer> {
    Board::new(&BoardConfig::default(), ScriptedRandomizer::new(picks))
}

#[test]
fn test_moves_keep_piece_drawn_exactly_once() {
    let mut board = scripted(vec![2]);
    let mut piece = Piece::default();
    board.spawn_piece(&mut piece);

    assert!(piece.try_move(&mut board, -1, 0));
    assert!(piece.try_move(&mut board, 0, -1));
    assert!(piece.try_rotate(&mut board, true));
    assert_eq!(board.grid().occupied_count(), 4);

    let anchor = piece.anchor();
    assert_eq!(anchor, Coord::new(-2, 7));
    for &offset in piece.footprint() {
        assert!(board.grid().has_tile(offset + anchor));
    }
}

#[test]
fn test_rejected_move_leaves_piece_in_place() {
    // O at the spawn anchor; walk it into the left wall
    let mut board = scripted(vec![1]);
    let mut piece = Piece::default();
    board.spawn_piece(&mut piece);

    let mut steps = 0;
    while piece.try_move(&mut board, -1, 0) {
        steps += 1;
    }
    assert_eq!(steps, 4);
    assert_eq!(piece.anchor(), Coord::new(-5, 8));
    assert_eq!(board.grid().occupied_count(), 4);

    // the ceiling blocks upward moves too
    assert!(!piece.try_move(&mut board, 0, 1));
    assert_eq!(piece.anchor(), Coord::new(-5, 8));
}

#[test]
fn test_hard_drop_lands_on_floor() {
    let mut board = scripted(vec![0]);
    let mut piece = Piece::default();
    board.spawn_piece(&mut piece);

    // I sits one row above its anchor, so the anchor stops one below the floor
    assert_eq!(piece.hard_drop(&mut board), 19);
    assert_eq!(piece.anchor(), Coord::new(-1, -11));
    assert!(board.grid().has_tile(Coord::new(-2, -10)));
}

#[test]
fn test_rotation_blocked_by_wall_is_rejected() {
    let mut board = scripted(vec![0]);
    let mut piece = Piece::default();
    board.spawn_piece(&mut piece);

    // flat I at the floor cannot stand up through the floor
    piece.hard_drop(&mut board);
    let before = piece;
    assert!(!piece.try_rotate(&mut board, true));
    assert_eq!(piece, before);
}

#[test]
fn test_filling_a_row_with_i_pieces_scores_a_single() {
    // two I pieces cover x -5..=2; an O covers 3..=4 and also starts a second row
    let mut board = scripted(vec![0, 0, 1]);
    let mut piece = Piece::default();

    board.spawn_piece(&mut piece);
    assert!(piece.try_move(&mut board, -3, 0));
    piece.hard_drop(&mut board);
    assert_eq!(board.lock_piece(&piece).lines_cleared, 0);

    board.spawn_piece(&mut piece);
    assert!(piece.try_move(&mut board, 1, 0));
    piece.hard_drop(&mut board);
    assert_eq!(board.lock_piece(&piece).lines_cleared, 0);

    assert_eq!(board.spawn_piece(&mut piece), SpawnOutcome::Spawned(TetrominoKind::O));
    for _ in 0..4 {
        assert!(piece.try_move(&mut board, 1, 0));
    }
    piece.hard_drop(&mut board);
    let outcome = board.lock_piece(&piece);

    assert_eq!(outcome.lines_cleared, 1);
    assert_eq!(outcome.score_delta, 40);
    assert_eq!(board.session().score(), 40);
    // the O's top half dropped into the bottom row
    assert_eq!(board.grid().occupied_count(), 2);
    assert!(board.grid().has_tile(Coord::new(3, -10)));
    assert!(board.grid().has_tile(Coord::new(4, -10)));
}

#[test]
fn test_stacking_in_place_ends_in_game_over() {
    let mut board = Board::new(&BoardConfig::default(), SimpleRng::new(2024));
    let mut piece = Piece::default();

    let mut spawned = 0;
    loop {
        match board.spawn_piece(&mut piece) {
            SpawnOutcome::Spawned(_) => spawned += 1,
            SpawnOutcome::GameOver => break,
        }
        piece.hard_drop(&mut board);
        board.lock_piece(&piece);
        assert!(spawned < 200, "stack never reached the spawn anchor");
    }

    assert!(spawned > 1);
    assert!(board.grid().is_empty());
    assert_eq!(board.session().score(), 0);
    assert_eq!(board.episode_id(), 1);
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut board = scripted(vec![3]);
    let mut piece = Piece::default();
    board.spawn_piece(&mut piece);

    let snap: BoardSnapshot = board.snapshot();
    assert_eq!(snap.occupied_count(), 4);

    board.game_over();
    assert!(board.grid().is_empty());
    assert_eq!(snap.occupied_count(), 4);
    assert_eq!(snap.tile_at(Coord::new(-1, 8)), Some(TetrominoKind::J.tile()));
}
