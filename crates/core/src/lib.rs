//! Core board engine - pure, deterministic, and testable
//!
//! This crate owns the board state of a falling-block puzzle game: the
//! occupancy grid, placement legality, spawning, line clearing and scoring.
//! It has no dependencies on rendering or input, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Step-driven**: Each operation completes before returning, no timers
//!
//! # Module Structure
//!
//! - [`grid`]: Centered occupancy grid with flat storage
//! - [`bounds`]: The legality check for any footprint at any anchor
//! - [`placement`]: Writes and erases piece footprints
//! - [`catalog`]: Tetromino shapes and tiles, initialized once
//! - [`rng`]: Injected uniform randomizer (seeded LCG, `rand` adapter)
//! - [`piece`]: The active-piece collaborator trait and the stock piece
//! - [`line_clear`]: Full-row detection and downward compaction
//! - [`scoring`]: Classic single/double/triple/tetris scoring and levels
//! - [`session`]: Score, lines and level of the current game
//! - [`board`]: The engine tying it all together
//! - [`snapshot`]: Read-only copies for view collaborators
//! - [`config`]: TOML board configuration
//!
//! # Example
//!
//! ```
//! use tetris_board_core::{Board, BoardConfig, Piece, SimpleRng, SpawnOutcome};
//!
//! let mut board = Board::new(&BoardConfig::default(), SimpleRng::new(12345));
//! let mut piece = Piece::default();
//!
//! // Spawn onto an empty board always succeeds
//! assert!(matches!(board.spawn_piece(&mut piece), SpawnOutcome::Spawned(_)));
//!
//! // Move it around, drop it and lock it
//! piece.try_move(&mut board, -1, 0);
//! piece.try_rotate(&mut board, true);
//! piece.hard_drop(&mut board);
//! let outcome = board.lock_piece(&piece);
//!
//! assert_eq!(outcome.lines_cleared, 0);
//! assert_eq!(board.session().score(), 0);
//! ```

pub mod board;
pub mod bounds;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod line_clear;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tetris_board_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockOutcome, SpawnOutcome};
pub use bounds::is_valid_position;
pub use catalog::{Catalog, TetrominoData};
pub use config::BoardConfig;
pub use error::ConfigError;
pub use grid::Grid;
pub use piece::{ActivePiece, Piece};
pub use rng::{PieceRandomizer, RandRandomizer, ScriptedRandomizer, SimpleRng};
pub use scoring::{calculate_level, score_delta};
pub use session::GameSession;
pub use snapshot::{BoardSnapshot, SessionSnapshot};
