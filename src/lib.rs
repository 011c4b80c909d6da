//! Tetris board (workspace facade crate).
//!
//! Re-exports the workspace crates under one name:
//! `tetris_board::{core, term, types}`.

pub use tetris_board_core as core;
pub use tetris_board_term as term;
pub use tetris_board_types as types;
