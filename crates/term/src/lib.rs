//! Terminal view of the board engine.
//!
//! A small text renderer for the demo binary. It reads `BoardSnapshot`
//! copies only and never touches the engine itself.
//!
//! - [`fb`]: character framebuffer
//! - [`board_view`]: pure snapshot-to-framebuffer layout
//! - [`renderer`]: crossterm encoding and stdout flushing

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tetris_board_core as core;
pub use tetris_board_types as types;

pub use board_view::BoardView;
pub use fb::{FrameBuffer, FrameCell};
pub use renderer::{encode_full_into, tile_color, TerminalRenderer};
