//! Board module - the authoritative board engine
//!
//! Ties together the grid, the piece catalog, the randomizer and the game
//! session. One piece's lifetime runs:
//!
//! ```text
//! spawn -> active (moves re-validated) -> lock -> line clear + scoring -> spawn
//!   \-> game over (spawn blocked): session and grid reset
//! ```
//!
//! Every operation runs to completion before returning; nothing here
//! blocks, suspends or allocates after construction (snapshots aside).

use crate::bounds::is_valid_position;
use crate::catalog::Catalog;
use crate::config::BoardConfig;
use crate::grid::Grid;
use crate::line_clear::clear_lines;
use crate::piece::ActivePiece;
use crate::placement::{clear_piece, set_piece};
use crate::rng::{PieceRandomizer, SimpleRng};
use crate::session::GameSession;
use crate::snapshot::{BoardSnapshot, SessionSnapshot};
use crate::types::{Bounds, Coord, TetrominoKind};

/// Result of a spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// The piece is on the board at the spawn anchor
    Spawned(TetrominoKind),
    /// The spawn cells were blocked; session and grid have been reset
    GameOver,
}

impl SpawnOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, SpawnOutcome::GameOver)
    }
}

/// Result of locking a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub lines_cleared: u32,
    pub score_delta: u32,
}

/// The board engine
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    grid: Grid,
    catalog: Catalog,
    session: GameSession,
    rng: R,
    spawn_anchor: Coord,
    /// Monotonic id for spawned pieces (increments only on successful spawn)
    piece_id: u32,
    /// Monotonic game counter (increments on every game over)
    episode_id: u32,
}

impl Board<SimpleRng> {
    /// Create a board seeded from the config (seed 1 when unset)
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config, SimpleRng::new(config.seed.unwrap_or(1)))
    }
}

impl<R: PieceRandomizer> Board<R> {
    /// Create an empty board with the standard catalog
    pub fn new(config: &BoardConfig, rng: R) -> Self {
        Self::from_parts(
            Grid::new(config.width, config.height),
            Catalog::standard(),
            config.spawn_anchor,
            rng,
        )
    }

    /// Assemble a board from an existing grid and catalog
    pub fn from_parts(grid: Grid, catalog: Catalog, spawn_anchor: Coord, rng: R) -> Self {
        Self {
            grid,
            catalog,
            session: GameSession::new(),
            rng,
            spawn_anchor,
            piece_id: 0,
            episode_id: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn spawn_anchor(&self) -> Coord {
        self.spawn_anchor
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Check if a footprint fits at `anchor` (in bounds, no overlap)
    pub fn is_valid_position(&self, footprint: &[Coord], anchor: Coord) -> bool {
        is_valid_position(&self.grid, footprint, anchor)
    }

    /// Draw the piece onto the grid
    ///
    /// # Panics
    ///
    /// Panics if any cell of the piece lies outside the grid.
    pub fn set_piece<P: ActivePiece + ?Sized>(&mut self, piece: &P) {
        set_piece(&mut self.grid, piece.footprint(), piece.anchor(), piece.tile());
    }

    /// Erase the piece from the grid
    pub fn clear_piece<P: ActivePiece + ?Sized>(&mut self, piece: &P) {
        clear_piece(&mut self.grid, piece.footprint(), piece.anchor());
    }

    /// Spawn the next piece
    ///
    /// Picks a catalog entry uniformly, initializes `piece` with it at the
    /// spawn anchor and draws it if the spawn cells are free. A blocked spawn
    /// is the game-over condition: the session and grid are reset and `piece`
    /// is left undrawn.
    pub fn spawn_piece<P: ActivePiece + ?Sized>(&mut self, piece: &mut P) -> SpawnOutcome {
        let index = self.rng.pick(self.catalog.len());
        let data = self.catalog.entries()[index];

        piece.initialize(&data, self.spawn_anchor);

        if self.is_valid_position(piece.footprint(), piece.anchor()) {
            self.set_piece(&*piece);
            self.piece_id = self.piece_id.wrapping_add(1);
            SpawnOutcome::Spawned(data.kind)
        } else {
            self.game_over();
            SpawnOutcome::GameOver
        }
    }

    /// Commit the piece permanently and resolve line clears
    ///
    /// Locked cells stay until a line clear removes them.
    pub fn lock_piece<P: ActivePiece + ?Sized>(&mut self, piece: &P) -> LockOutcome {
        self.set_piece(piece);

        let lines_cleared = clear_lines(&mut self.grid);
        let score_delta = self.session.record_clear(lines_cleared);

        LockOutcome {
            lines_cleared,
            score_delta,
        }
    }

    /// Clear full rows and update score and level
    ///
    /// Returns the number of rows cleared; zero leaves the session untouched.
    pub fn clear_lines(&mut self) -> u32 {
        let lines = clear_lines(&mut self.grid);
        self.session.record_clear(lines);
        lines
    }

    /// Reset session and grid in one step
    pub fn game_over(&mut self) {
        self.session.reset();
        self.grid.clear_all();
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    pub fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&self.session)
    }

    /// Copy the board into an existing snapshot, reusing its buffer
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.bounds = self.grid.bounds();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.session = self.session_snapshot();
        out.piece_id = self.piece_id;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
