//! Game session - score, cleared lines and level for the current game

use crate::scoring::{calculate_level, score_delta};

/// Mutable progression state owned by the board
///
/// Invariant: `level == lines / 10` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSession {
    score: u32,
    lines: u32,
    level: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Apply one clearing event and return the points it earned
    ///
    /// Points use the level before the event; the level is recomputed after.
    /// A zero-line event changes nothing.
    pub fn record_clear(&mut self, lines: u32) -> u32 {
        if lines == 0 {
            return 0;
        }

        let delta = score_delta(lines, self.level);
        self.lines = self.lines.saturating_add(lines);
        self.level = calculate_level(self.lines);
        self.score = self.score.saturating_add(delta);
        delta
    }

    /// Zero every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
