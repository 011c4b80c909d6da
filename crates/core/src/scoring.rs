//! Scoring module - classic line-clear scoring and level progression
//!
//! Points for a clearing event are `multiplier(lines) * (level + 1)`, using the
//! level held *before* the event. Level is `total_lines / 10`.

use crate::types::{FALLBACK_MULTIPLIER, LINES_PER_LEVEL, LINE_MULTIPLIERS};

/// Multiplier for an event clearing `lines` rows
///
/// Counts outside the single/double/triple/tetris table use
/// [`FALLBACK_MULTIPLIER`]. Callers skip scoring for zero-line events.
pub fn line_multiplier(lines: u32) -> u32 {
    match lines {
        1..=4 => LINE_MULTIPLIERS[lines as usize],
        _ => FALLBACK_MULTIPLIER,
    }
}

/// Calculate the score delta for one clearing event
/// lines: rows cleared by this event
/// level: level before the event (0-based)
pub fn score_delta(lines: u32, level: u32) -> u32 {
    line_multiplier(lines).saturating_mul(level.saturating_add(1))
}

/// Level management
/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}
