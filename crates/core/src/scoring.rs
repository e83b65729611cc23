//! Scoring module - line-count based scoring
//!
//! Only the number of rows removed by one lock matters. There are no levels,
//! combos or drop bonuses.

use crate::types::LINE_SCORES;

/// Points for removing `lines` rows with a single lock.
///
/// Uses the classic table for 0-4 rows. Taller clears (only possible with
/// custom masks) keep growing by one Tetris worth per extra row, so the
/// result is strictly increasing in `lines`.
pub fn line_clear_score(lines: usize) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&points) => points,
        None => {
            let extra = (lines - (LINE_SCORES.len() - 2)) as u32;
            LINE_SCORES[LINE_SCORES.len() - 1].saturating_mul(extra)
        }
    }
}
