//! Gravity clock - fires one down-move per elapsed gravity interval.
//!
//! The caller feeds the time elapsed since the previous frame. Once the
//! accumulated time is strictly greater than the interval the clock fires
//! and starts counting from zero again, so at most one down-move happens per
//! frame no matter how long the frame took.

/// Accumulates frame time and reports when gravity is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl GravityClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0,
        }
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Add `elapsed_ms`; returns true when a down-move is due.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms > self.interval_ms {
            self.accumulated_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}
