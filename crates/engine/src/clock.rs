//! Fixed-timestep frame pacing.

use std::time::{Duration, Instant};

/// Decides when the next frame is due and how long input polling may block.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next frame is due (zero when overdue)
    pub fn timeout(&self, now: Instant) -> Duration {
        self.interval
            .checked_sub(now.saturating_duration_since(self.last))
            .unwrap_or(Duration::ZERO)
    }

    /// Returns true (and starts the next interval) when a frame is due.
    ///
    /// At most one frame is reported per call; a stalled loop does not replay
    /// missed frames.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            return true;
        }
        false
    }
}
