//! Fixed-interval tick timers
//!
//! The host reports elapsed wall time; a [`TickTimer`] turns it into discrete
//! ticks. The interval is passed on every poll because the animation rate
//! depends on the pet's state.

use std::time::Duration;

/// Ticks a timer will replay after a long stall before dropping the backlog
pub const MAX_CATCH_UP_TICKS: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    accumulated: Duration,
    fired: u32,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed wall time
    pub fn advance(&mut self, elapsed: Duration) {
        self.accumulated += elapsed;
        self.fired = 0;
    }

    /// Consume one tick if `interval` has elapsed.
    ///
    /// After [`MAX_CATCH_UP_TICKS`] ticks in one frame the rest of the backlog
    /// is discarded.
    pub fn take(&mut self, interval: Duration) -> bool {
        if interval.is_zero() || self.accumulated < interval {
            return false;
        }
        if self.fired >= MAX_CATCH_UP_TICKS {
            self.accumulated = Duration::ZERO;
            return false;
        }
        self.accumulated -= interval;
        self.fired += 1;
        true
    }

    /// Time left until the next tick at `interval`
    pub fn remaining(&self, interval: Duration) -> Duration {
        interval.saturating_sub(self.accumulated)
    }
}
