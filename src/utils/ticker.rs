use std::time::{Duration, Instant};

/// Fixed-interval tick source for driving a simulation.
///
/// Owns no thread: the driver polls it once per frame (or loop iteration)
/// and applies one generation per due tick.
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
}

impl Ticker {
    /// Upper bound on ticks reported at once; a stalled driver skips the rest.
    pub const MAX_CATCH_UP: u32 = 4;

    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Forget pending ticks; the next one is due a full interval after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Number of ticks elapsed since the last call, at most [`Ticker::MAX_CATCH_UP`].
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if self.interval.is_zero() {
            self.last_tick = now;
            return 1;
        }
        let due = elapsed.as_nanos() / self.interval.as_nanos();
        if due == 0 {
            return 0;
        }
        if due > Self::MAX_CATCH_UP as u128 {
            self.last_tick = now;
            return Self::MAX_CATCH_UP;
        }
        // keep the phase so that ticks do not drift
        self.last_tick += self.interval * due as u32;
        due as u32
    }

    pub fn time_until_next(&self, now: Instant) -> Duration {
        (self.last_tick + self.interval).saturating_duration_since(now)
    }
}
