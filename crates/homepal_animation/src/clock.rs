//! Frame clock shared by every channel of a scheduler.
//!
//! Time is virtual: it advances only when the host steps it, either by an
//! explicit delta (deterministic, used by tests and headless runs) or from
//! elapsed wall time (used by a live display loop).

use std::time::Instant;

/// A monotonic millisecond clock stepped by its owner.
#[derive(Debug, Default)]
pub struct FrameClock {
    /// Current virtual time in milliseconds.
    position_ms: f64,
    /// Real-time instant of the last wall-clock update.
    last_update: Option<Instant>,
}

impl FrameClock {
    /// Create a clock positioned at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.position_ms
    }

    /// Advance by `dt_ms`. Returns the applied delta.
    ///
    /// Negative and non-finite deltas are ignored.
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return 0.0;
        }
        self.position_ms += dt_ms;
        dt_ms
    }

    /// Advance from elapsed wall time since the previous call.
    ///
    /// The first call only records the instant.
    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    fn update_at(&mut self, now: Instant) -> f64 {
        let applied = match self.last_update {
            Some(last) => self.advance(now.saturating_duration_since(last).as_secs_f64() * 1000.0),
            None => 0.0,
        };
        self.last_update = Some(now);
        applied
    }
}
