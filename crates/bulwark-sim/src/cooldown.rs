//! Countdown timers for charge, ray hold, fire interval, wind-up, and spawn
//! cooldown. Each is decremented by the fixed tick delta; none can pause.

/// A single countdown. Elapsed once `remaining <= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f64,
}

impl Countdown {
    /// A countdown that is already elapsed.
    pub const ELAPSED: Countdown = Countdown { remaining: 0.0 };

    pub fn start(secs: f64) -> Self {
        Self { remaining: secs }
    }

    /// Restart from `secs`.
    pub fn reset(&mut self, secs: f64) {
        self.remaining = secs;
    }

    /// Subtract `dt` and report whether the countdown has elapsed.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.remaining -= dt;
        self.is_elapsed()
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }
}
