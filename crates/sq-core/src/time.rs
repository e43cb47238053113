//! Simulation time model.
//!
//! # Design
//!
//! The simulation runs at a fixed cadence: one logical tick per rendered
//! frame, each advancing time by a constant `dt` seconds.  Time is canonical
//! as an integer tick counter; `now()` derives seconds from it so long runs
//! don't accumulate floating-point drift from repeated `+= dt`.
//!
//! Nothing in the framework blocks or suspends.  All waiting is explicit
//! [`Countdown`] state carried between ticks and decremented by `dt` — the
//! chase-lose window, the wait-between-bursts phase, the burst window, and
//! the per-shot interval are all instances of the same primitive.

use std::fmt;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-cadence simulation clock.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Completed ticks since simulation start.
    pub tick: u64,
    /// Seconds per tick.
    pub dt: f32,
}

impl SimClock {
    /// Create a clock at tick 0 with the given tick duration in seconds.
    pub fn new(dt: f32) -> Self {
        Self { tick: 0, dt }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Elapsed simulated seconds since tick 0.
    ///
    /// Computed from the tick counter in f64 so `now()` stays exact-ish even
    /// after millions of ticks.
    #[inline]
    pub fn now(&self) -> f32 {
        (self.tick as f64 * self.dt as f64) as f32
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{} ({:.2}s)", self.tick, self.now())
    }
}

// ── Countdown ─────────────────────────────────────────────────────────────────

/// A count-down-to-zero timer decremented by elapsed tick time.
///
/// The raw remaining value is kept (it may go slightly negative on the
/// crossing tick) and "expired" means `remaining <= 0`, so a timer that
/// lands exactly on zero counts as expired.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// A timer that is already expired.
    pub fn idle() -> Self {
        Self { remaining: 0.0 }
    }

    /// Start (or restart) the timer at `secs`.
    #[inline]
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs;
    }

    /// Force the timer to the expired state.
    #[inline]
    pub fn stop(&mut self) {
        self.remaining = 0.0;
    }

    /// `true` while the timer has time left.
    #[inline]
    pub fn running(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds left (zero or slightly negative once expired).
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Decrement by `dt` if running.
    ///
    /// Returns `true` exactly on the tick the timer crosses zero, so callers
    /// can run their on-expiry transition once.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining > 0.0 {
            self.remaining -= dt;
            self.remaining <= 0.0
        } else {
            false
        }
    }
}
