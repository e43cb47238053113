//! Burst fire control.
//!
//! The cycle has two phases driven by [`Countdown`]s:
//!
//! 1. **Wait** (`wait_between_shots`): the agent keeps moving.  When the
//!    wait expires a burst window opens.
//! 2. **Burst** (`time_to_shoot`): the agent stands still and attempts a
//!    shot every `fire_rate` seconds.  Each attempt is gated on the aim
//!    error being inside `max_aim_degrees`; failing the gate aborts the
//!    whole burst and restarts the wait *without* firing.  A target that
//!    keeps its angle to the shooter above the gate is therefore never shot
//!    at — the attempts keep resetting.  When the burst window runs out the
//!    wait phase restarts.

use sq_core::Countdown;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Fire cycle timing.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireConfig {
    /// Seconds between shot attempts inside a burst.
    pub fire_rate: f32,
    /// Seconds of movement between bursts.
    pub wait_between_shots: f32,
    /// Length of the stand-still burst window, in seconds.
    pub time_to_shoot: f32,
    /// Aim-cone half angle: a shot fires only if the absolute yaw error to
    /// the target is strictly below this, in degrees.
    pub max_aim_degrees: f32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            fire_rate:          0.3,
            wait_between_shots: 0.5,
            time_to_shoot:      1.0,
            max_aim_degrees:    30.0,
        }
    }
}

// ── FireControl ───────────────────────────────────────────────────────────────

/// Stepped state for one agent's fire cycle.
#[derive(Copy, Clone, Debug)]
pub struct FireControl {
    config: FireConfig,
    wait:   Countdown,
    burst:  Countdown,
    shot:   Countdown,
}

impl FireControl {
    /// A halted cycle.  Call [`reset`](Self::reset) on combat entry.
    pub fn new(config: FireConfig) -> Self {
        Self {
            config,
            wait:  Countdown::idle(),
            burst: Countdown::idle(),
            shot:  Countdown::idle(),
        }
    }

    pub fn config(&self) -> &FireConfig {
        &self.config
    }

    /// Begin a fresh cycle at the start of its wait phase.
    pub fn reset(&mut self) {
        self.wait.start(self.config.wait_between_shots);
        self.burst.stop();
        self.shot.stop();
    }

    /// Stop the cycle entirely (combat exit).
    pub fn halt(&mut self) {
        self.wait.stop();
        self.burst.stop();
        self.shot.stop();
    }

    /// `true` while a burst window is open — the agent stands still.
    #[inline]
    pub fn bursting(&self) -> bool {
        self.burst.running()
    }

    /// Advance the cycle by `dt` given the current yaw error to the target
    /// in degrees.  Returns `true` for each shot actually fired.
    pub fn tick(&mut self, dt: f32, aim_error_degrees: f32) -> bool {
        if self.wait.tick(dt) {
            // Wait over: open a burst window, first attempt one interval in.
            self.burst.start(self.config.time_to_shoot);
            self.shot.start(self.config.fire_rate);
            return false;
        }
        if !self.burst.running() {
            return false;
        }

        let mut fired = false;
        if self.shot.tick(dt) {
            if aim_error_degrees.abs() < self.config.max_aim_degrees {
                fired = true;
                self.shot.start(self.config.fire_rate);
            } else {
                // Lost the aim cone: abort the burst, start over from wait.
                self.burst.stop();
                self.shot.stop();
                self.wait.start(self.config.wait_between_shots);
                return false;
            }
        }
        if self.burst.tick(dt) {
            self.wait.start(self.config.wait_between_shots);
            self.shot.stop();
        }
        fired
    }
}

impl Default for FireControl {
    fn default() -> Self {
        Self::new(FireConfig::default())
    }
}
