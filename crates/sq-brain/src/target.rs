//! Per-tick snapshot of the pursued target.

use sq_core::Vec3;

/// What the squad can know about the target this tick.
///
/// Produced outside the brain (the simulation tracks the external target and
/// derives its speed from consecutive positions); the brain only reads it.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetState {
    pub position: Vec3,
    /// Ground speed in units/second, derived from successive positions.
    pub speed: f32,
    /// `false` once the target despawns; perception and fire control treat a
    /// dead target as absent.
    pub alive: bool,
}

impl TargetState {
    /// Speed above which the target counts as moving at all.
    pub const MOVE_THRESHOLD: f32 = 0.1;
    /// Speed above which the target counts as running rather than walking.
    pub const RUN_THRESHOLD: f32 = 10.0;

    pub fn at(position: Vec3, speed: f32) -> Self {
        Self { position, speed, alive: true }
    }

    /// The absent target: never detected, never fired on.
    pub fn gone() -> Self {
        Self { position: Vec3::ZERO, speed: 0.0, alive: false }
    }

    #[inline]
    pub fn moving(&self) -> bool {
        self.speed > Self::MOVE_THRESHOLD
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.speed > Self::RUN_THRESHOLD
    }
}

impl Default for TargetState {
    fn default() -> Self {
        Self::gone()
    }
}
