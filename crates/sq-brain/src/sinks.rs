//! Outbound side-effect interfaces.
//!
//! The brain decides *that* a shot happens or *that* the agent reads as
//! moving; what a shot or an animation actually is belongs to the embedding
//! application.  Both interfaces are fire-and-forget: nothing they do feeds
//! back into the decision logic.

use sq_core::Vec3;

/// Spawns a projectile (or whatever a "shot" means to the embedder).
pub trait FireEmitter {
    /// A shot leaves `origin` heading along `direction` (unit, ground plane).
    fn fire(&mut self, origin: Vec3, direction: Vec3);
}

/// Receives the agent's animation-relevant state.
pub trait AnimationSink {
    /// Locomotion flag: `false` while the agent stands still to shoot.
    fn set_moving(&mut self, moving: bool);

    /// One-shot muzzle-flash / recoil trigger.
    fn trigger_fire(&mut self);
}

/// Discards everything.  The default for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSinks;

impl FireEmitter for NullSinks {
    fn fire(&mut self, _origin: Vec3, _direction: Vec3) {}
}

impl AnimationSink for NullSinks {
    fn set_moving(&mut self, _moving: bool) {}
    fn trigger_fire(&mut self) {}
}
