//! The navigation-provider and line-of-sight contracts.

use std::sync::Arc;

use sq_core::Vec3;

/// Movement execution as seen by the AI core.
///
/// The core never mutates an agent's pose directly; it only *requests*
/// destinations and reads back pose and velocity.  Every method is
/// best-effort: a rejected destination is silently ignored and the agent
/// keeps moving toward its previous one, which is exactly the degradation
/// the state machine expects.
pub trait NavProvider {
    /// Current world position of the agent.
    fn position(&self) -> Vec3;

    /// Current facing direction (unit-ish, ground plane).
    fn forward(&self) -> Vec3;

    /// Current velocity as reported by the movement layer.
    fn velocity(&self) -> Vec3;

    /// `true` when the agent currently stands on a traversable surface.
    /// While `false`, destination requests are pointless and the caller
    /// skips its movement sub-step for the tick.
    fn on_surface(&self) -> bool;

    /// Request movement toward `point`.  May be rejected internally.
    fn set_destination(&mut self, point: Vec3);

    /// Straight-line distance left to the current destination.
    fn remaining_distance(&self) -> f32;

    /// Project `point` onto the traversable surface, if a valid point exists
    /// within `tolerance`.  `None` means the destination update must be
    /// skipped this tick.
    fn nearest_valid_point(&self, point: Vec3, tolerance: f32) -> Option<Vec3>;

    /// Advance physical motion by one tick.  Engine-backed providers move on
    /// their own and keep the default no-op; the in-process [`PlanarNav`]
    /// implementation integrates here.
    ///
    /// [`PlanarNav`]: crate::PlanarNav
    fn advance(&mut self, _dt: f32) {}
}

/// Obstruction predicate for the vision sense.
pub trait LineOfSight {
    /// `true` when the segment from `from` to `to` is unobstructed.
    fn clear(&self, from: Vec3, to: Vec3) -> bool;
}

impl<T: LineOfSight + ?Sized> LineOfSight for Arc<T> {
    fn clear(&self, from: Vec3, to: Vec3) -> bool {
        (**self).clear(from, to)
    }
}

impl<T: LineOfSight + ?Sized> LineOfSight for &T {
    fn clear(&self, from: Vec3, to: Vec3) -> bool {
        (**self).clear(from, to)
    }
}
