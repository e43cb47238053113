//! Goal blending and validated destination emission.

use sq_core::Vec3;
use sq_crowd::Neighbor;
use sq_nav::NavProvider;

use crate::flocking::{flocking_force, SteeringConfig};

/// Blend a goal direction with a steering vector.
///
/// `influence` in `[0, 1]` is the flocking share: 0 follows the goal
/// exactly, 1 follows the flock exactly.  Both inputs are normalized before
/// blending, so a zero steering vector (empty neighbor set) degrades to the
/// pure goal direction scaled by `1 - influence` — same direction, shorter
/// step.
pub fn blend_with_goal(goal_direction: Vec3, steering: Vec3, influence: f32) -> Vec3 {
    goal_direction.normalized_or_zero() * (1.0 - influence)
        + steering.normalized_or_zero() * influence
}

/// Candidate destination one step along `direction`, height pinned to the
/// agent's current height.
pub fn propose_step(position: Vec3, direction: Vec3, step_distance: f32) -> Vec3 {
    (position + direction * step_distance).with_y(position.y)
}

/// The full per-tick steering pipeline: compose the flocking force from the
/// neighbor snapshot, blend it with the goal direction, and emit the
/// candidate step as a destination — but only
/// if the candidate projects onto the traversable surface.  On validation
/// failure nothing is issued and the agent keeps its previous destination.
pub fn steer_toward<N: NavProvider>(
    nav:        &mut N,
    goal_direction: Vec3,
    neighbors:  &[Neighbor],
    influence:  f32,
    config:     &SteeringConfig,
) {
    if !nav.on_surface() {
        return;
    }
    let position = nav.position();
    let steering = flocking_force(position, neighbors, config);
    let direction = blend_with_goal(goal_direction, steering, influence);
    let candidate = propose_step(position, direction, config.step_distance);

    if let Some(valid) = nav.nearest_valid_point(candidate, config.surface_tolerance) {
        nav.set_destination(valid);
    }
}
