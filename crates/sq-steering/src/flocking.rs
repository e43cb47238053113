//! The three flocking terms and their weighted composition.

use sq_core::{SquadError, SquadResult, Vec3};
use sq_crowd::Neighbor;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Steering tunables for one agent.
///
/// Weights are design-time tunables bounded to `[0, 5]`.  With the defaults
/// separation dominates, so agents spread before they clump.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringConfig {
    /// Pull toward the neighbor centroid.
    pub cohesion_weight: f32,
    /// Push away from crowding neighbors.
    pub separation_weight: f32,
    /// Match neighbors' headings.
    pub alignment_weight: f32,
    /// Personal-space radius for the separation term.
    pub separation_radius: f32,
    /// Distance of the candidate step emitted each tick.
    pub step_distance: f32,
    /// Tolerance for projecting the candidate onto the traversable surface.
    pub surface_tolerance: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            cohesion_weight:   1.0,
            separation_weight: 2.0,
            alignment_weight:  1.0,
            separation_radius: 3.0,
            step_distance:     2.0,
            surface_tolerance: 2.0,
        }
    }
}

impl SteeringConfig {
    /// Reject out-of-range tunables.  Called by the squad builder.
    pub fn validate(&self) -> SquadResult<()> {
        for (name, w) in [
            ("cohesion_weight", self.cohesion_weight),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
        ] {
            if !(0.0..=5.0).contains(&w) {
                return Err(SquadError::Config(format!(
                    "{name} must be in [0, 5], got {w}"
                )));
            }
        }
        if self.separation_radius <= 0.0 || self.step_distance <= 0.0 {
            return Err(SquadError::Config(
                "separation_radius and step_distance must be positive".into(),
            ));
        }
        Ok(())
    }
}

// ── Steering terms ────────────────────────────────────────────────────────────

/// Cohesion: unit vector from `position` toward the neighbor centroid,
/// projected onto the ground plane.  Zero for an empty neighbor set.
pub fn cohesion(position: Vec3, neighbors: &[Neighbor]) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let mut centroid = Vec3::ZERO;
    for n in neighbors {
        centroid += n.position;
    }
    centroid = centroid / neighbors.len() as f32;
    (centroid - position).ground().normalized_or_zero()
}

/// Separation: inverse-distance-weighted push away from neighbors strictly
/// inside `separation_radius`, averaged over the contributing count.
///
/// Closer neighbors push harder (`1/d` weighting).  Neighbors at distance
/// zero are skipped (coincident spawn artifacts would divide by zero), as
/// are neighbors at or beyond the radius.  Zero if none qualify.
pub fn separation(position: Vec3, neighbors: &[Neighbor], separation_radius: f32) -> Vec3 {
    let mut steer = Vec3::ZERO;
    let mut count = 0u32;

    for n in neighbors {
        let distance = position.distance(n.position);
        if distance > 0.0 && distance < separation_radius {
            let push = (position - n.position).ground().normalized_or_zero();
            steer += push / distance;
            count += 1;
        }
    }

    if count > 0 {
        steer / count as f32
    } else {
        Vec3::ZERO
    }
}

/// Alignment: normalized mean of neighbor velocities, ground-projected.
/// Zero for an empty set or when every neighbor is standing still.
pub fn alignment(neighbors: &[Neighbor]) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let mut mean = Vec3::ZERO;
    for n in neighbors {
        mean += n.velocity;
    }
    mean = mean / neighbors.len() as f32;
    mean.ground().normalized_or_zero()
}

/// The combined steering vector: the weighted, unnormalized sum of the three
/// terms.  Magnitude is meaningless by design — the blend step normalizes.
pub fn flocking_force(position: Vec3, neighbors: &[Neighbor], config: &SteeringConfig) -> Vec3 {
    cohesion(position, neighbors) * config.cohesion_weight
        + separation(position, neighbors, config.separation_radius) * config.separation_weight
        + alignment(neighbors) * config.alignment_weight
}
