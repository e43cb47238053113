//! Sensory detection predicates.

use sq_core::Vec3;
use sq_nav::LineOfSight;

use crate::target::TargetState;

/// An agent's sensory modality, carried as plain data.
///
/// Hearing agents notice a *moving* target: a running target is loud and
/// heard from further away than a walking one, and a stationary target is
/// inaudible no matter how close.  Vision agents need the target inside
/// their view cone with an unobstructed sight line, movement irrelevant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Perception {
    Hearing { walk_radius: f32, run_radius: f32 },
    Vision { distance: f32, fov_degrees: f32 },
}

impl Perception {
    pub fn hearing() -> Self {
        Self::Hearing { walk_radius: 8.0, run_radius: 20.0 }
    }

    pub fn vision() -> Self {
        Self::Vision { distance: 15.0, fov_degrees: 120.0 }
    }

    /// Can an agent at `position` facing `forward` detect the target?
    ///
    /// Sight lines are cast at eye height (one unit up) so ground-level
    /// blockers with a little height actually occlude.
    pub fn can_detect<L: LineOfSight>(
        &self,
        position: Vec3,
        forward: Vec3,
        target: &TargetState,
        los: &L,
    ) -> bool {
        if !target.alive {
            return false;
        }
        match *self {
            Self::Hearing { walk_radius, run_radius } => {
                if !target.moving() {
                    return false;
                }
                let radius = if target.running() { run_radius } else { walk_radius };
                position.distance(target.position) <= radius
            }
            Self::Vision { distance, fov_degrees } => {
                if position.distance(target.position) > distance {
                    return false;
                }
                let to_target = (target.position - position).ground();
                if forward.ground().angle_between(to_target) > fov_degrees / 2.0 {
                    return false;
                }
                los.clear(position + Vec3::UP, target.position + Vec3::UP)
            }
        }
    }
}
