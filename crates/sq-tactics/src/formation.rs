//! Angular surround-slot assignment.

use sq_core::{SquadError, SquadResult, Vec3};
use sq_crowd::Neighbor;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Surround-formation settings.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormationConfig {
    /// Master switch.  Disabled, the chase goal is the raw target position.
    pub enabled: bool,
    /// Blend between the raw target (0) and the assigned slot (1).
    pub formation_strength: f32,
    /// Ring radius around the target the slots sit on.
    pub surround_radius: f32,
    /// Slot-count floor.  Few chasers still spread across at least this many
    /// slots instead of forming a tight pair head-on.
    pub min_slots: usize,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            enabled:            true,
            formation_strength: 0.5,
            surround_radius:    5.0,
            min_slots:          4,
        }
    }
}

impl FormationConfig {
    pub fn validate(&self) -> SquadResult<()> {
        if !(0.0..=1.0).contains(&self.formation_strength) {
            return Err(SquadError::Config(format!(
                "formation_strength must be in [0, 1], got {}",
                self.formation_strength
            )));
        }
        if self.surround_radius <= 0.0 {
            return Err(SquadError::Config(format!(
                "surround_radius must be positive, got {}",
                self.surround_radius
            )));
        }
        if self.min_slots == 0 {
            return Err(SquadError::Config("min_slots must be at least 1".into()));
        }
        Ok(())
    }
}

// ── Slot solver ───────────────────────────────────────────────────────────────

/// The chase goal for an agent at `self_pos` closing on `target`, adjusted so
/// squadmates fan out around the target instead of stacking up.
///
/// Each agent independently ranks itself among its neighbors by distance to
/// the target (strictly closer neighbors outrank it) and takes the slot at
/// `rank × 360°/slots` on a ring of `surround_radius` around the target,
/// where `slots = max(engaged + 1, min_slots)`.  With `combat_only` set,
/// only neighbors flagged in combat count for both rank and slot total —
/// idle bystanders then neither claim slots nor widen the ring.
///
/// Ranking is recomputed from live positions every call, so slots can swap
/// while chasers overtake each other; assignments settle as distances do.
/// The result keeps the caller's height and is blended toward the raw target
/// by `formation_strength`.
pub fn surround_position(
    self_pos: Vec3,
    target: Vec3,
    neighbors: &[Neighbor],
    combat_only: bool,
    config: &FormationConfig,
) -> Vec3 {
    if !config.enabled {
        return target;
    }

    let my_distance = self_pos.distance(target);
    let mut engaged = 0usize;
    let mut rank = 0usize;
    for n in neighbors {
        if combat_only && !n.in_combat {
            continue;
        }
        engaged += 1;
        if n.position.distance(target) < my_distance {
            rank += 1;
        }
    }

    let slots = (engaged + 1).max(config.min_slots);
    let angle = 360.0 / slots as f32 * rank as f32;
    let offset = Vec3::FORWARD.rotated_y(angle) * config.surround_radius;
    let slot = (target + offset).with_y(self_pos.y);
    target.lerp(slot, config.formation_strength)
}
