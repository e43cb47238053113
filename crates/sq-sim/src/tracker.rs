//! Target tracking — turns a raw position feed into a [`TargetState`].

use sq_core::Vec3;
use sq_brain::TargetState;

/// Derives the target's speed from the positions fed in tick by tick.
///
/// The external target is just a point the embedding application moves;
/// nothing about it announces "walking" or "running".  The tracker measures
/// the distance covered between consecutive feeds, which is what hearing
/// perception keys off.  Feeding `None` marks the target gone.
#[derive(Debug, Default)]
pub struct TargetTracker {
    previous: Option<Vec3>,
    state:    TargetState,
}

impl TargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's target position (`None` = despawned).
    pub fn feed(&mut self, position: Option<Vec3>, dt: f32) {
        match position {
            Some(pos) => {
                // First sighting has no motion history: speed 0.
                let speed = match self.previous {
                    Some(prev) if dt > 0.0 => prev.distance(pos) / dt,
                    _ => 0.0,
                };
                self.previous = Some(pos);
                self.state = TargetState { position: pos, speed, alive: true };
            }
            None => {
                self.previous = None;
                self.state = TargetState::gone();
            }
        }
    }

    /// This tick's snapshot.
    pub fn state(&self) -> TargetState {
        self.state
    }
}
