//! Peer target sharing with a strict freshness window.

use rustc_hash::FxHashMap;

use sq_core::{AgentId, Vec3};
use sq_crowd::NeighborDirectory;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Squad-wide sharing settings.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharingConfig {
    /// Master switch.  Disabled squads neither send nor act on intel.
    pub enabled: bool,
    /// Broadcast reach, in world units, measured from the sender.
    pub target_sharing_radius: f32,
    /// Seconds a received record stays actionable.  Records at or past this
    /// age are treated exactly as if they were never received.
    pub sharing_window: f32,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            enabled:               true,
            target_sharing_radius: 15.0,
            sharing_window:        5.0,
        }
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

/// One agent's most recent received sighting.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedTarget {
    /// Where the target was when the sighting happened.
    pub position: Vec3,
    /// Simulation time the record was *received* (not when it was observed).
    pub heard_at: f32,
}

// ── ShareBoard ────────────────────────────────────────────────────────────────

/// Per-squad mailbox of shared sightings, one record per agent.
///
/// A broadcast overwrites each recipient's record in place; the newest intel
/// always wins and nothing accumulates.  Recipients read the board on their
/// own update via [`fresh`](ShareBoard::fresh), so delivery costs one hash
/// write per recipient and stale records expire without any sweeping.
#[derive(Debug, Default)]
pub struct ShareBoard {
    records: FxHashMap<AgentId, SharedTarget>,
}

impl ShareBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a sighting at `target` to the sender's neighborhood within the
    /// sharing radius of `sender_pos`, the sender itself included.
    ///
    /// Including the sender makes re-detection idempotent: its own record is
    /// refreshed along with everyone else's, so a sender that later loses the
    /// target falls back on the same intel it handed out.
    ///
    /// Returns the number of records written.  Recipients come from the
    /// directory's neighbor query, so delivery inherits its cap: in a dense
    /// squad only the nearest `max_neighbors_considered` peers hear about
    /// the sighting.
    pub fn broadcast(
        &mut self,
        directory: &NeighborDirectory,
        sender: AgentId,
        sender_pos: Vec3,
        target: Vec3,
        now: f32,
        config: &SharingConfig,
    ) -> usize {
        if !config.enabled {
            return 0;
        }
        self.receive(sender, target, now);
        let recipients = directory.query(sender_pos, config.target_sharing_radius, sender);
        for neighbor in &recipients {
            self.receive(neighbor.id, target, now);
        }
        recipients.len() + 1
    }

    /// Write one record directly (unit tests, scripted scenarios).
    pub fn receive(&mut self, id: AgentId, target: Vec3, now: f32) {
        if let Some(existing) = self.records.get(&id) {
            debug_assert!(now >= existing.heard_at, "share records must arrive in time order");
        }
        self.records.insert(id, SharedTarget { position: target, heard_at: now });
    }

    /// The actionable shared position for `id`, if its record is strictly
    /// younger than the window.  A record aged exactly `sharing_window` is
    /// already stale.
    pub fn fresh(&self, id: AgentId, now: f32, config: &SharingConfig) -> Option<Vec3> {
        if !config.enabled {
            return None;
        }
        self.records
            .get(&id)
            .filter(|r| now - r.heard_at < config.sharing_window)
            .map(|r| r.position)
    }

    /// Raw record access (observability, tests).
    pub fn record(&self, id: AgentId) -> Option<&SharedTarget> {
        self.records.get(&id)
    }

    /// Drop an agent's record on despawn.
    pub fn remove(&mut self, id: AgentId) {
        self.records.remove(&id);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
