//! Registry bookkeeping and the neighbor query.

use rustc_hash::FxHashMap;

use sq_core::{AgentId, Vec3};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Squad-wide crowd query settings.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrowdConfig {
    /// Default radius agents use when looking for flocking neighbors.
    pub neighborhood_radius: f32,
    /// Hard cap on the number of neighbors any query returns.  A squad-wide
    /// cap, independent of the query radius.
    pub max_neighbors_considered: usize,
}

impl Default for CrowdConfig {
    fn default() -> Self {
        Self {
            neighborhood_radius:      10.0,
            max_neighbors_considered: 10,
        }
    }
}

// ── Published state ───────────────────────────────────────────────────────────

/// The per-tick state an agent publishes to the directory.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSample {
    pub position:  Vec3,
    pub velocity:  Vec3,
    /// `true` while the agent's state machine is engaged on a target.
    pub in_combat: bool,
}

#[derive(Clone, Debug, Default)]
struct Member {
    sample: AgentSample,
    /// Disabled members are kept registered but never returned by queries.
    enabled: bool,
    /// `false` until the first `publish` — a registered-but-unpublished agent
    /// has no meaningful position and is skipped, never crashed on.
    published: bool,
}

// ── Query result ──────────────────────────────────────────────────────────────

/// One entry of a neighbor query result: a snapshot of another agent's
/// published state plus its distance to the query point.
#[derive(Copy, Clone, Debug)]
pub struct Neighbor {
    pub id:        AgentId,
    pub position:  Vec3,
    pub velocity:  Vec3,
    pub in_combat: bool,
    /// Distance from the query point (the sort key).
    pub distance:  f32,
}

// ── NeighborDirectory ─────────────────────────────────────────────────────────

/// Registry of all live squad agents and their published samples.
///
/// Explicitly constructed and owned by the simulation; created at simulation
/// start and dropped at simulation end.  Membership changes only at agent
/// spawn/despawn; samples change every tick.
#[derive(Debug, Default)]
pub struct NeighborDirectory {
    members: FxHashMap<AgentId, Member>,
    config:  CrowdConfig,
}

impl NeighborDirectory {
    pub fn new(config: CrowdConfig) -> Self {
        Self { members: FxHashMap::default(), config }
    }

    pub fn config(&self) -> &CrowdConfig {
        &self.config
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Register an agent.  Idempotent: re-registering an existing member does
    /// not disturb its published sample.
    pub fn register(&mut self, id: AgentId) {
        self.members
            .entry(id)
            .or_insert_with(|| Member { enabled: true, ..Member::default() });
    }

    /// Remove an agent.  Idempotent: unregistering an absent agent is a no-op.
    pub fn unregister(&mut self, id: AgentId) {
        self.members.remove(&id);
    }

    /// Keep an agent registered but exclude it from all query results
    /// (despawned-but-not-yet-removed, stunned, etc.).
    pub fn set_enabled(&mut self, id: AgentId, enabled: bool) {
        if let Some(m) = self.members.get_mut(&id) {
            m.enabled = enabled;
        }
    }

    /// Number of registered agents (enabled or not).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterator over all registered agent ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.members.keys().copied()
    }

    // ── Sample publication ────────────────────────────────────────────────

    /// Publish an agent's current state.  Implies registration and enables
    /// the member.
    pub fn publish(&mut self, id: AgentId, sample: AgentSample) {
        let member = self.members.entry(id).or_default();
        member.sample = sample;
        member.enabled = true;
        member.published = true;
    }

    /// Update only the combat flag (cheaper than a full republish when a
    /// state machine flips mid-tick).  No-op for unregistered agents.
    pub fn set_in_combat(&mut self, id: AgentId, in_combat: bool) {
        if let Some(m) = self.members.get_mut(&id) {
            m.sample.in_combat = in_combat;
        }
    }

    /// Last published position, if the agent has ever published.
    pub fn position_of(&self, id: AgentId) -> Option<Vec3> {
        self.members
            .get(&id)
            .filter(|m| m.published)
            .map(|m| m.sample.position)
    }

    // ── The query ─────────────────────────────────────────────────────────

    /// All enabled, published agents other than `exclude` within `radius`
    /// (inclusive) of `position`, sorted by ascending distance and truncated
    /// to `max_neighbors_considered`.
    ///
    /// Ties are broken by id so results are deterministic regardless of hash
    /// iteration order.
    pub fn query(&self, position: Vec3, radius: f32, exclude: AgentId) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .members
            .iter()
            .filter_map(|(&id, m)| {
                if id == exclude || !m.enabled || !m.published {
                    return None;
                }
                let distance = position.distance(m.sample.position);
                (distance <= radius).then_some(Neighbor {
                    id,
                    position:  m.sample.position,
                    velocity:  m.sample.velocity,
                    in_combat: m.sample.in_combat,
                    distance,
                })
            })
            .collect();

        neighbors.sort_unstable_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.id.cmp(&b.id))
        });
        neighbors.truncate(self.config.max_neighbors_considered);
        neighbors
    }
}
