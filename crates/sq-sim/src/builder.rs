//! Fluent builder for constructing a [`Squad`].

use sq_core::{AgentId, SimClock};
use sq_crowd::{CrowdConfig, NeighborDirectory};
use sq_brain::{AgentBrain, AnimationSink, BrainProfile, FireEmitter, NullSinks};
use sq_nav::{LineOfSight, NavProvider};

use crate::sim::AgentSlot;
use crate::{SimError, SimResult, Squad};

/// Fluent builder for [`Squad<N, L>`].
///
/// Agents are spawned with a [`BrainProfile`] and their own nav provider;
/// ids are assigned sequentially in spawn order and each agent's start point
/// (where it returns after losing a chase) is wherever its nav provider
/// stands at build time.
///
/// # Example
///
/// ```rust,ignore
/// let surface = Arc::new(PlanarSurface::open());
/// let mut squad = SquadBuilder::new(Arc::clone(&surface))
///     .dt(0.1)
///     .spawn(BrainProfile::hearing(), PlanarNav::new(surface, pos, 4.5))
///     .build()?;
/// squad.tick(Some(target), &mut NoopObserver);
/// ```
pub struct SquadBuilder<N, L> {
    dt:        f32,
    crowd:     CrowdConfig,
    los:       L,
    emitter:   Box<dyn FireEmitter>,
    animation: Box<dyn AnimationSink>,
    agents:    Vec<(BrainProfile, N)>,
}

impl<N: NavProvider, L: LineOfSight> SquadBuilder<N, L> {
    pub fn new(los: L) -> Self {
        Self {
            dt:        0.1,
            crowd:     CrowdConfig::default(),
            los,
            emitter:   Box::new(NullSinks),
            animation: Box::new(NullSinks),
            agents:    Vec::new(),
        }
    }

    /// Tick duration in seconds (default 0.1).
    pub fn dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn crowd(mut self, config: CrowdConfig) -> Self {
        self.crowd = config;
        self
    }

    /// Where emitted shots go (default: discarded).
    pub fn emitter(mut self, emitter: Box<dyn FireEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    /// Where animation state goes (default: discarded).
    pub fn animation(mut self, animation: Box<dyn AnimationSink>) -> Self {
        self.animation = animation;
        self
    }

    /// Add an agent.  Its id is the spawn index.
    pub fn spawn(mut self, profile: BrainProfile, nav: N) -> Self {
        self.agents.push((profile, nav));
        self
    }

    /// Validate everything and assemble the squad.
    pub fn build(self) -> SimResult<Squad<N, L>> {
        if !(self.dt > 0.0) {
            return Err(SimError::Config(format!("dt must be positive, got {}", self.dt)));
        }
        if self.agents.is_empty() {
            return Err(SimError::EmptySquad);
        }

        let mut directory = NeighborDirectory::new(self.crowd);
        let mut slots = Vec::with_capacity(self.agents.len());
        for (i, (profile, nav)) in self.agents.into_iter().enumerate() {
            profile.validate()?;
            let id = AgentId(i as u32);
            directory.register(id);
            slots.push(AgentSlot {
                id,
                brain: AgentBrain::new(id, nav.position(), profile),
                nav,
            });
        }

        Ok(Squad::assemble(
            SimClock::new(self.dt),
            directory,
            self.los,
            self.emitter,
            self.animation,
            slots,
        ))
    }
}
