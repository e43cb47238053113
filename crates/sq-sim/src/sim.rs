//! The tick loop.

use log::debug;

use sq_core::{AgentId, SimClock, Vec3};
use sq_crowd::{AgentSample, NeighborDirectory};
use sq_brain::{AgentBrain, AnimationSink, BrainCtx, FireEmitter, TargetState};
use sq_nav::{LineOfSight, NavProvider};
use sq_tactics::ShareBoard;

use crate::observer::SquadObserver;
use crate::tracker::TargetTracker;
use crate::{SimError, SimResult};

pub(crate) struct AgentSlot<N> {
    pub id:    AgentId,
    pub brain: AgentBrain,
    pub nav:   N,
}

/// One squad of agents plus everything they coordinate through.
///
/// The squad owns the clock, the neighbor directory, the share board and the
/// target tracker.  Agents are updated strictly sequentially in ascending id
/// order within a tick, and each agent publishes its sample *before* its
/// brain runs — so later agents see earlier agents' same-tick state.  That
/// one-tick skew is deliberate: it keeps the whole update single-threaded
/// and borrow-simple, and the flock converges over subsequent ticks anyway.
pub struct Squad<N: NavProvider, L: LineOfSight> {
    clock:     SimClock,
    directory: NeighborDirectory,
    board:     ShareBoard,
    tracker:   TargetTracker,
    los:       L,
    emitter:   Box<dyn FireEmitter>,
    animation: Box<dyn AnimationSink>,
    agents:    Vec<AgentSlot<N>>,
}

impl<N: NavProvider, L: LineOfSight> Squad<N, L> {
    pub(crate) fn assemble(
        clock: SimClock,
        directory: NeighborDirectory,
        los: L,
        emitter: Box<dyn FireEmitter>,
        animation: Box<dyn AnimationSink>,
        agents: Vec<AgentSlot<N>>,
    ) -> Self {
        Self {
            clock,
            directory,
            board: ShareBoard::new(),
            tracker: TargetTracker::new(),
            los,
            emitter,
            animation,
            agents,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn directory(&self) -> &NeighborDirectory {
        &self.directory
    }

    pub fn board(&self) -> &ShareBoard {
        &self.board
    }

    pub fn target(&self) -> TargetState {
        self.tracker.state()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn brain(&self, id: AgentId) -> Option<&AgentBrain> {
        self.slot(id).map(|s| &s.brain)
    }

    pub fn nav(&self, id: AgentId) -> Option<&N> {
        self.slot(id).map(|s| &s.nav)
    }

    pub fn nav_mut(&mut self, id: AgentId) -> Option<&mut N> {
        let i = self.slot_index(id)?;
        Some(&mut self.agents[i].nav)
    }

    fn slot(&self, id: AgentId) -> Option<&AgentSlot<N>> {
        self.slot_index(id).map(|i| &self.agents[i])
    }

    fn slot_index(&self, id: AgentId) -> Option<usize> {
        self.agents.binary_search_by_key(&id, |s| s.id).ok()
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Remove an agent mid-run.  Its directory entry and share record go
    /// with it, so remaining agents stop seeing it immediately.
    pub fn despawn(&mut self, id: AgentId) -> SimResult<()> {
        let i = self.slot_index(id).ok_or(SimError::UnknownAgent(id))?;
        self.agents.remove(i);
        self.directory.unregister(id);
        self.board.remove(id);
        debug!("{id} despawned at {}", self.clock);
        Ok(())
    }

    // ── The tick ──────────────────────────────────────────────────────────

    /// Advance the simulation one tick.
    ///
    /// `target` is where the external target is right now (`None` once it
    /// despawns); the tracker derives its speed from consecutive positions.
    pub fn tick<O: SquadObserver>(&mut self, target: Option<Vec3>, observer: &mut O) {
        observer.on_tick_start(&self.clock);

        let dt = self.clock.dt;
        let now = self.clock.now();
        self.tracker.feed(target, dt);
        let snapshot = self.tracker.state();

        for slot in self.agents.iter_mut() {
            slot.nav.advance(dt);
            self.directory.publish(
                slot.id,
                AgentSample {
                    position:  slot.nav.position(),
                    velocity:  slot.nav.velocity(),
                    in_combat: slot.brain.in_combat(),
                },
            );

            let mut ctx = BrainCtx {
                directory: &self.directory,
                board:     &mut self.board,
                target:    &snapshot,
                los:       &self.los,
                emitter:   self.emitter.as_mut(),
                animation: self.animation.as_mut(),
                now,
                dt,
            };
            let report = slot.brain.tick(&mut slot.nav, &mut ctx);

            // The brain may have flipped in/out of combat mid-tick; later
            // agents' formation ranking should see the current flag.
            self.directory.set_in_combat(slot.id, slot.brain.in_combat());

            if report.fired {
                observer.on_shot(slot.id, snapshot.position, &self.clock);
            }
            if report.entered_chase {
                observer.on_chase_entered(slot.id, &self.clock);
            }
            if report.lost_target {
                observer.on_target_lost(slot.id, &self.clock);
            }
        }

        self.clock.advance();
        observer.on_tick_end(&self.clock);
    }

    /// Run `ticks` ticks with the target held at a fixed position (or gone).
    pub fn run_ticks<O: SquadObserver>(
        &mut self,
        ticks: u64,
        target: Option<Vec3>,
        observer: &mut O,
    ) {
        for _ in 0..ticks {
            self.tick(target, observer);
        }
    }
}
