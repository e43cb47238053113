//! The idle/chase state machine.

use log::debug;

use sq_core::{AgentId, Countdown, SquadError, SquadResult, Vec3};
use sq_crowd::NeighborDirectory;
use sq_nav::{LineOfSight, NavProvider};
use sq_steering::{steer_toward, SteeringConfig};
use sq_tactics::{surround_position, FormationConfig, ShareBoard, SharingConfig};

use crate::fire::{FireConfig, FireControl};
use crate::perception::Perception;
use crate::sinks::{AnimationSink, FireEmitter};
use crate::target::TargetState;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Chase tuning for one agent.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseConfig {
    /// Straight-line distance to the live target beyond which the chase is
    /// abandoned immediately.
    pub distance_to_lose: f32,
    /// Seconds to keep chasing after the last confirmed detection.
    pub keep_chasing_time: f32,
    /// Inner radius around the chase goal inside which the agent stops.
    pub distance_to_stop: f32,
    /// Movement speed handed to the nav provider at spawn.
    pub move_speed: f32,
    /// Flocking influence while chasing stale intel.
    pub flocking_influence: f32,
    /// Flocking influence while the fire cycle is engaged on a live target.
    /// Lower: an agent lining up shots should not be shoved around by the
    /// flock as much.
    pub combat_flocking_influence: f32,
}

impl ChaseConfig {
    pub fn hearing() -> Self {
        Self {
            distance_to_lose:          25.0,
            keep_chasing_time:         8.0,
            distance_to_stop:          2.0,
            move_speed:                4.5,
            flocking_influence:        0.4,
            combat_flocking_influence: 0.2,
        }
    }

    pub fn vision() -> Self {
        Self {
            distance_to_lose:  20.0,
            keep_chasing_time: 5.0,
            ..Self::hearing()
        }
    }

    pub fn validate(&self) -> SquadResult<()> {
        if self.distance_to_lose <= 0.0 || self.distance_to_stop <= 0.0 {
            return Err(SquadError::Config(format!(
                "chase distances must be positive (lose {}, stop {})",
                self.distance_to_lose, self.distance_to_stop
            )));
        }
        if self.keep_chasing_time <= 0.0 {
            return Err(SquadError::Config(format!(
                "keep_chasing_time must be positive, got {}",
                self.keep_chasing_time
            )));
        }
        for (name, v) in [
            ("flocking_influence", self.flocking_influence),
            ("combat_flocking_influence", self.combat_flocking_influence),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(SquadError::Config(format!("{name} must be in [0, 1], got {v}")));
            }
        }
        Ok(())
    }
}

/// Everything that shapes one agent's behavior, bundled for spawning.
#[derive(Copy, Clone, Debug)]
pub struct BrainProfile {
    pub perception: Perception,
    pub chase:      ChaseConfig,
    pub fire:       FireConfig,
    pub steering:   SteeringConfig,
    pub sharing:    SharingConfig,
    pub formation:  FormationConfig,
    /// Rank surround slots against in-combat neighbors only.  Vision squads
    /// set this: bystanders who can't see the target shouldn't claim slots.
    pub combat_only_formation: bool,
}

impl BrainProfile {
    pub fn hearing() -> Self {
        Self {
            perception: Perception::hearing(),
            chase:      ChaseConfig::hearing(),
            fire:       FireConfig::default(),
            steering:   SteeringConfig::default(),
            sharing:    SharingConfig::default(),
            formation:  FormationConfig { surround_radius: 5.0, ..FormationConfig::default() },
            combat_only_formation: false,
        }
    }

    pub fn vision() -> Self {
        Self {
            perception: Perception::vision(),
            chase:      ChaseConfig::vision(),
            formation:  FormationConfig { surround_radius: 6.0, ..FormationConfig::default() },
            combat_only_formation: true,
            ..Self::hearing()
        }
    }

    pub fn validate(&self) -> SquadResult<()> {
        self.chase.validate()?;
        self.steering.validate()?;
        self.formation.validate()
    }
}

// ── Tick context & report ─────────────────────────────────────────────────────

/// The world as one agent sees it for one tick.
pub struct BrainCtx<'a, L: LineOfSight> {
    pub directory: &'a NeighborDirectory,
    pub board:     &'a mut ShareBoard,
    pub target:    &'a TargetState,
    pub los:       &'a L,
    /// Where shots go when a burst lands one.
    pub emitter: &'a mut dyn FireEmitter,
    /// Receives the moving/stationary flag and fire triggers.
    pub animation: &'a mut dyn AnimationSink,
    /// Simulation time at the start of this tick, seconds.
    pub now: f32,
    /// Tick duration, seconds.
    pub dt: f32,
}

/// What one brain tick did, for observers.
#[derive(Copy, Clone, Debug, Default)]
pub struct BrainReport {
    pub fired:         bool,
    pub entered_chase: bool,
    pub lost_target:   bool,
}

// ── AgentBrain ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BrainState {
    Idle,
    Chase,
}

/// One agent's decision state, stepped once per tick.
#[derive(Debug)]
pub struct AgentBrain {
    id:          AgentId,
    profile:     BrainProfile,
    state:       BrainState,
    /// Where the agent returns after abandoning a chase.
    start_point: Vec3,
    /// Last position the target was confirmed (or reported) at.
    last_known:  Option<Vec3>,
    /// Lose countdown, restarted on each confirmed detection.
    chase:       Countdown,
    in_combat:   bool,
    fire:        FireControl,
}

impl AgentBrain {
    pub fn new(id: AgentId, start_point: Vec3, profile: BrainProfile) -> Self {
        Self {
            id,
            profile,
            state: BrainState::Idle,
            start_point,
            last_known: None,
            chase: Countdown::idle(),
            in_combat: false,
            fire: FireControl::new(profile.fire),
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn state(&self) -> BrainState {
        self.state
    }

    pub fn in_combat(&self) -> bool {
        self.in_combat
    }

    pub fn last_known(&self) -> Option<Vec3> {
        self.last_known
    }

    pub fn profile(&self) -> &BrainProfile {
        &self.profile
    }

    /// Step the state machine one tick.
    pub fn tick<N, L>(&mut self, nav: &mut N, ctx: &mut BrainCtx<'_, L>) -> BrainReport
    where
        N: NavProvider,
        L: LineOfSight,
    {
        match self.state {
            BrainState::Idle => self.tick_idle(nav, ctx),
            BrainState::Chase => self.tick_chase(nav, ctx),
        }
    }

    fn tick_idle<N, L>(&mut self, nav: &mut N, ctx: &mut BrainCtx<'_, L>) -> BrainReport
    where
        N: NavProvider,
        L: LineOfSight,
    {
        let mut report = BrainReport::default();
        let detected = self
            .profile
            .perception
            .can_detect(nav.position(), nav.forward(), ctx.target, ctx.los);

        if detected {
            self.enter_chase(ctx.target.position, nav.position(), ctx);
            report.entered_chase = true;
        } else if let Some(shared) = ctx.board.fresh(self.id, ctx.now, &self.profile.sharing) {
            self.enter_chase(shared, nav.position(), ctx);
            report.entered_chase = true;
        }
        // Idle agents animate off their actual motion (returning home, etc.).
        ctx.animation
            .set_moving(nav.velocity().length() > TargetState::MOVE_THRESHOLD);
        report
    }

    fn tick_chase<N, L>(&mut self, nav: &mut N, ctx: &mut BrainCtx<'_, L>) -> BrainReport
    where
        N: NavProvider,
        L: LineOfSight,
    {
        let mut report = BrainReport::default();
        let target = *ctx.target;
        let position = nav.position();

        // Confirmed detection refreshes the intel and the lose window.
        if self
            .profile
            .perception
            .can_detect(position, nav.forward(), &target, ctx.los)
        {
            self.last_known = Some(target.position);
            self.chase.start(self.profile.chase.keep_chasing_time);
            ctx.board.broadcast(
                ctx.directory,
                self.id,
                position,
                target.position,
                ctx.now,
                &self.profile.sharing,
            );
        }

        let timed_out = self.chase.tick(ctx.dt);
        let out_of_reach = target.alive
            && position.distance(target.position) > self.profile.chase.distance_to_lose;

        let Some(last_known) = self.last_known else {
            // Chase without intel should not happen; recover by standing down.
            self.lose(nav);
            report.lost_target = true;
            return report;
        };
        if timed_out || out_of_reach {
            self.lose(nav);
            report.lost_target = true;
            return report;
        }

        // Fire cycle runs only against a live target.
        if target.alive {
            let to_target = (target.position - position).ground();
            let aim_error = nav.forward().signed_angle_y(to_target);
            report.fired = self.fire.tick(ctx.dt, aim_error);
            if report.fired {
                // Shots leave at eye height toward where the target is now.
                ctx.emitter
                    .fire(position + Vec3::UP, to_target.normalized_or_zero());
                ctx.animation.trigger_fire();
            }
        }
        // Waiting between bursts reads as movement; bursting reads as a
        // stand-still regardless of residual velocity.
        ctx.animation.set_moving(!self.fire.bursting());

        if self.fire.bursting() {
            // Stop and shoot: hold the current spot for the whole burst.
            nav.set_destination(position);
        } else {
            let neighbors = ctx.directory.query(
                position,
                ctx.directory.config().neighborhood_radius,
                self.id,
            );
            let goal = surround_position(
                position,
                last_known,
                &neighbors,
                self.profile.combat_only_formation,
                &self.profile.formation,
            );
            if position.ground().distance(goal.ground()) > self.profile.chase.distance_to_stop {
                let influence = if target.alive {
                    self.profile.chase.combat_flocking_influence
                } else {
                    self.profile.chase.flocking_influence
                };
                steer_toward(
                    nav,
                    (goal - position).ground(),
                    &neighbors,
                    influence,
                    &self.profile.steering,
                );
            } else {
                nav.set_destination(position);
            }
        }
        report
    }

    fn enter_chase<L>(&mut self, origin: Vec3, position: Vec3, ctx: &mut BrainCtx<'_, L>)
    where
        L: LineOfSight,
    {
        debug!("{} enters chase toward {origin}", self.id);
        self.state = BrainState::Chase;
        self.in_combat = true;
        self.last_known = Some(origin);
        self.chase.start(self.profile.chase.keep_chasing_time);
        self.fire.reset();
        ctx.board
            .broadcast(ctx.directory, self.id, position, origin, ctx.now, &self.profile.sharing);
    }

    fn lose<N: NavProvider>(&mut self, nav: &mut N) {
        debug!("{} loses its target, returning to {}", self.id, self.start_point);
        self.state = BrainState::Idle;
        self.in_combat = false;
        self.last_known = None;
        self.chase.stop();
        self.fire.halt();
        nav.set_destination(self.start_point);
    }
}
