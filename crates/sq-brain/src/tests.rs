//! Unit tests for sq-brain.

mod helpers {
    use std::sync::Arc;

    use sq_core::{AgentId, Vec3};
    use sq_crowd::NeighborDirectory;
    use sq_nav::{PlanarNav, PlanarSurface};
    use sq_tactics::ShareBoard;

    use crate::{AgentBrain, AnimationSink, BrainProfile, FireEmitter, TargetState};

    /// Captures every emitted shot.
    #[derive(Default)]
    pub struct ShotLog {
        pub shots: Vec<(Vec3, Vec3)>,
    }

    impl FireEmitter for ShotLog {
        fn fire(&mut self, origin: Vec3, direction: Vec3) {
            self.shots.push((origin, direction));
        }
    }

    /// Captures the latest animation flags.
    #[derive(Default)]
    pub struct AnimLog {
        pub moving:   Option<bool>,
        pub triggers: usize,
    }

    impl AnimationSink for AnimLog {
        fn set_moving(&mut self, moving: bool) {
            self.moving = Some(moving);
        }

        fn trigger_fire(&mut self) {
            self.triggers += 1;
        }
    }

    pub struct Rig {
        pub brain:     AgentBrain,
        pub nav:       PlanarNav,
        pub directory: NeighborDirectory,
        pub board:     ShareBoard,
        pub surface:   Arc<PlanarSurface>,
        pub emitter:   ShotLog,
        pub animation: AnimLog,
        pub now:       f32,
        pub dt:        f32,
    }

    impl Rig {
        pub fn new(profile: BrainProfile, start: Vec3, dt: f32) -> Self {
            let surface = Arc::new(PlanarSurface::open());
            let speed = profile.chase.move_speed;
            Self {
                brain:     AgentBrain::new(AgentId(0), start, profile),
                nav:       PlanarNav::new(Arc::clone(&surface), start, speed),
                directory: NeighborDirectory::default(),
                board:     ShareBoard::new(),
                surface,
                emitter:   ShotLog::default(),
                animation: AnimLog::default(),
                now: 0.0,
                dt,
            }
        }

        /// One brain tick against the given target snapshot.
        pub fn tick(&mut self, target: &TargetState) -> crate::BrainReport {
            let mut ctx = crate::BrainCtx {
                directory: &self.directory,
                board:     &mut self.board,
                target,
                los:       self.surface.as_ref(),
                emitter:   &mut self.emitter,
                animation: &mut self.animation,
                now: self.now,
                dt:  self.dt,
            };
            let report = self.brain.tick(&mut self.nav, &mut ctx);
            self.now += self.dt;
            report
        }
    }

    pub fn walking_at(position: Vec3) -> TargetState {
        TargetState::at(position, 1.0)
    }

    pub fn running_at(position: Vec3) -> TargetState {
        TargetState::at(position, 12.0)
    }
}

// ── Perception ────────────────────────────────────────────────────────────────

mod perception {
    use sq_core::Vec3;
    use sq_nav::{Aabb, PlanarSurface};

    use crate::{Perception, TargetState};
    use super::helpers::{running_at, walking_at};

    fn clear() -> PlanarSurface {
        PlanarSurface::open()
    }

    #[test]
    fn hearing_ignores_a_still_target() {
        let p = Perception::hearing();
        let still = TargetState::at(Vec3::new(0.0, 0.0, 2.0), 0.0);
        assert!(!p.can_detect(Vec3::ZERO, Vec3::FORWARD, &still, &clear()));
    }

    #[test]
    fn hearing_walk_radius() {
        let p = Perception::hearing(); // walk 8
        let near = walking_at(Vec3::new(0.0, 0.0, 7.0));
        let far = walking_at(Vec3::new(0.0, 0.0, 9.0));
        assert!(p.can_detect(Vec3::ZERO, Vec3::FORWARD, &near, &clear()));
        assert!(!p.can_detect(Vec3::ZERO, Vec3::FORWARD, &far, &clear()));
    }

    #[test]
    fn hearing_run_radius() {
        let p = Perception::hearing(); // run 20
        let loud = running_at(Vec3::new(0.0, 0.0, 15.0));
        let too_far = running_at(Vec3::new(0.0, 0.0, 21.0));
        assert!(p.can_detect(Vec3::ZERO, Vec3::FORWARD, &loud, &clear()));
        assert!(!p.can_detect(Vec3::ZERO, Vec3::FORWARD, &too_far, &clear()));
    }

    #[test]
    fn hearing_works_behind_the_back() {
        let p = Perception::hearing();
        let behind = walking_at(Vec3::new(0.0, 0.0, -5.0));
        assert!(p.can_detect(Vec3::ZERO, Vec3::FORWARD, &behind, &clear()));
    }

    #[test]
    fn vision_sees_a_still_target_in_cone() {
        let p = Perception::vision(); // 15 units, 120°
        let still = TargetState::at(Vec3::new(0.0, 0.0, 10.0), 0.0);
        assert!(p.can_detect(Vec3::ZERO, Vec3::FORWARD, &still, &clear()));
    }

    #[test]
    fn vision_range_limited() {
        let p = Perception::vision();
        let beyond = TargetState::at(Vec3::new(0.0, 0.0, 16.0), 0.0);
        assert!(!p.can_detect(Vec3::ZERO, Vec3::FORWARD, &beyond, &clear()));
    }

    #[test]
    fn vision_cone_limited() {
        let p = Perception::vision();
        // 90° off forward: outside the 60° half-angle.
        let side = TargetState::at(Vec3::new(10.0, 0.0, 0.0), 0.0);
        assert!(!p.can_detect(Vec3::ZERO, Vec3::FORWARD, &side, &clear()));
        let behind = TargetState::at(Vec3::new(0.0, 0.0, -10.0), 0.0);
        assert!(!p.can_detect(Vec3::ZERO, Vec3::FORWARD, &behind, &clear()));
    }

    #[test]
    fn vision_blocked_by_a_wall() {
        let wall = PlanarSurface::open().with_blocker(Aabb::new(
            Vec3::new(-2.0, 0.0, 4.9),
            Vec3::new(2.0, 3.0, 5.1),
        ));
        let p = Perception::vision();
        let hidden = TargetState::at(Vec3::new(0.0, 0.0, 10.0), 0.0);
        assert!(!p.can_detect(Vec3::ZERO, Vec3::FORWARD, &hidden, &wall));
    }

    #[test]
    fn nothing_detects_a_dead_target() {
        let gone = TargetState::gone();
        assert!(!Perception::hearing().can_detect(Vec3::ZERO, Vec3::FORWARD, &gone, &clear()));
        assert!(!Perception::vision().can_detect(Vec3::ZERO, Vec3::FORWARD, &gone, &clear()));
    }
}

// ── Fire control ──────────────────────────────────────────────────────────────

mod fire {
    use crate::{FireConfig, FireControl};

    // Timings in powers of two so f32 countdowns hit zero exactly.
    fn quarter_step() -> FireControl {
        let mut fc = FireControl::new(FireConfig {
            fire_rate:          0.25,
            wait_between_shots: 0.5,
            time_to_shoot:      1.0,
            max_aim_degrees:    30.0,
        });
        fc.reset();
        fc
    }

    #[test]
    fn wait_then_burst_then_wait() {
        let mut fc = quarter_step();
        let dt = 0.25;

        // Wait phase: two ticks, moving, no shots.
        assert!(!fc.tick(dt, 0.0));
        assert!(!fc.bursting());
        assert!(!fc.tick(dt, 0.0)); // wait expires, burst opens
        assert!(fc.bursting());

        // Burst window: one shot per interval, four intervals in 1.0s.
        let mut shots = 0;
        for _ in 0..4 {
            if fc.tick(dt, 0.0) {
                shots += 1;
            }
        }
        assert_eq!(shots, 4);
        assert!(!fc.bursting(), "burst window closed");

        // And back to waiting.
        assert!(!fc.tick(dt, 0.0));
    }

    #[test]
    fn aim_gate_aborts_the_burst() {
        let mut fc = quarter_step();
        let dt = 0.25;
        fc.tick(dt, 0.0);
        fc.tick(dt, 0.0); // burst opens
        assert!(fc.bursting());

        // First attempt comes while the target is 45° off: no shot, and the
        // whole cycle restarts from the wait phase.
        assert!(!fc.tick(dt, 45.0));
        assert!(!fc.bursting());

        // The restarted wait runs its full length before the next burst.
        assert!(!fc.tick(dt, 0.0));
        assert!(!fc.tick(dt, 0.0));
        assert!(fc.bursting());
    }

    #[test]
    fn gate_boundary_is_exclusive() {
        let mut fc = quarter_step();
        let dt = 0.25;
        fc.tick(dt, 0.0);
        fc.tick(dt, 0.0);
        // Exactly 30° is outside the cone.
        assert!(!fc.tick(dt, 30.0));
        assert!(!fc.bursting());
    }

    #[test]
    fn a_target_that_stays_off_angle_is_never_shot() {
        let mut fc = quarter_step();
        for _ in 0..200 {
            assert!(!fc.tick(0.25, 90.0));
        }
    }

    #[test]
    fn negative_aim_error_inside_cone_fires() {
        let mut fc = quarter_step();
        let dt = 0.25;
        fc.tick(dt, -10.0);
        fc.tick(dt, -10.0);
        assert!(fc.tick(dt, -10.0));
    }

    #[test]
    fn halted_control_does_nothing() {
        let mut fc = quarter_step();
        fc.halt();
        for _ in 0..20 {
            assert!(!fc.tick(0.25, 0.0));
            assert!(!fc.bursting());
        }
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

mod state_machine {
    use sq_core::{AgentId, Vec3};
    use sq_crowd::AgentSample;
    use sq_nav::NavProvider;

    use crate::{BrainProfile, BrainState, TargetState};
    use super::helpers::{walking_at, Rig};

    const START: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[test]
    fn detection_enters_chase_and_broadcasts() {
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.25);
        // A published squadmate inside the 15-unit sharing radius.
        let peer = AgentId(1);
        rig.directory.publish(
            peer,
            AgentSample { position: Vec3::new(5.0, 0.0, 0.0), ..AgentSample::default() },
        );

        let target = walking_at(Vec3::new(0.0, 0.0, 6.0));
        let report = rig.tick(&target);

        assert!(report.entered_chase);
        assert_eq!(rig.brain.state(), BrainState::Chase);
        assert!(rig.brain.in_combat());
        assert_eq!(rig.brain.last_known(), Some(target.position));
        assert_eq!(
            rig.board.fresh(peer, 0.1, &rig.brain.profile().sharing),
            Some(target.position),
            "squadmate received the sighting"
        );
    }

    #[test]
    fn fresh_shared_record_enters_chase_without_detection() {
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.25);
        let heard = Vec3::new(30.0, 0.0, 0.0);
        rig.board.receive(AgentId(0), heard, 0.0);

        // Target exists but is silent and far: only the intel can trigger.
        let silent = TargetState::at(Vec3::new(30.0, 0.0, 0.0), 0.0);
        let report = rig.tick(&silent);

        assert!(report.entered_chase);
        assert_eq!(rig.brain.last_known(), Some(heard));
    }

    #[test]
    fn stale_shared_record_is_ignored() {
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.25);
        rig.board.receive(AgentId(0), Vec3::new(30.0, 0.0, 0.0), 0.0);
        rig.now = 5.0; // sharing window is exactly 5s

        let report = rig.tick(&TargetState::gone());
        assert!(!report.entered_chase);
        assert_eq!(rig.brain.state(), BrainState::Idle);
    }

    #[test]
    fn timeout_returns_to_start() {
        // dt 0.125 divides the 8s default keep-chasing window in exactly 64
        // ticks, so the boundary lands on a whole tick.
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.125);
        rig.nav.place(Vec3::new(3.0, 0.0, 0.0));

        rig.tick(&walking_at(Vec3::new(3.0, 0.0, 5.0))); // enter chase
        assert_eq!(rig.brain.state(), BrainState::Chase);

        // Target despawns; the lose countdown runs out after 8 seconds.
        let gone = TargetState::gone();
        for _ in 0..63 {
            let report = rig.tick(&gone);
            assert!(!report.lost_target);
        }
        assert_eq!(rig.brain.state(), BrainState::Chase, "still inside the window");

        let report = rig.tick(&gone);
        assert!(report.lost_target);
        assert_eq!(rig.brain.state(), BrainState::Idle);
        assert_eq!(rig.brain.last_known(), None);
        assert!(!rig.brain.in_combat());
        assert_eq!(rig.nav.destination(), START, "walks back to its start point");
    }

    #[test]
    fn distance_lose_is_immediate() {
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.25);
        // Chase entered from intel; live target far beyond distance_to_lose.
        rig.board.receive(AgentId(0), Vec3::new(10.0, 0.0, 0.0), 0.0);
        let far = TargetState::at(Vec3::new(100.0, 0.0, 0.0), 0.0);

        rig.tick(&far); // enter chase from the shared record
        assert_eq!(rig.brain.state(), BrainState::Chase);

        let report = rig.tick(&far);
        assert!(report.lost_target);
        assert_eq!(rig.nav.destination(), START);
    }

    #[test]
    fn detection_refreshes_the_lose_window() {
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.125);
        let target = walking_at(Vec3::new(0.0, 0.0, 5.0));

        rig.tick(&target); // enter
        // Re-detected every tick: far more than 64 ticks without losing.
        for _ in 0..200 {
            let report = rig.tick(&target);
            assert!(!report.lost_target);
        }
        assert_eq!(rig.brain.state(), BrainState::Chase);
    }

    #[test]
    fn bursting_pins_the_destination() {
        // Shot cadence 0.25 so the first shot lands exactly on a tick.
        let mut profile = BrainProfile::hearing();
        profile.fire.fire_rate = 0.25;
        let mut rig = Rig::new(profile, START, 0.25);
        rig.nav.face(Vec3::FORWARD);
        let target = walking_at(Vec3::new(0.0, 0.0, 6.0)); // dead ahead

        rig.tick(&target); // enter chase; fire cycle resets to wait (0.5s)
        rig.tick(&target); // wait 0.25
        rig.tick(&target); // wait expires, burst opens, shot countdown starts

        let here = rig.nav.position();
        assert_eq!(rig.nav.destination(), here, "stands still for the burst");

        let report = rig.tick(&target); // shot countdown expires, aim error 0
        assert!(report.fired);
        assert_eq!(rig.nav.destination(), rig.nav.position());

        // The shot went out through the emitter, at eye height, toward +Z,
        // and the animation saw the trigger plus the stand-still flag.
        assert_eq!(rig.emitter.shots.len(), 1);
        let (origin, direction) = rig.emitter.shots[0];
        assert_eq!(origin, rig.nav.position() + Vec3::UP);
        assert!(direction.z > 0.99, "aimed at the target, got {direction}");
        assert_eq!(rig.animation.triggers, 1);
        assert_eq!(rig.animation.moving, Some(false));
    }

    #[test]
    fn waiting_between_bursts_reads_as_moving() {
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.25);
        let target = walking_at(Vec3::new(0.0, 0.0, 6.0));

        rig.tick(&target); // enter chase
        rig.tick(&target); // wait phase
        assert_eq!(rig.animation.moving, Some(true));
    }

    #[test]
    fn chasing_moves_toward_the_last_known_position() {
        let mut rig = Rig::new(BrainProfile::hearing(), START, 0.25);
        let target = walking_at(Vec3::new(0.0, 0.0, 6.0));

        rig.tick(&target); // enter chase
        rig.tick(&target); // first chase tick steers (wait phase, moving)

        let dest = rig.nav.destination();
        assert!(dest.z > 0.0, "destination advanced toward the target, got {dest}");
    }
}
