//! Headless skirmish demo.
//!
//! A squad of four hearing agents and two vision agents guards an arena with
//! a sight-blocking wall across the middle.  A scripted target sneaks in
//! walking, breaks into a run, stops to hide for a while, then despawns.
//! Events (chase entries, shots, give-ups) are printed as they happen.
//!
//! Run with `RUST_LOG=debug` to also see the per-agent state transitions.

use std::sync::Arc;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sq_core::{AgentId, SimClock, Vec3};
use sq_brain::BrainProfile;
use sq_nav::{Aabb, PlanarNav, PlanarSurface};
use sq_sim::{SquadBuilder, SquadObserver};

const DT: f32 = 0.1;
const TICKS: u64 = 700;

// ── Target script ─────────────────────────────────────────────────────────────

/// Where the target is `t` seconds in, or `None` once it has slipped away.
fn target_at(t: f32) -> Option<Vec3> {
    match t {
        // Sneak in from the south at a walk.
        t if t < 12.0 => Some(Vec3::new(-5.0, 0.0, -25.0 + 3.0 * t)),
        // Spotted territory: sprint east across the arena.
        t if t < 16.0 => Some(Vec3::new(-5.0 + 12.0 * (t - 12.0), 0.0, 11.0)),
        // Freeze behind the wall and wait out the searchers.
        t if t < 40.0 => Some(Vec3::new(43.0, 0.0, 11.0)),
        _ => None,
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct EventPrinter {
    shots: usize,
}

impl SquadObserver for EventPrinter {
    fn on_chase_entered(&mut self, id: AgentId, clock: &SimClock) {
        println!("[{clock}] {id} starts chasing");
    }

    fn on_shot(&mut self, id: AgentId, at: Vec3, clock: &SimClock) {
        self.shots += 1;
        println!("[{clock}] {id} fires at {at}");
    }

    fn on_target_lost(&mut self, id: AgentId, clock: &SimClock) {
        println!("[{clock}] {id} gives up and heads home");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    // 50×50 half-extent arena with a wall segment north of the center.
    let surface = Arc::new(PlanarSurface::arena(50.0).with_blocker(Aabb::new(
        Vec3::new(20.0, 0.0, 14.0),
        Vec3::new(50.0, 3.0, 16.0),
    )));

    let mut rng = SmallRng::seed_from_u64(7);
    let mut scatter = |center: Vec3, spread: f32, rng: &mut SmallRng| {
        Vec3::new(
            center.x + rng.gen_range(-spread..spread),
            0.0,
            center.z + rng.gen_range(-spread..spread),
        )
    };

    let mut builder = SquadBuilder::new(Arc::clone(&surface)).dt(DT);
    // Listeners patrol the southern approach.
    for _ in 0..4 {
        let pos = scatter(Vec3::new(0.0, 0.0, -10.0), 6.0, &mut rng);
        let nav = PlanarNav::new(Arc::clone(&surface), pos, 4.5);
        builder = builder.spawn(BrainProfile::hearing(), nav);
    }
    // Watchers cover the open ground up north.
    for _ in 0..2 {
        let pos = scatter(Vec3::new(10.0, 0.0, 8.0), 4.0, &mut rng);
        let nav = PlanarNav::new(Arc::clone(&surface), pos, 4.5);
        builder = builder.spawn(BrainProfile::vision(), nav);
    }

    let mut squad = builder.build()?;
    let mut printer = EventPrinter::default();

    println!("skirmish: {} agents, {} ticks at {DT}s", squad.len(), TICKS);
    for _ in 0..TICKS {
        let t = squad.clock().now();
        squad.tick(target_at(t), &mut printer);
    }

    println!(
        "done at {}: {} shots fired, target {}",
        squad.clock(),
        printer.shots,
        if squad.target().alive { "still at large" } else { "long gone" },
    );
    Ok(())
}
