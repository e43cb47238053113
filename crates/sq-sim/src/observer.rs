//! Simulation observer trait for progress reporting and event collection.

use sq_core::{AgentId, SimClock, Vec3};

/// Callbacks invoked by [`Squad::tick`][crate::Squad::tick] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — shot counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct ShotCounter(usize);
///
/// impl SquadObserver for ShotCounter {
///     fn on_shot(&mut self, _id: AgentId, _at: Vec3, _clock: &SimClock) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SquadObserver {
    /// Called at the very start of each tick, before any agent is updated.
    fn on_tick_start(&mut self, _clock: &SimClock) {}

    /// An agent fired a shot at the target, which was at `at`.
    fn on_shot(&mut self, _id: AgentId, _at: Vec3, _clock: &SimClock) {}

    /// An agent left idle and started chasing.
    fn on_chase_entered(&mut self, _id: AgentId, _clock: &SimClock) {}

    /// An agent gave up its chase and is returning to its start point.
    fn on_target_lost(&mut self, _id: AgentId, _clock: &SimClock) {}

    /// Called at the end of each tick, after the clock has advanced.
    fn on_tick_end(&mut self, _clock: &SimClock) {}
}

/// A [`SquadObserver`] that does nothing.
pub struct NoopObserver;

impl SquadObserver for NoopObserver {}
