//! `sq-brain` — the per-agent decision layer.
//!
//! | Module         | Concern                                            |
//! |----------------|----------------------------------------------------|
//! | [`target`]     | Snapshot of the pursued target fed in each tick.   |
//! | [`perception`] | Hearing/vision detection predicates.               |
//! | [`fire`]       | Two-phase burst fire cycle with an aim-cone gate.  |
//! | [`sinks`]      | Fire-and-forget weapon and animation interfaces.   |
//! | [`brain`]      | The idle/chase state machine tying it all together.|
//!
//! # Design notes
//!
//! The brain is plain stepped state: no callbacks, no internal references to
//! the world.  Every tick the simulation hands it a [`BrainCtx`] borrowing
//! the directory, the share board, the current target snapshot and the
//! line-of-sight oracle, plus mutable access to the agent's own
//! [`NavProvider`](sq_nav::NavProvider).  The brain reads, decides, writes
//! its steering through the nav provider, and reports what happened in a
//! small [`BrainReport`] the caller can forward to observers.
//!
//! All failure handling is soft.  A dead target, an empty neighbor set, or
//! an off-surface agent skips the affected sub-step for the tick; nothing
//! here returns an error during simulation.

pub mod brain;
pub mod fire;
pub mod perception;
pub mod sinks;
pub mod target;

#[cfg(test)]
mod tests;

pub use brain::{AgentBrain, BrainCtx, BrainProfile, BrainReport, BrainState, ChaseConfig};
pub use fire::{FireConfig, FireControl};
pub use perception::Perception;
pub use sinks::{AnimationSink, FireEmitter, NullSinks};
pub use target::TargetState;
