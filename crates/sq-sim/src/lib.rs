//! `sq-sim` — the single-threaded tick driver.
//!
//! | Module       | Concern                                              |
//! |--------------|------------------------------------------------------|
//! | [`sim`]      | [`Squad`]: owns clock, directory, board, agents; runs the tick loop. |
//! | [`builder`]  | [`SquadBuilder`]: validated construction.            |
//! | [`tracker`]  | [`TargetTracker`]: derives target speed from the position feed. |
//! | [`observer`] | [`SquadObserver`]: shot/state-change/tick callbacks. |
//! | [`error`]    | [`SimError`] / [`SimResult`].                        |
//!
//! Everything runs on the calling thread.  One `tick` call advances the
//! whole squad by `dt` seconds; determinism falls out of the strict id-order
//! agent update and the tie-broken directory queries.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod tracker;


pub use builder::SquadBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SquadObserver};
pub use sim::Squad;
pub use tracker::TargetTracker;
