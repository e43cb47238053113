//! `sq-steering` — per-agent steering composition.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`flocking`] | cohesion / separation / alignment terms and their weights |
//! | [`goal`]     | goal blending and validated destination emission          |
//!
//! # Design notes
//!
//! All steering terms are pure functions over a neighbor-set snapshot
//! obtained from the directory; they allocate nothing and cannot fail.  The
//! defined-zero convention runs throughout: an empty neighbor set yields zero
//! cohesion, separation, and alignment, and a zero steering vector leaves the
//! goal direction untouched after blending.

pub mod flocking;
pub mod goal;

#[cfg(test)]
mod tests;

pub use flocking::{alignment, cohesion, flocking_force, separation, SteeringConfig};
pub use goal::{blend_with_goal, propose_step, steer_toward};
