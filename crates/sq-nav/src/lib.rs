//! `sq-nav` — the movement and sight interfaces the AI core consumes.
//!
//! Path planning and physical motion belong to an external navigation system
//! (a game engine's navmesh agent, typically).  The AI core only ever talks
//! to the two narrow traits here:
//!
//! | Trait           | Contract                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`NavProvider`] | destination requests, pose reads, point validation    |
//! | [`LineOfSight`] | obstruction predicate for the vision sense            |
//!
//! [`PlanarNav`] / [`PlanarSurface`] are a self-contained kinematic
//! implementation on a flat ground plane — enough to run the whole framework
//! headless in tests and demos without an engine.

pub mod planar;
pub mod provider;


pub use planar::{Aabb, PlanarNav, PlanarSurface, Rect};
pub use provider::{LineOfSight, NavProvider};
