//! `sq-tactics` — squad-level target coordination.
//!
//! Two cooperating layers sit on top of the neighbor directory:
//!
//! | Module      | Concern                                              |
//! |-------------|------------------------------------------------------|
//! | [`sharing`] | Peer-to-peer broadcast of target sightings, with a strict freshness window so stale intel decays on its own. |
//! | [`formation`] | Distance-ranked angular surround slots, so chasers encircle a target instead of stacking on one approach line. |
//!
//! # Design notes
//!
//! Sharing is deliberately *pull-based*: a sighting is written onto each
//! recipient's record on the [`ShareBoard`], and recipients consult the board
//! on their own update.  Nothing here spawns work or holds references to
//! agents; the board is plain data owned by the simulation loop.
//!
//! Formation slots are recomputed from scratch every query.  Ranks can
//! reshuffle as agents overtake each other, which shows up as slot swapping
//! mid-approach; the slot assignment converges once distances settle.

pub mod formation;
pub mod sharing;


pub use formation::{surround_position, FormationConfig};
pub use sharing::{ShareBoard, SharedTarget, SharingConfig};
