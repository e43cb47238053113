//! `sq-crowd` — the neighbor directory.
//!
//! One explicitly owned [`NeighborDirectory`] per squad tracks every live
//! agent and answers the radius-bounded nearest-neighbor queries that the
//! steering, sharing, and formation layers are built on.
//!
//! # Design notes
//!
//! Agents do not hand the directory references to themselves.  Instead each
//! agent *publishes a sample* (position, velocity, combat flag) when it is
//! updated within the tick, and queries read whatever samples are currently
//! published.  Because agents are updated sequentially, later agents see
//! earlier agents' same-tick samples — the standard consistency relaxation
//! for real-time crowd simulation; it converges over subsequent ticks.
//!
//! Queries are an O(N) scan with a sort.  Squads are tens of agents, not
//! thousands; a spatial index would not pay for itself here, and the query
//! contract is written so one could be substituted without callers noticing.

pub mod directory;


pub use directory::{AgentSample, CrowdConfig, Neighbor, NeighborDirectory};
