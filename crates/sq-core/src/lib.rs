//! `sq-core` — foundational types for the squad AI framework.
//!
//! This crate is a dependency of every other `sq-*` crate.  It intentionally
//! has no `sq-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `AgentId`                                           |
//! | [`vec`]     | `Vec3`, ground-plane projection, angle helpers      |
//! | [`time`]    | `SimClock`, `Countdown`                             |
//! | [`error`]   | `SquadError`, `SquadResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod time;
pub mod vec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SquadError, SquadResult};
pub use ids::AgentId;
pub use time::{Countdown, SimClock};
pub use vec::Vec3;
