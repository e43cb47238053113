//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `SquadError` via `From` impls, or keep them separate.  Note that per-tick
//! soft conditions (missing target, empty neighbor set, off-surface agent)
//! are deliberately NOT errors anywhere in the framework: the affected
//! sub-step degrades to a no-op and is retried next tick.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `sq-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SquadError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sq-*` crates.
pub type SquadResult<T> = Result<T, SquadError>;
