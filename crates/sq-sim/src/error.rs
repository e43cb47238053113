use sq_core::{AgentId, SquadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("a squad needs at least one agent")]
    EmptySquad,

    #[error("no agent with id {0}")]
    UnknownAgent(AgentId),

    #[error(transparent)]
    Squad(#[from] SquadError),
}

pub type SimResult<T> = Result<T, SimError>;
