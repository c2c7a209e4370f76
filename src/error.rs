//! Engine error types.

use thiserror::Error;

use crate::board::Rank;
use crate::config::ConfigError;

/// Failures that abort the current engine call.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine asked to play before initialize was called")]
    NotInitialized,

    #[error("could not place {rank:?} on a free cell within {attempts} attempts")]
    PlacementExhausted { rank: Rank, attempts: u32 },

    #[error("no flag candidates remain; belief pruning removed every cell")]
    NoFlagCandidates,

    #[error("no movable piece has a legal destination")]
    NoLegalMoves,

    #[error("invalid strategy configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
