//! Candidate move generation.
//!
//! Enumerates every legal move for one side and annotates each with the
//! features the scorer reads.

pub mod features;
pub mod movement;

pub use features::{FeatureContext, MoveFeatures};
pub use movement::{destinations, Destination};

use crate::board::{CombatRules, GameState, Point, Rank};
use crate::error::EngineError;

/// A candidate move with everything the scorer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveWithDetails {
    pub from: Point,
    pub to: Point,
    pub rank: Rank,
    /// Ray length; 1 except for long-range runs.
    pub steps: u8,
    pub features: MoveFeatures,
    pub score: f64,
}

impl MoveWithDetails {
    /// True for a long-range move of more than one cell, which identifies the mover.
    pub fn is_long_run(&self) -> bool {
        self.rank.is_long_range() && self.steps > 1
    }
}

/// The engine's output for one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub from: Point,
    pub to: Point,
    pub score: f64,
}

impl From<&MoveWithDetails> for Move {
    fn from(m: &MoveWithDetails) -> Self {
        Move {
            from: m.from,
            to: m.to,
            score: m.score,
        }
    }
}

/// Generates unscored candidates for every movable piece of `ctx.side`.
///
/// Pieces whose rank is not visible in the state are skipped; the host always
/// shows the engine its own ranks.
pub fn generate_moves<R: CombatRules>(
    state: &GameState,
    ctx: &FeatureContext<'_, R>,
) -> Result<Vec<MoveWithDetails>, EngineError> {
    let mut moves = Vec::new();

    for (from, occupant) in state.pieces_of(ctx.side) {
        let rank = match occupant.rank {
            Some(r) => r,
            None => {
                log::warn!("own piece at {} has no visible rank, skipping", from);
                continue;
            }
        };
        for dest in destinations(state, from, rank) {
            moves.push(MoveWithDetails {
                from,
                to: dest.to,
                rank,
                steps: dest.steps,
                features: ctx.extract(state, from, rank, dest)?,
                score: 0.0,
            });
        }
    }

    Ok(moves)
}
