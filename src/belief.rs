//! Belief state.
//!
//! The engine's running estimates about hidden facts: which opponent cells
//! may still hold the flag, which own pieces have never moved, and which own
//! pieces have never been revealed. Each `Engine` owns one instance.

use std::collections::HashSet;

use crate::board::{GameState, Piece, Point, Side};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeliefState {
    pub possible_flags: HashSet<Point>,
    pub unmoved: HashSet<Point>,
    pub unrevealed: HashSet<Point>,
}

impl BeliefState {
    /// Seeds the flag candidates with the opponent's home rows and both own
    /// sets with the placement.
    pub fn seeded(side: Side, placement: &[Piece]) -> Self {
        let own: HashSet<Point> = placement.iter().map(|p| p.position).collect();
        BeliefState {
            possible_flags: side.opponent().home_points().collect(),
            unmoved: own.clone(),
            unrevealed: own,
        }
    }

    /// Updates the own-piece sets for a move the engine is about to play.
    ///
    /// A piece stays hidden only if it moved onto an empty cell and did not
    /// give itself away with a multi-cell run. Attacking a hidden enemy also
    /// counts as revealing, since combat exposes both ranks.
    pub fn record_own_move(&mut self, from: Point, to: Point, engaged: bool, long_run: bool) {
        self.unmoved.remove(&from);
        if self.unrevealed.remove(&from) && !engaged && !long_run {
            self.unrevealed.insert(to);
        }
    }

    /// Drops every flag candidate the state proves cannot be the flag.
    pub fn prune_flag_candidates(&mut self, state: &GameState, side: Side) {
        let opponent = side.opponent();
        self.possible_flags.retain(|&p| {
            let cell = state.cell(p);
            opponent.owns_half(p) && cell.owner() == Some(opponent) && !cell.is_rank_known()
        });
        if let Some(last) = state.last_move {
            self.possible_flags.remove(&last.from);
            self.possible_flags.remove(&last.to);
        }
    }

    /// Forgets own-piece records that the state no longer backs and marks an
    /// attacked survivor as revealed.
    pub fn reconcile_own_pieces(&mut self, state: &GameState, side: Side) {
        let holds_own = |p: &Point| state.cell(*p).owner() == Some(side);
        self.unmoved.retain(holds_own);
        self.unrevealed.retain(holds_own);
        if let Some(last) = state.last_move {
            self.unrevealed.remove(&last.to);
        }
    }
}
