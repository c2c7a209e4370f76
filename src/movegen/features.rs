//! Per-move feature extraction.

use crate::belief::BeliefState;
use crate::board::{CombatRules, GameState, Point, Rank, Side};
use crate::config::StrategyConfig;
use crate::error::EngineError;
use crate::eval::distance_to_nearest_flag_candidate;

use super::movement::Destination;

/// Tactical and positional facts about one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveFeatures {
    /// The target holds an opponent piece.
    pub battle: bool,
    /// The target is a known opponent piece the mover removes.
    pub decisive_victory: bool,
    /// The target is a known opponent piece that removes the mover.
    pub decisive_loss: bool,
    /// The target is an opponent piece of unknown rank.
    pub unknown_battle: bool,
    /// The target lies in the mover's own half.
    pub target_in_own_half: bool,
    pub forward_progress: bool,
    /// A sideways move with both ends in the opponent's half.
    pub lateral_progress_opponent_half: bool,
    pub first_move: bool,
    pub unrevealed: bool,
    /// Change in nearest flag-candidate distance; negative means closer.
    pub distance_delta: f64,
}

/// Everything feature extraction reads besides the board.
pub struct FeatureContext<'a, R: CombatRules> {
    pub side: Side,
    pub beliefs: &'a BeliefState,
    pub config: &'a StrategyConfig,
    pub rules: &'a R,
}

impl<R: CombatRules> FeatureContext<'_, R> {
    fn flag_distance(&self, point: Point) -> Result<f64, EngineError> {
        distance_to_nearest_flag_candidate(&self.beliefs.possible_flags, self.config, point)
    }

    /// Computes the features of moving `rank` from `from` to `dest`.
    pub fn extract(
        &self,
        state: &GameState,
        from: Point,
        rank: Rank,
        dest: Destination,
    ) -> Result<MoveFeatures, EngineError> {
        let to = dest.to;
        let target = state.cell(to);
        let battle = target.owner() == Some(self.side.opponent());
        let advance = self.side.advance(from, to);
        let in_opponent_half = !self.side.owns_half(from) && !self.side.owns_half(to);

        Ok(MoveFeatures {
            battle,
            decisive_victory: battle && target.can_be_defeated_by(rank, self.rules),
            decisive_loss: battle && target.will_cause_defeat_for(rank, self.rules),
            unknown_battle: battle && !target.is_rank_known(),
            target_in_own_half: self.side.owns_half(to),
            forward_progress: advance > 0,
            lateral_progress_opponent_half: advance == 0 && in_opponent_half,
            first_move: self.beliefs.unmoved.contains(&from),
            unrevealed: self.beliefs.unrevealed.contains(&from),
            distance_delta: self.flag_distance(to)? - self.flag_distance(from)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ClassicRules, Piece};

    fn context<'a>(
        beliefs: &'a BeliefState,
        config: &'a StrategyConfig,
    ) -> FeatureContext<'a, ClassicRules> {
        FeatureContext {
            side: Side::First,
            beliefs,
            config,
            rules: &ClassicRules,
        }
    }

    fn step(to: Point) -> Destination {
        Destination { to, steps: 1 }
    }

    #[test]
    fn quiet_forward_step() {
        let mut state = GameState::open(Side::First);
        let from = Point::new(4, 6);
        state.place(from, Side::First, Some(Rank::Captain));
        let beliefs = BeliefState::seeded(Side::First, &[Piece::new(Rank::Captain, from)]);
        let config = StrategyConfig::default();

        let f = context(&beliefs, &config)
            .extract(&state, from, Rank::Captain, step(Point::new(4, 5)))
            .unwrap();
        assert!(!f.battle);
        assert!(f.forward_progress);
        assert!(f.first_move);
        assert!(f.unrevealed);
        assert!(f.target_in_own_half);
        assert!(f.distance_delta < 0.0);
    }

    #[test]
    fn known_weaker_target_is_decisive_victory() {
        let mut state = GameState::open(Side::First);
        let from = Point::new(4, 3);
        state.place(from, Side::First, Some(Rank::General));
        state.place(Point::new(5, 3), Side::Second, Some(Rank::Captain));
        let beliefs = BeliefState::seeded(Side::First, &[]);
        let config = StrategyConfig::default();

        let f = context(&beliefs, &config)
            .extract(&state, from, Rank::General, step(Point::new(5, 3)))
            .unwrap();
        assert!(f.battle);
        assert!(f.decisive_victory);
        assert!(!f.decisive_loss);
        assert!(!f.unknown_battle);
        assert!(f.lateral_progress_opponent_half);
        assert!(!f.forward_progress);
        assert!(!f.first_move);
    }

    #[test]
    fn bomb_is_decisive_loss_unless_miner() {
        let mut state = GameState::open(Side::First);
        let from = Point::new(4, 4);
        state.place(from, Side::First, Some(Rank::Colonel));
        state.place(Point::new(4, 3), Side::Second, Some(Rank::Bomb));
        let beliefs = BeliefState::seeded(Side::First, &[]);
        let config = StrategyConfig::default();
        let ctx = context(&beliefs, &config);

        let colonel = ctx
            .extract(&state, from, Rank::Colonel, step(Point::new(4, 3)))
            .unwrap();
        assert!(colonel.decisive_loss);
        assert!(!colonel.decisive_victory);

        let miner = ctx
            .extract(&state, from, Rank::Miner, step(Point::new(4, 3)))
            .unwrap();
        assert!(miner.decisive_victory);
    }

    #[test]
    fn hidden_target_is_unknown_battle() {
        let mut state = GameState::open(Side::First);
        let from = Point::new(4, 6);
        state.place(from, Side::First, Some(Rank::Major));
        state.place(Point::new(4, 5), Side::Second, None);
        let beliefs = BeliefState::seeded(Side::First, &[]);
        let config = StrategyConfig::default();

        let f = context(&beliefs, &config)
            .extract(&state, from, Rank::Major, step(Point::new(4, 5)))
            .unwrap();
        assert!(f.unknown_battle);
        assert!(f.target_in_own_half);
        assert!(!f.decisive_victory && !f.decisive_loss);
    }

    #[test]
    fn empty_flag_set_propagates() {
        let mut state = GameState::open(Side::First);
        let from = Point::new(4, 6);
        state.place(from, Side::First, Some(Rank::Major));
        let beliefs = BeliefState::default();
        let config = StrategyConfig::default();
        let err = context(&beliefs, &config)
            .extract(&state, from, Rank::Major, step(Point::new(4, 5)))
            .unwrap_err();
        assert!(matches!(err, EngineError::NoFlagCandidates));
    }
}
