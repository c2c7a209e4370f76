//! Candidate scoring.
//!
//! A score is built in four stages:
//! 1. sum the point values of the features the move has (`FEATURE_RULES`),
//! 2. add the flag-distance bonus when the move closes in on a candidate,
//! 3. apply the mover's rank boost,
//! 4. multiply by a random fuzz factor.

use rand::Rng;

use crate::config::ScoringWeights;
use crate::movegen::{MoveFeatures, MoveWithDetails};

/// A boolean move feature that carries a point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    DecisiveVictory,
    DecisiveLoss,
    UnknownBattleOwnHalf,
    UnknownBattleOpponentHalf,
    ForwardProgress,
    LateralProgressOpponentHalf,
    FirstMove,
    UnrevealedMove,
}

/// Feature to point-value table.
pub const FEATURE_RULES: [(Feature, fn(&ScoringWeights) -> f64); 8] = [
    (Feature::DecisiveVictory, |w| w.decisive_victory),
    (Feature::DecisiveLoss, |w| w.decisive_loss),
    (Feature::UnknownBattleOwnHalf, |w| w.unknown_battle_own_half),
    (Feature::UnknownBattleOpponentHalf, |w| w.unknown_battle_opponent_half),
    (Feature::ForwardProgress, |w| w.forward_progress),
    (Feature::LateralProgressOpponentHalf, |w| w.lateral_progress_opponent_half),
    (Feature::FirstMove, |w| w.first_move),
    (Feature::UnrevealedMove, |w| w.unrevealed_move),
];

impl MoveFeatures {
    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::DecisiveVictory => self.decisive_victory,
            Feature::DecisiveLoss => self.decisive_loss,
            Feature::UnknownBattleOwnHalf => self.unknown_battle && self.target_in_own_half,
            Feature::UnknownBattleOpponentHalf => self.unknown_battle && !self.target_in_own_half,
            Feature::ForwardProgress => self.forward_progress,
            Feature::LateralProgressOpponentHalf => self.lateral_progress_opponent_half,
            Feature::FirstMove => self.first_move,
            Feature::UnrevealedMove => self.unrevealed,
        }
    }
}

/// Score before rank boost and fuzz.
pub fn base_score(candidate: &MoveWithDetails, weights: &ScoringWeights) -> f64 {
    let features = &candidate.features;
    let mut score: f64 = FEATURE_RULES
        .iter()
        .filter(|(feature, _)| features.has(*feature))
        .map(|(_, points)| points(weights))
        .sum();

    if features.distance_delta < 0.0 {
        let mut bonus = weights.flag_distance_decrease;
        if weights.scale_long_range_distance_bonus && candidate.is_long_run() {
            bonus *= features.distance_delta.abs();
        }
        score += bonus;
    }

    score
}

/// Applies a percentage boost so that a positive boost always raises the
/// score, whatever its sign.
pub fn apply_rank_boost(score: f64, percent: f64) -> f64 {
    score + score.abs() * percent / 100.0
}

/// Deterministic part of the score: features, distance bonus, rank boost.
pub fn boosted_score(candidate: &MoveWithDetails, weights: &ScoringWeights) -> f64 {
    let base = base_score(candidate, weights);
    apply_rank_boost(base, weights.rank_boost(candidate.rank))
}

/// Full score including the random fuzz factor.
pub fn score(candidate: &MoveWithDetails, weights: &ScoringWeights, rng: &mut impl Rng) -> f64 {
    let fuzz = rng.gen_range(weights.fuzz_min_percent..=weights.fuzz_max_percent);
    boosted_score(candidate, weights) * (1.0 + fuzz / 100.0)
}
