//! Scoring weights and distance tuning.

use serde::Deserialize;

use crate::board::{Rank, GRID_SIZE};

/// A percentage adjustment applied to every score of one rank.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RankBoost {
    pub rank: Rank,
    pub percent: f64,
}

/// Point values for the move features.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub decisive_victory: f64,
    pub decisive_loss: f64,
    pub unknown_battle_own_half: f64,
    pub unknown_battle_opponent_half: f64,
    pub forward_progress: f64,
    pub lateral_progress_opponent_half: f64,
    pub first_move: f64,
    pub unrevealed_move: f64,
    /// Awarded when a move brings the piece closer to a flag candidate.
    pub flag_distance_decrease: f64,
    /// Multiply the distance bonus by the distance gained for long scout runs.
    pub scale_long_range_distance_bonus: bool,
    pub rank_boosts: Vec<RankBoost>,
    pub fuzz_min_percent: f64,
    pub fuzz_max_percent: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            decisive_victory: 60.0,
            decisive_loss: -80.0,
            unknown_battle_own_half: -10.0,
            unknown_battle_opponent_half: 8.0,
            forward_progress: 6.0,
            lateral_progress_opponent_half: 3.0,
            first_move: -4.0,
            unrevealed_move: -2.0,
            flag_distance_decrease: 5.0,
            scale_long_range_distance_bonus: true,
            rank_boosts: vec![
                RankBoost { rank: Rank::Marshal, percent: 10.0 },
                RankBoost { rank: Rank::General, percent: 5.0 },
                RankBoost { rank: Rank::Scout, percent: 15.0 },
                RankBoost { rank: Rank::Miner, percent: -10.0 },
                RankBoost { rank: Rank::Spy, percent: -40.0 },
            ],
            fuzz_min_percent: -10.0,
            fuzz_max_percent: 10.0,
        }
    }
}

impl ScoringWeights {
    /// Percentage boost configured for `rank`, zero if none.
    pub fn rank_boost(&self, rank: Rank) -> f64 {
        self.rank_boosts
            .iter()
            .filter(|b| b.rank == rank)
            .map(|b| b.percent)
            .sum()
    }
}

/// Tuning for the flag-candidate distance heuristic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DistanceTuning {
    /// Added to the distance of candidates on a lake column.
    pub lake_penalty: f64,
    pub lake_columns: Vec<i8>,
    /// A candidate with prior `p` has its distance divided by `1 + compression * p`.
    pub probability_compression: f64,
}

impl Default for DistanceTuning {
    fn default() -> Self {
        DistanceTuning {
            lake_penalty: 3.0,
            lake_columns: vec![2, 3, 6, 7],
            probability_compression: 4.0,
        }
    }
}

impl DistanceTuning {
    pub fn transposed(&self) -> DistanceTuning {
        DistanceTuning {
            lake_penalty: self.lake_penalty,
            lake_columns: self.lake_columns.iter().map(|x| GRID_SIZE - 1 - x).collect(),
            probability_compression: self.probability_compression,
        }
    }
}
