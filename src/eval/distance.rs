//! Distance to the nearest flag candidate.
//!
//! Plain Manhattan distance, pushed up for candidates behind the lake
//! columns and pulled down for candidates the prior favours.

use std::collections::HashSet;

use crate::board::Point;
use crate::config::StrategyConfig;
use crate::error::EngineError;

/// Weighted distance from `point` to one candidate.
fn weighted_distance(point: Point, candidate: Point, config: &StrategyConfig) -> f64 {
    let tuning = &config.distance;
    let mut d = point.manhattan(candidate) as f64;
    if tuning.lake_columns.contains(&candidate.x) {
        d += tuning.lake_penalty;
    }
    if let Some(p) = config.flag_probability(candidate) {
        d /= 1.0 + tuning.probability_compression * p;
    }
    d
}

/// Returns the smallest weighted distance from `point` to any candidate.
///
/// An empty candidate set means pruning went wrong and is reported as
/// `EngineError::NoFlagCandidates`.
pub fn distance_to_nearest_flag_candidate(
    candidates: &HashSet<Point>,
    config: &StrategyConfig,
    point: Point,
) -> Result<f64, EngineError> {
    candidates
        .iter()
        .map(|&c| weighted_distance(point, c, config))
        .min_by(f64::total_cmp)
        .ok_or(EngineError::NoFlagCandidates)
}
