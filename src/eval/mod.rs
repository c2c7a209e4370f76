//! Move evaluation.
//!
//! Scores candidate moves from the mover's perspective using weighted
//! features, rank boosts, and a flag-distance heuristic.

pub mod distance;
pub mod scorer;

pub use distance::distance_to_nearest_flag_candidate;
pub use scorer::{base_score, boosted_score, score, Feature, FEATURE_RULES};
