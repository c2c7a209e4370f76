//! Strategy configuration.
//!
//! Everything tunable about the engine lives here: scoring weights, the
//! formation library, per-rank placement tables, and the prior over the
//! opponent's flag location. All coordinates are written for an engine
//! playing `Side::First`; `transposed` produces the equivalent data for
//! `Side::Second`.
//!
//! Configuration can be loaded from JSON. Missing fields fall back to the
//! built-in strategy.

pub mod formation;
pub mod placement;
pub mod weights;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::board::{Point, Rank, Side, ARMY, RANK_COUNT};

pub use formation::{default_formations, Formation};
pub use placement::{
    default_flag_probabilities, default_placement, FlagProbability, RankPlacement, WeightedCell,
};
pub use weights::{DistanceTuning, RankBoost, ScoringWeights};

/// Default cap on rejection-sampling draws per piece.
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse strategy JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("formation '{name}': {reason}")]
    InvalidFormation { name: String, reason: String },

    #[error("formation probability {0} must lie in 0..=1")]
    InvalidFormationProbability(f64),

    #[error("formation probability is positive but the formation library is empty")]
    EmptyFormationLibrary,

    #[error("placement table for {0:?} has no in-bounds cell with positive weight")]
    EmptyPlacement(Rank),

    #[error("placement table for {rank:?} names {point}, outside the home rows")]
    OutsideHomeRows { rank: Rank, point: Point },

    #[error("placement table for {0:?} appears more than once")]
    DuplicatePlacement(Rank),

    #[error("placement counts {counts:?} do not match the army {expected:?}")]
    IncompletePlacement { counts: Vec<u8>, expected: Vec<u8> },

    #[error("fuzz range {min}..{max} is inverted")]
    InvalidFuzzRange { min: f64, max: f64 },

    #[error("coordinate {0} lies outside the board")]
    OutOfBounds(Point),
}

/// The complete static strategy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Chance of using a fixed formation instead of procedural placement.
    pub formation_probability: f64,
    pub formations: Vec<Formation>,
    /// Per-rank cell tables for procedural placement, filled in order.
    pub placement: Vec<RankPlacement>,
    /// Rejection-sampling bound per piece.
    pub placement_attempts: u32,
    /// Prior probability of the opponent's flag per cell.
    pub flag_probabilities: Vec<FlagProbability>,
    pub weights: ScoringWeights,
    pub distance: DistanceTuning,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            formation_probability: 0.5,
            formations: default_formations(),
            placement: default_placement(),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            flag_probabilities: default_flag_probabilities(),
            weights: ScoringWeights::default(),
            distance: DistanceTuning::default(),
        }
    }
}

impl StrategyConfig {
    /// Rotates every coordinate in the configuration by 180 degrees.
    pub fn transposed(&self) -> StrategyConfig {
        StrategyConfig {
            formation_probability: self.formation_probability,
            formations: self.formations.iter().map(Formation::transposed).collect(),
            placement: self.placement.iter().map(RankPlacement::transposed).collect(),
            placement_attempts: self.placement_attempts,
            flag_probabilities: self
                .flag_probabilities
                .iter()
                .map(|f| FlagProbability {
                    point: f.point.transpose(),
                    probability: f.probability,
                })
                .collect(),
            weights: self.weights.clone(),
            distance: self.distance.transposed(),
        }
    }

    /// Looks up the configured flag prior for a cell.
    pub fn flag_probability(&self, point: Point) -> Option<f64> {
        self.flag_probabilities
            .iter()
            .find(|f| f.point == point)
            .map(|f| f.probability)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.formation_probability) {
            return Err(ConfigError::InvalidFormationProbability(
                self.formation_probability,
            ));
        }
        if self.formation_probability > 0.0 && self.formations.is_empty() {
            return Err(ConfigError::EmptyFormationLibrary);
        }
        let mut counts = [0u8; RANK_COUNT];
        let mut seen = [false; RANK_COUNT];
        for entry in &self.placement {
            if let Some(bad) = entry.cells.iter().find(|c| !c.point.in_bounds()) {
                return Err(ConfigError::OutOfBounds(bad.point));
            }
            if let Some(bad) = entry
                .cells
                .iter()
                .find(|c| !Side::First.is_home_row(c.point.y))
            {
                return Err(ConfigError::OutsideHomeRows {
                    rank: entry.rank,
                    point: bad.point,
                });
            }
            if !entry.cells.iter().any(|c| c.weight > 0.0) {
                return Err(ConfigError::EmptyPlacement(entry.rank));
            }
            if std::mem::replace(&mut seen[entry.rank as usize], true) {
                return Err(ConfigError::DuplicatePlacement(entry.rank));
            }
            counts[entry.rank as usize] = entry.count;
        }
        // Tables only matter when procedural placement can be drawn.
        if self.formation_probability < 1.0 && counts != ARMY {
            return Err(ConfigError::IncompletePlacement {
                counts: counts.to_vec(),
                expected: ARMY.to_vec(),
            });
        }
        if let Some(bad) = self.flag_probabilities.iter().find(|f| !f.point.in_bounds()) {
            return Err(ConfigError::OutOfBounds(bad.point));
        }
        let w = &self.weights;
        if w.fuzz_min_percent > w.fuzz_max_percent {
            return Err(ConfigError::InvalidFuzzRange {
                min: w.fuzz_min_percent,
                max: w.fuzz_max_percent,
            });
        }
        Ok(())
    }
}

/// Loads and validates a strategy from a JSON file at the given path.
pub fn load_config(path: &Path) -> Result<StrategyConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Loads and validates a strategy from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<StrategyConfig, ConfigError> {
    let config: StrategyConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
