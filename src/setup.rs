//! Initial placement generation.
//!
//! With the configured probability a fixed formation is drawn uniformly from
//! the library. Otherwise each piece in the placement tables is dropped on a
//! weighted-random cell, redrawing while the cell is taken. The redraw loop is
//! capped so an unsatisfiable table fails instead of spinning.

use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::board::{Piece, Point};
use crate::config::{ConfigError, RankPlacement, StrategyConfig};
use crate::error::EngineError;

/// Produces a complete starting placement from an already oriented config.
pub fn generate_placement(
    config: &StrategyConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Piece>, EngineError> {
    if !config.formations.is_empty() && rng.gen_bool(config.formation_probability) {
        let idx = rng.gen_range(0..config.formations.len());
        let formation = &config.formations[idx];
        log::info!("using fixed formation '{}'", formation.name);
        return Ok(formation.pieces.clone());
    }
    log::info!("sampling a procedural placement");
    sample_placement(&config.placement, config.placement_attempts, rng)
}

/// Places every piece of every table entry on a distinct cell.
pub fn sample_placement(
    tables: &[RankPlacement],
    attempts: u32,
    rng: &mut impl Rng,
) -> Result<Vec<Piece>, EngineError> {
    let mut occupied: HashSet<Point> = HashSet::new();
    let mut pieces = Vec::new();

    for entry in tables {
        let dist = WeightedIndex::new(entry.cells.iter().map(|c| c.weight))
            .map_err(|_| EngineError::InvalidConfig(ConfigError::EmptyPlacement(entry.rank)))?;

        for _ in 0..entry.count {
            let point = (0..attempts)
                .map(|_| entry.cells[dist.sample(rng)].point)
                .find(|p| !occupied.contains(p))
                .ok_or(EngineError::PlacementExhausted {
                    rank: entry.rank,
                    attempts,
                })?;
            occupied.insert(point);
            pieces.push(Piece::new(entry.rank, point));
        }
    }

    Ok(pieces)
}
