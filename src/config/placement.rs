//! Probability tables for procedural placement and flag inference.

use serde::Deserialize;

use crate::board::{Point, Rank, GRID_SIZE};

/// A cell with a relative sampling weight.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeightedCell {
    pub point: Point,
    pub weight: f64,
}

/// Where pieces of one rank may be placed, and how many of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankPlacement {
    pub rank: Rank,
    pub count: u8,
    pub cells: Vec<WeightedCell>,
}

impl RankPlacement {
    pub fn transposed(&self) -> RankPlacement {
        RankPlacement {
            rank: self.rank,
            count: self.count,
            cells: self
                .cells
                .iter()
                .map(|c| WeightedCell {
                    point: c.point.transpose(),
                    weight: c.weight,
                })
                .collect(),
        }
    }
}

/// Prior probability that the opponent's flag starts on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FlagProbability {
    pub point: Point,
    pub probability: f64,
}

/// Builds a table over rows `rows` of the First side's home zone.
fn rows_table(
    rank: Rank,
    rows: std::ops::RangeInclusive<i8>,
    weight: impl Fn(Point) -> f64,
) -> RankPlacement {
    let cells = rows
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
        .map(|point| WeightedCell {
            point,
            weight: weight(point),
        })
        .collect();
    RankPlacement {
        rank,
        count: rank.army_count(),
        cells,
    }
}

/// The built-in procedural placement, most constrained ranks first so the
/// flexible ones fill whatever remains.
pub fn default_placement() -> Vec<RankPlacement> {
    let corner = |p: Point| if p.x == 0 || p.x == GRID_SIZE - 1 { 3.0 } else { 1.0 };
    let front = |p: Point| if p.y <= 7 { 2.0 } else { 1.0 };
    let even = |_: Point| 1.0;

    vec![
        rows_table(Rank::Flag, 9..=9, corner),
        rows_table(Rank::Bomb, 8..=9, even),
        rows_table(Rank::Scout, 6..=7, even),
        rows_table(Rank::Miner, 7..=9, even),
        rows_table(Rank::Spy, 7..=8, even),
        rows_table(Rank::Marshal, 6..=9, front),
        rows_table(Rank::General, 6..=9, front),
        rows_table(Rank::Colonel, 6..=9, even),
        rows_table(Rank::Major, 6..=9, even),
        rows_table(Rank::Captain, 6..=9, even),
        rows_table(Rank::Lieutenant, 6..=9, even),
        rows_table(Rank::Sergeant, 6..=9, even),
    ]
}

/// The built-in flag prior over the opponent's rows, back row most likely.
pub fn default_flag_probabilities() -> Vec<FlagProbability> {
    let mut out = Vec::new();
    for (y, probability) in [(0i8, 0.06), (1, 0.03), (2, 0.01)] {
        for x in 0..GRID_SIZE {
            out.push(FlagProbability {
                point: Point::new(x, y),
                probability,
            });
        }
    }
    out
}
