//! Fixed starting formations.
//!
//! A formation is written as four rows of rank characters, front row first,
//! for an army on `Side::First` (front row y=6, back row y=9). Spaces inside
//! a row are ignored. Every formation must contain exactly the classic army.

use serde::Deserialize;

use super::ConfigError;
use crate::board::{Piece, Point, Rank, ARMY, GRID_SIZE, RANK_COUNT};

/// Number of rows in a starting formation.
const FORMATION_ROWS: usize = 4;

/// A complete starting placement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FormationRows")]
pub struct Formation {
    pub name: String,
    pub pieces: Vec<Piece>,
}

/// JSON shape of a formation.
#[derive(Debug, Clone, Deserialize)]
struct FormationRows {
    name: String,
    rows: Vec<String>,
}

impl TryFrom<FormationRows> for Formation {
    type Error = ConfigError;

    fn try_from(raw: FormationRows) -> Result<Self, Self::Error> {
        let rows: Vec<&str> = raw.rows.iter().map(String::as_str).collect();
        Formation::from_rows(&raw.name, &rows)
    }
}

impl Formation {
    /// Parses a formation from its rows, front row first.
    pub fn from_rows(name: &str, rows: &[&str]) -> Result<Formation, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidFormation {
            name: name.to_string(),
            reason,
        };

        if rows.len() != FORMATION_ROWS {
            return Err(invalid(format!(
                "expected {} rows, got {}",
                FORMATION_ROWS,
                rows.len()
            )));
        }

        let mut pieces = Vec::with_capacity(FORMATION_ROWS * GRID_SIZE as usize);
        let mut counts = [0u8; RANK_COUNT];
        for (i, row) in rows.iter().enumerate() {
            let y = GRID_SIZE - FORMATION_ROWS as i8 + i as i8;
            let chars: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != GRID_SIZE as usize {
                return Err(invalid(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    chars.len(),
                    GRID_SIZE
                )));
            }
            for (x, c) in chars.into_iter().enumerate() {
                let rank = Rank::from_notation_char(c)
                    .ok_or_else(|| invalid(format!("unknown rank character '{}'", c)))?;
                counts[rank as usize] += 1;
                pieces.push(Piece::new(rank, Point::new(x as i8, y)));
            }
        }

        if counts != ARMY {
            return Err(invalid(format!(
                "rank counts {:?} do not match the army {:?}",
                counts, ARMY
            )));
        }

        Ok(Formation {
            name: name.to_string(),
            pieces,
        })
    }

    pub fn transposed(&self) -> Formation {
        Formation {
            name: self.name.clone(),
            pieces: self.pieces.iter().map(|p| p.transpose()).collect(),
        }
    }
}

/// Built-in formations, front row first.
const BUILTIN_FORMATIONS: [(&str, [&str; FORMATION_ROWS]); 3] = [
    (
        "shoreline",
        [
            "2 2 7 2 5 2 9 2 8 2",
            "6 3 B 4 M 6 2 4 S 7",
            "5 B 4 6 3 8 5 B 2 7",
            "3 B F B 4 5 6 3 B 3",
        ],
    ),
    (
        "shoreline-mirrored",
        [
            "2 8 2 9 2 5 2 7 2 2",
            "7 S 4 2 6 M 4 B 3 6",
            "7 2 B 5 8 3 6 4 B 5",
            "3 B 3 6 5 4 B F B 3",
        ],
    ),
    (
        "left-bunker",
        [
            "2 8 2 6 2 2 7 2 9 2",
            "3 2 5 M 4 4 S 2 6 5",
            "7 B 3 6 5 8 7 4 B 3",
            "B F B 3 B 6 4 B 5 3",
        ],
    ),
];

/// Parses the built-in formation library.
pub fn default_formations() -> Vec<Formation> {
    BUILTIN_FORMATIONS
        .iter()
        .filter_map(|(name, rows)| match Formation::from_rows(name, rows) {
            Ok(f) => Some(f),
            Err(e) => {
                log::error!("skipping built-in formation: {}", e);
                None
            }
        })
        .collect()
}
