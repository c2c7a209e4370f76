//! Game state representation.
//!
//! A snapshot of the board as the engine sees it: terrain, occupancy,
//! ownership, and rank visibility for every cell, plus whose turn the
//! snapshot concerns and the last move played.

use super::combat::{Battle, CombatRules};
use super::piece::{Piece, Rank, Side};
use super::point::{Point, CELL_COUNT};

/// Columns holding the two central lakes.
pub const LAKE_COLUMNS: [i8; 4] = [2, 3, 6, 7];

/// Rows holding the two central lakes.
pub const LAKE_ROWS: [i8; 2] = [4, 5];

/// A piece as seen on the board. `rank` is `None` while it is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub owner: Side,
    pub rank: Option<Rank>,
}

/// One board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub water: bool,
    pub occupant: Option<Occupant>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        water: false,
        occupant: None,
    };

    pub const WATER: Cell = Cell {
        water: true,
        occupant: None,
    };

    pub fn is_water(&self) -> bool {
        self.water
    }

    /// True for a land cell with no piece on it.
    pub fn is_empty(&self) -> bool {
        !self.water && self.occupant.is_none()
    }

    pub fn owner(&self) -> Option<Side> {
        self.occupant.map(|o| o.owner)
    }

    pub fn rank(&self) -> Option<Rank> {
        self.occupant.and_then(|o| o.rank)
    }

    pub fn is_rank_known(&self) -> bool {
        self.rank().is_some()
    }

    /// True if the piece here is known and an attack by `attacker` removes it.
    pub fn can_be_defeated_by(&self, attacker: Rank, rules: &impl CombatRules) -> bool {
        self.rank().is_some_and(|defender| {
            matches!(rules.outcome(attacker, defender), Battle::Win | Battle::Tie)
        })
    }

    /// True if the piece here is known and an attack by `attacker` removes the attacker.
    pub fn will_cause_defeat_for(&self, attacker: Rank, rules: &impl CombatRules) -> bool {
        self.rank().is_some_and(|defender| {
            matches!(rules.outcome(attacker, defender), Battle::Lose | Battle::Tie)
        })
    }
}

/// The most recent move, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub from: Point,
    pub to: Point,
}

/// Complete board snapshot.
///
/// `active_side` is the side this snapshot concerns: when it is the engine's
/// own side the engine must move, otherwise the snapshot reports the
/// opponent's move that was just played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub cells: [Cell; CELL_COUNT],
    pub active_side: Side,
    pub last_move: Option<LastMove>,
}

impl GameState {
    /// Creates a classic board with both lakes and no pieces.
    pub fn empty(active_side: Side) -> Self {
        let mut cells = [Cell::EMPTY; CELL_COUNT];
        for &y in LAKE_ROWS.iter() {
            for &x in LAKE_COLUMNS.iter() {
                cells[Point::new(x, y).index()] = Cell::WATER;
            }
        }
        GameState {
            cells,
            active_side,
            last_move: None,
        }
    }

    /// Creates a board with no lakes and no pieces.
    pub fn open(active_side: Side) -> Self {
        GameState {
            cells: [Cell::EMPTY; CELL_COUNT],
            active_side,
            last_move: None,
        }
    }

    /// Returns the cell at `point`. Caller must ensure the point is in bounds.
    #[inline]
    pub fn cell(&self, point: Point) -> &Cell {
        &self.cells[point.index()]
    }

    /// Places a piece. Returns false if the cell is water or already occupied.
    pub fn place(&mut self, point: Point, owner: Side, rank: Option<Rank>) -> bool {
        let cell = &mut self.cells[point.index()];
        if !cell.is_empty() {
            return false;
        }
        cell.occupant = Some(Occupant { owner, rank });
        true
    }

    /// Places a whole army with ranks visible.
    pub fn place_army(&mut self, owner: Side, pieces: &[Piece]) -> bool {
        pieces
            .iter()
            .all(|p| self.place(p.position, owner, Some(p.rank)))
    }

    /// Removes whatever piece is at `point`.
    pub fn clear(&mut self, point: Point) {
        self.cells[point.index()].occupant = None;
    }

    /// Iterates over the positions and occupants of one side's pieces.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Point, Occupant)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, c)| match c.occupant {
            Some(o) if o.owner == side => Some((Point::from_index(i), o)),
            _ => None,
        })
    }
}
