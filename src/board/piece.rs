//! Sides, ranks, and pieces.
//!
//! Ranks are a closed enum; a piece is a rank at a position. The classic
//! 40-piece army composition lives here as well since both the setup
//! generator and formation validation count against it.

use serde::Deserialize;

use super::point::{Point, GRID_SIZE};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Starts on rows 6-9 and advances toward row 0.
    First,
    /// Starts on rows 0-3 and advances toward row 9.
    Second,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Returns the single-character notation for this side.
    pub const fn notation_char(self) -> char {
        match self {
            Side::First => '1',
            Side::Second => '2',
        }
    }

    /// Parses a side from its single-character notation.
    pub fn from_notation_char(c: char) -> Option<Side> {
        match c {
            '1' => Some(Side::First),
            '2' => Some(Side::Second),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::First => "first",
            Side::Second => "second",
        }
    }

    pub fn from_name(s: &str) -> Option<Side> {
        match s {
            "first" => Some(Side::First),
            "second" => Some(Side::Second),
            _ => None,
        }
    }

    /// The y-delta of a single forward step.
    pub const fn forward(self) -> i8 {
        match self {
            Side::First => -1,
            Side::Second => 1,
        }
    }

    /// Returns true if `row` is one of this side's four starting rows.
    pub const fn is_home_row(self, row: i8) -> bool {
        match self {
            Side::First => row >= GRID_SIZE - 4 && row < GRID_SIZE,
            Side::Second => row >= 0 && row < 4,
        }
    }

    /// Every coordinate in this side's starting rows.
    pub fn home_points(self) -> impl Iterator<Item = Point> {
        Point::all().filter(move |p| self.is_home_row(p.y))
    }

    /// Returns true if the point lies in this side's half of the board.
    pub const fn owns_half(self, point: Point) -> bool {
        match self {
            Side::First => point.y >= GRID_SIZE / 2,
            Side::Second => point.y < GRID_SIZE / 2,
        }
    }

    /// Number of forward rows gained by moving from `from` to `to`.
    pub fn advance(self, from: Point, to: Point) -> i32 {
        (to.y as i32 - from.y as i32) * self.forward() as i32
    }
}

/// A piece rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rank {
    Flag = 0,
    Bomb = 1,
    Spy = 2,
    Scout = 3,
    Miner = 4,
    Sergeant = 5,
    Lieutenant = 6,
    Captain = 7,
    Major = 8,
    Colonel = 9,
    General = 10,
    Marshal = 11,
}

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 12;

pub const ALL_RANKS: [Rank; RANK_COUNT] = [
    Rank::Flag,
    Rank::Bomb,
    Rank::Spy,
    Rank::Scout,
    Rank::Miner,
    Rank::Sergeant,
    Rank::Lieutenant,
    Rank::Captain,
    Rank::Major,
    Rank::Colonel,
    Rank::General,
    Rank::Marshal,
];

/// Pieces per rank in the classic 40-piece army, indexed by `Rank as usize`.
pub const ARMY: [u8; RANK_COUNT] = [1, 6, 1, 8, 5, 4, 4, 4, 3, 2, 1, 1];

/// Total number of pieces in one army.
pub const ARMY_SIZE: usize = 40;

impl Rank {
    /// Flags and bombs never move.
    pub const fn is_movable(self) -> bool {
        !matches!(self, Rank::Flag | Rank::Bomb)
    }

    /// Scouts may travel any number of empty cells in a straight line.
    pub const fn is_long_range(self) -> bool {
        matches!(self, Rank::Scout)
    }

    /// Combat strength for ordinary engagements. Immobile ranks have none.
    pub const fn strength(self) -> u8 {
        match self {
            Rank::Flag | Rank::Bomb => 0,
            Rank::Spy => 1,
            Rank::Scout => 2,
            Rank::Miner => 3,
            Rank::Sergeant => 4,
            Rank::Lieutenant => 5,
            Rank::Captain => 6,
            Rank::Major => 7,
            Rank::Colonel => 8,
            Rank::General => 9,
            Rank::Marshal => 10,
        }
    }

    /// Returns the single-character notation for this rank.
    pub const fn notation_char(self) -> char {
        match self {
            Rank::Flag => 'F',
            Rank::Bomb => 'B',
            Rank::Spy => 'S',
            Rank::Scout => '2',
            Rank::Miner => '3',
            Rank::Sergeant => '4',
            Rank::Lieutenant => '5',
            Rank::Captain => '6',
            Rank::Major => '7',
            Rank::Colonel => '8',
            Rank::General => '9',
            Rank::Marshal => 'M',
        }
    }

    /// Parses a rank from its single-character notation.
    pub fn from_notation_char(c: char) -> Option<Rank> {
        ALL_RANKS.iter().copied().find(|r| r.notation_char() == c)
    }

    /// Number of pieces of this rank in the classic army.
    pub const fn army_count(self) -> u8 {
        ARMY[self as usize]
    }
}

/// A placed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Piece {
    pub rank: Rank,
    pub position: Point,
}

impl Piece {
    pub const fn new(rank: Rank, position: Point) -> Self {
        Piece { rank, position }
    }

    pub fn transpose(self) -> Piece {
        Piece {
            rank: self.rank,
            position: self.position.transpose(),
        }
    }
}
