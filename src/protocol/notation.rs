//! Board notation encoding and decoding.
//!
//! A position is written as three space-separated fields:
//!
//! `<board> <active side> <last move>`
//!
//! The board is ten rows, y=0 first, joined by `/`. Each cell takes two
//! characters: the owner (`1`, `2`, `.` for empty, `~` for water) followed
//! by the rank character, `?` for a hidden rank, or `.` when there is no
//! piece. The active side is `first` or `second`. The last move is
//! `x,y-x,y`, or `-` when there is none.

use crate::board::{
    Cell, GameState, LastMove, Occupant, Piece, Point, Rank, Side, CELL_COUNT, GRID_SIZE,
};
use crate::movegen::Move;

/// Errors that can occur while parsing notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 3 fields '<board> <side> <last move>', got {0}")]
    WrongFieldCount(usize),

    #[error("expected {expected} rows, got {found}")]
    WrongRowCount { expected: usize, found: usize },

    #[error("row {row} has {found} characters, expected {expected}")]
    WrongRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell '{0}'")]
    InvalidCell(String),

    #[error("invalid side '{0}'")]
    InvalidSide(String),

    #[error("invalid point '{0}'")]
    InvalidPoint(String),

    #[error("invalid move '{0}'")]
    InvalidMove(String),
}

const ROW_WIDTH: usize = 2 * GRID_SIZE as usize;

/// Parses a two-character cell.
fn parse_cell(owner: char, rank: char) -> Result<Cell, NotationError> {
    let invalid = || NotationError::InvalidCell(format!("{}{}", owner, rank));
    match owner {
        '.' if rank == '.' => Ok(Cell::EMPTY),
        '~' if rank == '.' => Ok(Cell::WATER),
        _ => {
            let owner = Side::from_notation_char(owner).ok_or_else(invalid)?;
            let rank = match rank {
                '?' => None,
                c => Some(Rank::from_notation_char(c).ok_or_else(invalid)?),
            };
            Ok(Cell {
                water: false,
                occupant: Some(Occupant { owner, rank }),
            })
        }
    }
}

fn encode_cell(cell: &Cell) -> [char; 2] {
    match cell.occupant {
        _ if cell.water => ['~', '.'],
        None => ['.', '.'],
        Some(o) => [
            o.owner.notation_char(),
            o.rank.map_or('?', Rank::notation_char),
        ],
    }
}

/// Parses `x,y`.
pub fn parse_point(s: &str) -> Result<Point, NotationError> {
    let invalid = || NotationError::InvalidPoint(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let point = Point::new(
        x.trim().parse().map_err(|_| invalid())?,
        y.trim().parse().map_err(|_| invalid())?,
    );
    if !point.in_bounds() {
        return Err(invalid());
    }
    Ok(point)
}

/// Parses `x,y-x,y`, or `-` for no move.
pub fn parse_last_move(s: &str) -> Result<Option<LastMove>, NotationError> {
    if s == "-" {
        return Ok(None);
    }
    let (from, to) = s
        .split_once('-')
        .ok_or_else(|| NotationError::InvalidMove(s.to_string()))?;
    Ok(Some(LastMove {
        from: parse_point(from)?,
        to: parse_point(to)?,
    }))
}

/// Parses the board field into cells.
pub fn parse_board(s: &str) -> Result<[Cell; CELL_COUNT], NotationError> {
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != GRID_SIZE as usize {
        return Err(NotationError::WrongRowCount {
            expected: GRID_SIZE as usize,
            found: rows.len(),
        });
    }

    let mut cells = [Cell::EMPTY; CELL_COUNT];
    for (y, row) in rows.iter().enumerate() {
        let chars: Vec<char> = row.chars().collect();
        if chars.len() != ROW_WIDTH {
            return Err(NotationError::WrongRowLength {
                row: y,
                expected: ROW_WIDTH,
                found: chars.len(),
            });
        }
        for (x, pair) in chars.chunks(2).enumerate() {
            cells[y * GRID_SIZE as usize + x] = parse_cell(pair[0], pair[1])?;
        }
    }
    Ok(cells)
}

/// Parses a full position.
pub fn parse_state(s: &str) -> Result<GameState, NotationError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(NotationError::WrongFieldCount(fields.len()));
    }
    let cells = parse_board(fields[0])?;
    let active_side = Side::from_name(fields[1])
        .ok_or_else(|| NotationError::InvalidSide(fields[1].to_string()))?;
    let last_move = parse_last_move(fields[2])?;
    Ok(GameState {
        cells,
        active_side,
        last_move,
    })
}

/// Encodes a full position.
pub fn encode_state(state: &GameState) -> String {
    let board = state
        .cells
        .chunks(GRID_SIZE as usize)
        .map(|row| row.iter().flat_map(encode_cell).collect::<String>())
        .collect::<Vec<_>>()
        .join("/");
    let last = match state.last_move {
        Some(m) => format!("{}-{}", m.from, m.to),
        None => "-".to_string(),
    };
    format!("{} {} {}", board, state.active_side.name(), last)
}

/// Formats a placement as space-separated `R@x,y` entries.
pub fn format_placement(pieces: &[Piece]) -> String {
    pieces
        .iter()
        .map(|p| format!("{}@{}", p.rank.notation_char(), p.position))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a move as `x,y-x,y`.
pub fn format_move(mv: &Move) -> String {
    format!("{}-{}", mv.from, mv.to)
}
