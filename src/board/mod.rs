//! Board representation and game-state types.
//!
//! Contains coordinates, sides and ranks, combat rules, and the board
//! snapshot the host hands to the engine each turn.

pub mod combat;
pub mod piece;
pub mod point;
pub mod state;

pub use combat::{Battle, ClassicRules, CombatRules};
pub use piece::{Piece, Rank, Side, ALL_RANKS, ARMY, ARMY_SIZE, RANK_COUNT};
pub use point::{Point, CELL_COUNT, DIRECTIONS, GRID_SIZE};
pub use state::{Cell, GameState, LastMove, Occupant, LAKE_COLUMNS, LAKE_ROWS};
