//! Destination enumeration.
//!
//! Walks outward from a piece in each orthogonal direction. Ordinary pieces
//! take one step; long-range pieces keep going until something stops them.
//! Water, the board edge, and friendly pieces end a ray before the blocking
//! cell; an enemy piece ends it after that cell.

use crate::board::{GameState, Point, Rank, DIRECTIONS};

/// A reachable cell and the number of steps taken to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub to: Point,
    pub steps: u8,
}

/// Returns every cell the piece at `from` with the given rank may move to.
///
/// Returns an empty vec for empty cells and immobile ranks.
pub fn destinations(state: &GameState, from: Point, rank: Rank) -> Vec<Destination> {
    let owner = match state.cell(from).owner() {
        Some(o) => o,
        None => return Vec::new(),
    };
    if !rank.is_movable() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for dir in DIRECTIONS {
        let mut cur = from;
        let mut steps = 0u8;
        while let Some(next) = cur.offset(dir) {
            let cell = state.cell(next);
            if cell.is_water() || cell.owner() == Some(owner) {
                break;
            }
            steps += 1;
            out.push(Destination { to: next, steps });
            if !cell.is_empty() || !rank.is_long_range() {
                break;
            }
            cur = next;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn ordinary_piece_steps_once_per_direction() {
        let mut state = GameState::open(Side::First);
        state.place(Point::new(4, 7), Side::First, Some(Rank::Captain));
        let dests = destinations(&state, Point::new(4, 7), Rank::Captain);
        assert_eq!(dests.len(), 4);
        assert!(dests.iter().all(|d| d.steps == 1));
    }

    #[test]
    fn corner_piece_has_two_moves() {
        let mut state = GameState::open(Side::First);
        state.place(Point::new(0, 9), Side::First, Some(Rank::Marshal));
        let dests = destinations(&state, Point::new(0, 9), Rank::Marshal);
        let targets: Vec<Point> = dests.iter().map(|d| d.to).collect();
        assert_eq!(targets, vec![Point::new(0, 8), Point::new(1, 9)]);
    }

    #[test]
    fn immobile_pieces_do_not_move() {
        let mut state = GameState::open(Side::First);
        state.place(Point::new(4, 7), Side::First, Some(Rank::Bomb));
        state.place(Point::new(5, 7), Side::First, Some(Rank::Flag));
        assert!(destinations(&state, Point::new(4, 7), Rank::Bomb).is_empty());
        assert!(destinations(&state, Point::new(5, 7), Rank::Flag).is_empty());
    }

    #[test]
    fn empty_cell_has_no_destinations() {
        let state = GameState::open(Side::First);
        assert!(destinations(&state, Point::new(4, 7), Rank::Scout).is_empty());
    }

    #[test]
    fn friendly_pieces_and_water_block() {
        let mut state = GameState::empty(Side::First);
        state.place(Point::new(2, 6), Side::First, Some(Rank::Major));
        state.place(Point::new(1, 6), Side::First, Some(Rank::Bomb));
        state.place(Point::new(3, 6), Side::First, Some(Rank::Bomb));
        state.place(Point::new(2, 7), Side::First, Some(Rank::Bomb));
        // (2, 5) is water.
        assert!(destinations(&state, Point::new(2, 6), Rank::Major).is_empty());
    }

    #[test]
    fn scout_ray_stops_on_enemy() {
        let mut state = GameState::open(Side::First);
        state.place(Point::new(0, 9), Side::First, Some(Rank::Scout));
        state.place(Point::new(0, 4), Side::Second, None);
        state.place(Point::new(1, 9), Side::First, Some(Rank::Bomb));
        let dests = destinations(&state, Point::new(0, 9), Rank::Scout);
        let steps: Vec<u8> = dests.iter().map(|d| d.steps).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        assert_eq!(dests.last().unwrap().to, Point::new(0, 4));
    }

    #[test]
    fn scout_ray_stops_before_water() {
        let mut state = GameState::empty(Side::First);
        state.place(Point::new(2, 9), Side::First, Some(Rank::Scout));
        state.place(Point::new(1, 9), Side::First, Some(Rank::Bomb));
        state.place(Point::new(3, 9), Side::First, Some(Rank::Bomb));
        let dests = destinations(&state, Point::new(2, 9), Rank::Scout);
        let targets: Vec<Point> = dests.iter().map(|d| d.to).collect();
        assert_eq!(
            targets,
            vec![Point::new(2, 8), Point::new(2, 7), Point::new(2, 6)]
        );
    }

    #[test]
    fn scout_on_open_lane_reaches_the_far_edge() {
        let mut state = GameState::open(Side::First);
        state.place(Point::new(0, 0), Side::First, Some(Rank::Scout));
        let dests = destinations(&state, Point::new(0, 0), Rank::Scout);
        let south: Vec<&Destination> = dests.iter().filter(|d| d.to.x == 0).collect();
        assert_eq!(south.len(), 9);
        for (i, d) in south.iter().enumerate() {
            assert_eq!(d.steps as usize, i + 1);
            assert_eq!(d.to, Point::new(0, i as i8 + 1));
        }
    }
}
