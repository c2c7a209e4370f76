//! Grid coordinates.
//!
//! The board is a fixed 10x10 grid. `Point` is a plain value type used as a
//! set key throughout the belief state, so equality and hashing are by value.

use std::ops::Add;

use serde::Deserialize;

/// Width and height of the board.
pub const GRID_SIZE: i8 = 10;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// The four orthogonal step directions: north, east, south, west.
pub const DIRECTIONS: [Point; 4] = [
    Point { x: 0, y: -1 },
    Point { x: 1, y: 0 },
    Point { x: 0, y: 1 },
    Point { x: -1, y: 0 },
];

/// A coordinate on the board. `y = 0` is Second's back row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Point { x, y }
    }

    /// Returns true if the point lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }

    /// Rotates the point 180 degrees around the board centre.
    pub const fn transpose(self) -> Point {
        Point {
            x: GRID_SIZE - 1 - self.x,
            y: GRID_SIZE - 1 - self.y,
        }
    }

    pub fn manhattan(self, other: Point) -> i32 {
        (self.x as i32 - other.x as i32).abs() + (self.y as i32 - other.y as i32).abs()
    }

    /// Steps by `delta`, returning `None` if the result leaves the board.
    pub fn offset(self, delta: Point) -> Option<Point> {
        let next = self + delta;
        next.in_bounds().then_some(next)
    }

    /// Row-major index into a `CELL_COUNT` array. Caller must ensure `in_bounds`.
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * GRID_SIZE as usize + self.x as usize
    }

    /// Inverse of [`Point::index`].
    #[inline]
    pub fn from_index(idx: usize) -> Point {
        Point {
            x: (idx % GRID_SIZE as usize) as i8,
            y: (idx / GRID_SIZE as usize) as i8,
        }
    }

    /// Iterates over every point on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..CELL_COUNT).map(Point::from_index)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_rotates_corners() {
        assert_eq!(Point::new(0, 0).transpose(), Point::new(9, 9));
        assert_eq!(Point::new(2, 7).transpose(), Point::new(7, 2));
    }

    #[test]
    fn transpose_is_an_involution() {
        for p in Point::all() {
            assert_eq!(p.transpose().transpose(), p);
        }
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(0, 0).manhattan(Point::new(3, 4)), 7);
        assert_eq!(Point::new(5, 5).manhattan(Point::new(5, 5)), 0);
        assert_eq!(Point::new(9, 0).manhattan(Point::new(0, 9)), 18);
    }

    #[test]
    fn offset_rejects_off_grid() {
        assert_eq!(Point::new(0, 0).offset(DIRECTIONS[0]), None);
        assert_eq!(Point::new(0, 0).offset(DIRECTIONS[3]), None);
        assert_eq!(Point::new(0, 0).offset(DIRECTIONS[1]), Some(Point::new(1, 0)));
        assert_eq!(Point::new(9, 9).offset(DIRECTIONS[2]), None);
    }

    #[test]
    fn index_roundtrip() {
        for idx in 0..CELL_COUNT {
            assert_eq!(Point::from_index(idx).index(), idx);
        }
        assert_eq!(Point::new(3, 2).index(), 23);
    }
}
