//! Integer 2D points.

use crate::direction::Direction;
use std::fmt;
use std::ops::{Add, Sub};

/// An ordered pair of integers.
///
/// Used both as a grid index and as a polygon vertex. As a grid index,
/// `x` selects the row and `y` the column, so `(0, 0)` is the top-left
/// cell and `x` grows downwards.
///
/// Coordinates are `i64` so that polygon vertices with large magnitudes
/// and neighbour probes at `-1` are both representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index (grid) or first coordinate (geometry).
    pub x: i64,
    /// Column index (grid) or second coordinate (geometry).
    pub y: i64,
}

impl Point {
    /// Create a point from its two coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, or `None` if either coordinate overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// The neighbouring point one step in `direction`, or `None` if that
    /// neighbour is not representable.
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.checked_add(direction.offset())
    }

    /// L1 distance between two points.
    pub fn manhattan(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn step_moves_one_cell() {
        let p = Point::new(3, 3);
        assert_eq!(p.step(Direction::Up), Some(Point::new(2, 3)));
        assert_eq!(p.step(Direction::Down), Some(Point::new(4, 3)));
        assert_eq!(p.step(Direction::Left), Some(Point::new(3, 2)));
        assert_eq!(p.step(Direction::Right), Some(Point::new(3, 4)));
    }

    #[test]
    fn step_past_extreme_coordinates_is_none() {
        assert_eq!(Point::new(i64::MAX, 0).step(Direction::Down), None);
        assert_eq!(Point::new(0, i64::MIN).step(Direction::Left), None);
        assert_eq!(
            Point::new(i64::MAX, 0).step(Direction::Up),
            Some(Point::new(i64::MAX - 1, 0))
        );
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(Point::new(i64::MAX, 1).checked_add(Point::new(1, 0)), None);
        assert_eq!(
            Point::new(2, 3).checked_add(Point::new(-1, 4)),
            Some(Point::new(1, 7))
        );
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Point::from((7, -2)), Point::new(7, -2));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric(
            ax in -1000i64..1000, ay in -1000i64..1000,
            bx in -1000i64..1000, by in -1000i64..1000,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert_eq!(a.manhattan(a), 0);
        }

        #[test]
        fn add_sub_inverse(
            ax in -1000i64..1000, ay in -1000i64..1000,
            bx in -1000i64..1000, by in -1000i64..1000,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!((a + b) - b, a);
        }
    }
}
