//! The four cardinal directions.

use crate::error::GridError;
use crate::point::Point;

/// A cardinal direction on a grid.
///
/// `Up` decreases the row (`x`), `Left` decreases the column (`y`).
///
/// # Examples
///
/// ```
/// use gridwork_core::{Direction, Point};
///
/// let d = Direction::try_from('^').unwrap();
/// assert_eq!(d, Direction::Up);
/// assert_eq!(Point::new(2, 2).step(d.turn_right()), Some(Point::new(2, 3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All four directions in neighbour-probe order: up, down, left, right.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of a single step in this direction.
    pub const fn offset(self) -> Point {
        match self {
            Self::Up => Point::new(-1, 0),
            Self::Down => Point::new(1, 0),
            Self::Left => Point::new(0, -1),
            Self::Right => Point::new(0, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub const fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Rotate 90 degrees counter-clockwise.
    pub const fn turn_left(self) -> Self {
        self.turn_right().opposite()
    }
}

impl TryFrom<char> for Direction {
    type Error = GridError;

    /// Parse `U`/`D`/`L`/`R` (either case) or the arrows `^`/`v`/`<`/`>`.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' | 'u' | '^' => Ok(Self::Up),
            'D' | 'd' | 'v' | 'V' => Ok(Self::Down),
            'L' | 'l' | '<' => Ok(Self::Left),
            'R' | 'r' | '>' => Ok(Self::Right),
            other => Err(GridError::InvalidDirection { found: other }),
        }
    }
}
