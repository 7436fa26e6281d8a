//! Error types for grid construction and point access.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, mutation, or direction parsing.
///
/// Read-style queries (`get`, neighbour probing) never produce these:
/// an out-of-bounds read is a normal query and yields `None` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input matrix is empty, has zero-width rows, or is ragged.
    InvalidShape {
        /// What was wrong with the matrix.
        reason: String,
    },
    /// A point lies outside the grid.
    OutOfRange {
        /// The offending point.
        point: Point,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A direction token is not one of the four cardinal directions.
    InvalidDirection {
        /// The unrecognised token.
        found: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { reason } => write!(f, "invalid grid shape: {reason}"),
            Self::OutOfRange { point, bounds } => {
                write!(f, "point {point} out of range: {bounds}")
            }
            Self::InvalidDirection { found } => {
                write!(f, "invalid direction {found:?}: expected one of U D L R ^ v < >")
            }
        }
    }
}

impl Error for GridError {}
