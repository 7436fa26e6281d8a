//! Error types for area engine construction.

use gridwork_core::{GridError, Point};
use std::error::Error;
use std::fmt;

/// Errors arising while building an [`AreaEngine`](crate::AreaEngine).
///
/// Queries never fail; only construction validates its input. A failed
/// build produces no engine, so there is no partially built state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AreaError {
    /// Fewer than three vertices were supplied.
    DegeneratePath {
        /// Number of vertices received.
        vertices: usize,
    },
    /// Two consecutive vertices are not joined by an axis-aligned segment.
    NonRectilinear {
        /// Start of the offending edge.
        from: Point,
        /// End of the offending edge.
        to: Point,
    },
    /// A vertex coordinate is `i64::MAX`, whose unit cell `[v, v + 1)`
    /// has no representable end.
    CoordinateOutOfRange {
        /// The offending vertex.
        vertex: Point,
    },
    /// The filled physical area does not fit in a `u64`.
    AreaOverflow,
    /// The compressed occupancy grid could not be allocated.
    Grid(GridError),
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegeneratePath { vertices } => {
                write!(f, "polygon path needs at least 3 vertices, got {vertices}")
            }
            Self::NonRectilinear { from, to } => {
                write!(f, "edge {from} -> {to} is not axis-aligned")
            }
            Self::CoordinateOutOfRange { vertex } => {
                write!(f, "vertex {vertex} has a coordinate at i64::MAX")
            }
            Self::AreaOverflow => write!(f, "filled area exceeds u64::MAX"),
            Self::Grid(err) => write!(f, "occupancy grid: {err}"),
        }
    }
}

impl Error for AreaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for AreaError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
