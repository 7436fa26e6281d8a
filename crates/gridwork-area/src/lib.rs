//! Filled-area queries over rectilinear polygons.
//!
//! [`AreaEngine`] takes the closed vertex path of a rectilinear polygon
//! and answers "how much of this axis-aligned rectangle lies on or inside
//! the polygon?" in O(1) per query, however large the coordinates are.
//!
//! # Pipeline
//!
//! 1. [`CompressedAxis`]: each axis is reduced to the sorted distinct
//!    breakpoints `{v, v + 1}` of the vertex coordinates, so memory scales
//!    with the vertex count rather than the coordinate magnitude.
//! 2. [`OccupancyGrid`]: one cell per compressed interval pair. Polygon
//!    edges mark boundary cells; a border-seeded flood fill
//!    ([`gridwork_space::flood`]) separates exterior from interior.
//! 3. [`PrefixSumTable`]: 2D cumulative sums of filled physical area,
//!    queried by inclusion-exclusion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod engine;
pub mod error;
pub mod occupancy;
pub mod prefix;
pub mod search;

pub use axis::CompressedAxis;
pub use engine::{AreaEngine, AreaEngineBuilder};
pub use error::AreaError;
pub use occupancy::{CellState, OccupancyGrid};
pub use prefix::PrefixSumTable;
pub use search::FilledRectangle;
