//! Gridwork: bounded 2D grids and rectilinear polygon area queries.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Gridwork sub-crates. For most users, adding `gridwork` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridwork::prelude::*;
//!
//! // A walled courtyard with one sealed cell in the middle.
//! let mut grid = Grid::new(vec![
//!     "#####".chars().collect(),
//!     "#...#".chars().collect(),
//!     "#.#.#".chars().collect(),
//!     "#...#".chars().collect(),
//!     "##.##".chars().collect(),
//! ]).unwrap();
//!
//! // The open cells leak through the gap in the bottom wall.
//! assert_eq!(grid.fill_enclosed_regions(|&c| c == '.', 'o'), 0);
//! grid.set(Point::new(4, 2), '#').unwrap();
//! assert_eq!(grid.fill_enclosed_regions(|&c| c == '.', 'o'), 8);
//!
//! // A 5x5 square polygon, queried on a 3x3 window.
//! let engine = AreaEngine::builder()
//!     .vertices([
//!         Point::new(0, 0),
//!         Point::new(4, 0),
//!         Point::new(4, 4),
//!         Point::new(0, 4),
//!     ])
//!     .build()
//!     .unwrap();
//! assert_eq!(engine.query_filled_area(Point::new(1, 1), Point::new(3, 3)), 9);
//! assert_eq!(engine.total_filled_area(), 25);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwork-core` | `Point`, `Direction`, `GridError`, iterator helpers |
//! | [`space`] | `gridwork-space` | `Grid<T>`, regions, perimeters, boundary flood fill |
//! | [`area`] | `gridwork-area` | Compressed axes, occupancy, prefix sums, `AreaEngine` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and helpers (`gridwork-core`).
///
/// Contains [`types::Point`], [`types::Direction`], [`types::GridError`],
/// and the [`types::unique_pairs`] / [`types::group_while`] iterator helpers.
pub use gridwork_core as types;

/// Bounded 2D grids (`gridwork-space`).
///
/// Provides [`space::Grid`] and the mask-level flood fill in
/// [`space::flood`].
pub use gridwork_space as space;

/// Polygon area queries (`gridwork-area`).
///
/// [`area::AreaEngine`] is the entry point; the compressed axes,
/// occupancy grid and prefix-sum table it builds are exposed for
/// inspection.
pub use gridwork_area as area;

/// Common imports for typical Gridwork usage.
///
/// ```rust
/// use gridwork::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridwork_core::{group_while, unique_pairs, Direction, GridError, Point};

    // Grid
    pub use gridwork_space::Grid;

    // Area
    pub use gridwork_area::{AreaEngine, AreaError, FilledRectangle};
}
