//! Benchmark workloads for the Gridwork grid and area engines.
//!
//! Provides deterministic inputs for benchmarking:
//!
//! - [`maze_grid`]: a walls-and-floor character grid with scattered pockets
//! - [`staircase_polygon`]: a rectilinear staircase with large coordinates
//! - [`query_corners`]: pseudo-random rectangle corners around a polygon

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwork_core::{GridError, Point};
use gridwork_space::Grid;

/// Wall glyph used by [`maze_grid`].
pub const WALL: char = '#';

/// Floor glyph used by [`maze_grid`].
pub const FLOOR: char = '.';

fn mix(seed: u64, i: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407))
        .rotate_left(29)
}

/// Build a `rows x cols` maze of walls and floor.
///
/// Roughly one cell in three is a wall, so the floor forms many small
/// pockets and a few large leaking regions. The same seed always yields
/// the same grid. Fails only for a zero dimension.
pub fn maze_grid(rows: usize, cols: usize, seed: u64) -> Result<Grid<char>, GridError> {
    Grid::from_fn(rows, cols, |pt| {
        let i = pt.x as u64 * cols as u64 + pt.y as u64;
        if mix(seed, i) % 3 == 0 {
            WALL
        } else {
            FLOOR
        }
    })
}

/// A closed rectilinear staircase with `steps` treads, each `stride`
/// units wide and tall.
///
/// The path has `2 * steps + 2` vertices: the two legs along the axes
/// and one riser/tread pair per step.
pub fn staircase_polygon(steps: i64, stride: i64) -> Vec<Point> {
    let width = steps * stride;
    let mut path = vec![Point::new(0, 0), Point::new(width, 0)];
    for k in 1..=steps {
        path.push(Point::new((steps - k + 1) * stride, k * stride));
        path.push(Point::new((steps - k) * stride, k * stride));
    }
    path
}

/// `n` deterministic corner pairs, each coordinate within `[0, extent]`.
pub fn query_corners(n: usize, extent: i64, seed: u64) -> Vec<(Point, Point)> {
    let span = extent.unsigned_abs() + 1;
    let coord = |i: u64| (mix(seed, i) % span) as i64;
    (0..n as u64)
        .map(|i| {
            (
                Point::new(coord(4 * i), coord(4 * i + 1)),
                Point::new(coord(4 * i + 2), coord(4 * i + 3)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwork_area::AreaEngine;

    #[test]
    fn maze_is_deterministic() {
        assert_eq!(maze_grid(20, 30, 42).unwrap(), maze_grid(20, 30, 42).unwrap());
        assert_ne!(maze_grid(20, 30, 42).unwrap(), maze_grid(20, 30, 43).unwrap());
    }

    #[test]
    fn maze_rejects_zero_dimension() {
        assert!(maze_grid(0, 5, 1).is_err());
    }

    #[test]
    fn maze_has_requested_shape() {
        let g = maze_grid(7, 11, 1).unwrap();
        assert_eq!((g.rows(), g.cols()), (7, 11));
        assert!(g.find_items(&WALL).count() > 0);
        assert!(g.find_items(&FLOOR).count() > 0);
    }

    #[test]
    fn staircase_builds_an_engine() {
        let path = staircase_polygon(4, 10);
        assert_eq!(path.len(), 10);
        let engine = AreaEngine::new(&path).unwrap();
        // Row by row: 10 x 41, then 41 + 9 x 31, 31 + 9 x 21, 21 + 9 x 11,
        // and the 11-cell top tread.
        assert_eq!(engine.total_filled_area(), 1081);
        assert!(engine.is_filled(Point::new(0, 0), Point::new(40, 0)));
        assert!(!engine.is_filled(Point::new(0, 0), Point::new(40, 40)));
    }

    #[test]
    fn query_corners_stay_in_extent() {
        let corners = query_corners(200, 1_000, 7);
        assert_eq!(corners.len(), 200);
        for (a, b) in corners {
            for p in [a, b] {
                assert!((0..=1_000).contains(&p.x) && (0..=1_000).contains(&p.y));
            }
        }
    }
}
