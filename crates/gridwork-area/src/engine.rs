//! The polygon area engine and its builder.

use crate::axis::CompressedAxis;
use crate::error::AreaError;
use crate::occupancy::{CellState, OccupancyGrid};
use crate::prefix::PrefixSumTable;
use gridwork_core::Point;
use tracing::debug;

/// Filled-area oracle for a closed rectilinear polygon.
///
/// Built once from an ordered vertex path; each query then costs O(1).
/// "Filled" means on a polygon edge or strictly inside the polygon, with
/// every integer coordinate treated as a unit cell, so the 4-vertex
/// square `(0,0) (4,0) (4,4) (0,4)` fills 25 cells.
///
/// # Examples
///
/// ```
/// use gridwork_area::AreaEngine;
/// use gridwork_core::Point;
///
/// let square = [
///     Point::new(0, 0),
///     Point::new(4, 0),
///     Point::new(4, 4),
///     Point::new(0, 4),
/// ];
/// let engine = AreaEngine::new(&square).unwrap();
/// assert_eq!(engine.query_filled_area(Point::new(0, 0), Point::new(3, 3)), 16);
/// assert!(engine.is_filled(Point::new(0, 0), Point::new(4, 4)));
/// ```
#[derive(Clone, Debug)]
pub struct AreaEngine {
    x_axis: CompressedAxis,
    y_axis: CompressedAxis,
    occupancy: OccupancyGrid,
    prefix: PrefixSumTable,
}

/// Builder for [`AreaEngine`].
///
/// Required: `vertices`.
#[derive(Clone, Debug, Default)]
pub struct AreaEngineBuilder {
    vertices: Option<Vec<Point>>,
}

impl AreaEngine {
    /// Create a new builder for configuring an `AreaEngine`.
    pub fn builder() -> AreaEngineBuilder {
        AreaEngineBuilder::default()
    }

    /// Build an engine from a closed rectilinear vertex path.
    ///
    /// Shorthand for `AreaEngine::builder().vertices(vertices).build()`.
    pub fn new(vertices: &[Point]) -> Result<Self, AreaError> {
        Self::builder().vertices(vertices.iter().copied()).build()
    }

    fn from_path(vertices: &[Point]) -> Result<Self, AreaError> {
        let x_axis = CompressedAxis::from_coords(vertices.iter().map(|v| v.x));
        let y_axis = CompressedAxis::from_coords(vertices.iter().map(|v| v.y));
        let mut occupancy = OccupancyGrid::new(x_axis.cell_count(), y_axis.cell_count())?;

        let closing = vertices.iter().skip(1).chain(vertices.first());
        for (&from, &to) in vertices.iter().zip(closing) {
            occupancy.mark_segment(&x_axis, &y_axis, from, to);
        }
        occupancy.classify();

        let prefix = PrefixSumTable::build(&occupancy, &x_axis, &y_axis)?;
        debug!(
            vertices = vertices.len(),
            x_cells = x_axis.cell_count(),
            y_cells = y_axis.cell_count(),
            boundary = occupancy.count(CellState::Boundary),
            interior = occupancy.count(CellState::Interior),
            filled_area = prefix.total(),
            "built area engine"
        );
        Ok(Self {
            x_axis,
            y_axis,
            occupancy,
            prefix,
        })
    }

    /// Filled area of `[x0, x) x [y0, y)`, where `(x0, y0)` is the low end
    /// of the compressed extent. Coordinates are clamped to the extent.
    ///
    /// Inside a partially covered cell the contribution is linear in the
    /// offset; the column and row strips below the cell are recovered from
    /// the prefix table by exact division.
    fn prefix_area(&self, x: i64, y: i64) -> u64 {
        let (k, fx) = self.x_axis.locate(x);
        let (l, fy) = self.y_axis.locate(y);
        let mut area = self.prefix.at(k, l);
        if fx > 0 {
            let column = self.prefix.at(k + 1, l) - self.prefix.at(k, l);
            area += fx * (column / self.x_axis.width(k));
        }
        if fy > 0 {
            let row = self.prefix.at(k, l + 1) - self.prefix.at(k, l);
            area += fy * (row / self.y_axis.width(l));
        }
        if fx > 0 && fy > 0 && self.occupancy.is_filled(k, l) {
            area += fx * fy;
        }
        area
    }

    /// Filled area of the inclusive rectangle spanned by two corners.
    ///
    /// Corners may be given in any order. Each inclusive corner range
    /// `[lo, hi]` is treated as the half-open physical range
    /// `[lo, hi + 1)`. Area outside the polygon's bounding box counts as
    /// unfilled.
    pub fn query_filled_area(&self, corner1: Point, corner2: Point) -> u64 {
        let (x0, x1) = (corner1.x.min(corner2.x), corner1.x.max(corner2.x).saturating_add(1));
        let (y0, y1) = (corner1.y.min(corner2.y), corner1.y.max(corner2.y).saturating_add(1));
        // Both differences are column strips, so neither term can
        // exceed the total filled area.
        (self.prefix_area(x1, y1) - self.prefix_area(x0, y1))
            - (self.prefix_area(x1, y0) - self.prefix_area(x0, y0))
    }

    /// Number of unit cells in the inclusive rectangle spanned by two
    /// corners, regardless of the polygon. Saturates at `u64::MAX`.
    pub fn raw_area(&self, corner1: Point, corner2: Point) -> u64 {
        checked_raw_area(corner1, corner2).unwrap_or(u64::MAX)
    }

    /// `true` if every cell of the inclusive rectangle is filled.
    pub fn is_filled(&self, corner1: Point, corner2: Point) -> bool {
        checked_raw_area(corner1, corner2) == Some(self.query_filled_area(corner1, corner2))
    }

    /// Total filled area of the polygon, boundary included.
    pub fn total_filled_area(&self) -> u64 {
        self.prefix.total()
    }

    /// Inclusive bounding box of the vertex path as `(min, max)` corners.
    pub fn bounds(&self) -> (Point, Point) {
        let lo = Point::new(
            self.x_axis.min().unwrap_or_default(),
            self.y_axis.min().unwrap_or_default(),
        );
        let hi = Point::new(
            self.x_axis.max().unwrap_or_default() - 1,
            self.y_axis.max().unwrap_or_default() - 1,
        );
        (lo, hi)
    }

    /// The compressed x-axis.
    pub fn x_axis(&self) -> &CompressedAxis {
        &self.x_axis
    }

    /// The compressed y-axis.
    pub fn y_axis(&self) -> &CompressedAxis {
        &self.y_axis
    }

    /// The classified occupancy grid.
    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }
}

/// Inclusive cell count of a rectangle, or `None` if it exceeds `u64`.
pub(crate) fn checked_raw_area(corner1: Point, corner2: Point) -> Option<u64> {
    let dx = corner1.x.abs_diff(corner2.x).checked_add(1)?;
    let dy = corner1.y.abs_diff(corner2.y).checked_add(1)?;
    dx.checked_mul(dy)
}

impl AreaEngineBuilder {
    /// Set the closed vertex path. The last vertex connects back to the
    /// first.
    pub fn vertices(mut self, vertices: impl IntoIterator<Item = Point>) -> Self {
        self.vertices = Some(vertices.into_iter().collect());
        self
    }

    /// Build the engine, validating the path.
    ///
    /// # Errors
    ///
    /// - [`AreaError::DegeneratePath`] if fewer than 3 vertices were set
    ///   (or none at all)
    /// - [`AreaError::CoordinateOutOfRange`] if a vertex has a coordinate
    ///   equal to `i64::MAX`
    /// - [`AreaError::NonRectilinear`] if an edge, including the closing
    ///   edge, is diagonal
    /// - [`AreaError::AreaOverflow`] if the filled area does not fit in a
    ///   `u64`
    pub fn build(self) -> Result<AreaEngine, AreaError> {
        let vertices = self.vertices.unwrap_or_default();
        if vertices.len() < 3 {
            return Err(AreaError::DegeneratePath {
                vertices: vertices.len(),
            });
        }
        if let Some(&vertex) = vertices
            .iter()
            .find(|v| v.x == i64::MAX || v.y == i64::MAX)
        {
            return Err(AreaError::CoordinateOutOfRange { vertex });
        }
        let closing = vertices.iter().skip(1).chain(vertices.first());
        if let Some((&from, &to)) = vertices
            .iter()
            .zip(closing)
            .find(|(a, b)| a.x != b.x && a.y != b.y)
        {
            return Err(AreaError::NonRectilinear { from, to });
        }
        AreaEngine::from_path(&vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    fn path(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn l_shape() -> Vec<Point> {
        path(&[(0, 0), (6, 0), (6, 3), (3, 3), (3, 6), (0, 6)])
    }

    /// Brute-force filled area by rasterising the cell classification.
    fn brute_force(engine: &AreaEngine, a: Point, b: Point) -> u64 {
        let mut area = 0;
        for x in a.x.min(b.x)..=a.x.max(b.x) {
            for y in a.y.min(b.y)..=a.y.max(b.y) {
                let (Some(i), Some(j)) = (cell_of(engine.x_axis(), x), cell_of(engine.y_axis(), y))
                else {
                    continue;
                };
                if engine.occupancy().is_filled(i, j) {
                    area += 1;
                }
            }
        }
        area
    }

    fn cell_of(axis: &CompressedAxis, v: i64) -> Option<usize> {
        if v < axis.min()? || v >= axis.max()? {
            return None;
        }
        Some(axis.locate(v).0)
    }

    // ── Builder tests ───────────────────────────────────────────

    #[test]
    fn degenerate_paths_are_rejected() {
        assert_eq!(
            AreaEngine::new(&path(&[(0, 0), (4, 0)])).unwrap_err(),
            AreaError::DegeneratePath { vertices: 2 }
        );
        assert_eq!(
            AreaEngine::builder().build().unwrap_err(),
            AreaError::DegeneratePath { vertices: 0 }
        );
    }

    #[test]
    fn diagonal_closing_edge_is_rejected() {
        let err = AreaEngine::new(&path(&[(0, 0), (4, 0), (4, 4)])).unwrap_err();
        assert_eq!(
            err,
            AreaError::NonRectilinear {
                from: p(4, 4),
                to: p(0, 0)
            }
        );
    }

    #[test]
    fn diagonal_inner_edge_is_rejected() {
        let err = AreaEngine::new(&path(&[(0, 0), (4, 4), (0, 4)])).unwrap_err();
        assert_eq!(
            err,
            AreaError::NonRectilinear {
                from: p(0, 0),
                to: p(4, 4)
            }
        );
    }

    #[test]
    fn max_coordinate_vertex_is_rejected() {
        let m = i64::MAX;
        let err = AreaEngine::new(&path(&[(m - 4, 0), (m, 0), (m, 4), (m - 4, 4)])).unwrap_err();
        assert_eq!(err, AreaError::CoordinateOutOfRange { vertex: p(m, 0) });

        // One below the limit still has a representable unit cell.
        let m = i64::MAX - 1;
        let engine = AreaEngine::new(&path(&[(m - 4, 0), (m, 0), (m, 4), (m - 4, 4)])).unwrap();
        assert_eq!(engine.total_filled_area(), 25);
    }

    #[test]
    fn oversized_square_reports_overflow() {
        let side = 5_000_000_000;
        let err = AreaEngine::new(&path(&[(0, 0), (side, 0), (side, side), (0, side)])).unwrap_err();
        assert_eq!(err, AreaError::AreaOverflow);
    }

    #[test]
    fn large_square_queries_do_not_overflow() {
        let side = 4_000_000_000;
        let engine = AreaEngine::new(&path(&[(0, 0), (side, 0), (side, side), (0, side)])).unwrap();
        let full = (side as u64 + 1) * (side as u64 + 1);
        assert_eq!(engine.total_filled_area(), full);
        let (lo, hi) = engine.bounds();
        assert_eq!(engine.query_filled_area(lo, hi), full);
        assert!(engine.is_filled(lo, hi));
        assert_eq!(engine.query_filled_area(p(i64::MIN, i64::MIN), p(i64::MAX, i64::MAX)), full);
    }

    #[test]
    fn raw_area_saturates() {
        let engine = AreaEngine::new(&path(&[(0, 0), (4, 0), (4, 4), (0, 4)])).unwrap();
        let (a, b) = (p(-5_000_000_000, -5_000_000_000), p(5_000_000_000, 5_000_000_000));
        assert_eq!(engine.raw_area(a, b), u64::MAX);
        assert!(!engine.is_filled(a, b));
        assert_eq!(engine.query_filled_area(a, b), 25);
        assert_eq!(engine.raw_area(p(i64::MIN, 0), p(i64::MAX, 0)), u64::MAX);
    }

    // ── Query tests ─────────────────────────────────────────────

    #[test]
    fn square_inner_block() {
        let engine = AreaEngine::new(&path(&[(0, 0), (4, 0), (4, 4), (0, 4)])).unwrap();
        assert_eq!(engine.query_filled_area(p(0, 0), p(3, 3)), 16);
        assert_eq!(engine.query_filled_area(p(3, 3), p(0, 0)), 16);
        assert_eq!(engine.total_filled_area(), 25);
        assert_eq!(engine.bounds(), (p(0, 0), p(4, 4)));
    }

    #[test]
    fn square_query_not_on_breakpoints() {
        let engine = AreaEngine::new(&path(&[(0, 0), (10, 0), (10, 10), (0, 10)])).unwrap();
        assert_eq!(engine.query_filled_area(p(2, 3), p(5, 7)), 4 * 5);
        assert_eq!(engine.query_filled_area(p(5, 5), p(5, 5)), 1);
    }

    #[test]
    fn queries_outside_extent_are_unfilled() {
        let engine = AreaEngine::new(&path(&[(0, 0), (4, 0), (4, 4), (0, 4)])).unwrap();
        assert_eq!(engine.query_filled_area(p(-10, -10), p(-1, -1)), 0);
        assert_eq!(engine.query_filled_area(p(-10, -10), p(20, 20)), 25);
        assert_eq!(engine.query_filled_area(p(2, 2), p(9, 2)), 3);
    }

    #[test]
    fn l_shape_bounding_box_is_not_filled() {
        let engine = AreaEngine::new(&l_shape()).unwrap();
        let (lo, hi) = engine.bounds();
        assert_eq!((lo, hi), (p(0, 0), p(6, 6)));
        assert!(engine.query_filled_area(lo, hi) < engine.raw_area(lo, hi));
        // 49 - 3x3 notch
        assert_eq!(engine.query_filled_area(lo, hi), 40);
        assert!(!engine.is_filled(lo, hi));
    }

    #[test]
    fn l_shape_solid_arms_are_filled() {
        let engine = AreaEngine::new(&l_shape()).unwrap();
        assert!(engine.is_filled(p(0, 0), p(6, 3)));
        assert!(engine.is_filled(p(0, 0), p(3, 6)));
        assert_eq!(engine.query_filled_area(p(0, 0), p(6, 3)), 28);
        assert!(!engine.is_filled(p(0, 0), p(4, 4)));
    }

    #[test]
    fn raw_area_is_inclusive() {
        let engine = AreaEngine::new(&l_shape()).unwrap();
        assert_eq!(engine.raw_area(p(2, 5), p(11, 1)), 50);
        assert_eq!(engine.raw_area(p(3, 3), p(3, 3)), 1);
    }

    #[test]
    fn huge_coordinates_stay_small() {
        let engine = AreaEngine::new(&path(&[
            (0, 0),
            (1_000_000_000, 0),
            (1_000_000_000, 1_000_000_000),
            (0, 1_000_000_000),
        ]))
        .unwrap();
        assert_eq!(engine.occupancy().width(), 3);
        assert_eq!(engine.total_filled_area(), 1_000_000_001u64 * 1_000_000_001);
    }

    // ── Property tests ──────────────────────────────────────────

    /// Staircase polygons: rectilinear and simple for any step sizes.
    fn arb_staircase() -> impl Strategy<Value = Vec<Point>> {
        proptest::collection::vec((1i64..6, 1i64..6), 1..5).prop_map(|steps| {
            let mut pts = vec![p(0, 0)];
            let (mut x, mut y) = (0, 0);
            for (dx, dy) in &steps {
                x += dx;
                pts.push(p(x, y));
                y += dy;
                pts.push(p(x, y));
            }
            pts.push(p(0, y));
            pts
        })
    }

    proptest! {
        #[test]
        fn query_matches_brute_force(
            poly in arb_staircase(),
            ax in -2i64..25, ay in -2i64..25, bx in -2i64..25, by in -2i64..25,
        ) {
            let engine = AreaEngine::new(&poly).unwrap();
            let (a, b) = (p(ax, ay), p(bx, by));
            prop_assert_eq!(engine.query_filled_area(a, b), brute_force(&engine, a, b));
        }

        #[test]
        fn translation_invariant(
            poly in arb_staircase(),
            tx in -1_000_000_000i64..1_000_000_000,
            ty in -1_000_000_000i64..1_000_000_000,
            ax in 0i64..20, ay in 0i64..20, bx in 0i64..20, by in 0i64..20,
        ) {
            let shift = p(tx, ty);
            let moved: Vec<Point> = poly.iter().map(|&v| v + shift).collect();
            let e1 = AreaEngine::new(&poly).unwrap();
            let e2 = AreaEngine::new(&moved).unwrap();
            let (a, b) = (p(ax, ay), p(bx, by));
            prop_assert_eq!(
                e1.query_filled_area(a, b),
                e2.query_filled_area(a + shift, b + shift)
            );
            prop_assert_eq!(e1.total_filled_area(), e2.total_filled_area());
        }
    }
}
