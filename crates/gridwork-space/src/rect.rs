//! Axis-aligned rectangle queries with clamping.

use crate::grid::Grid;
use gridwork_core::Point;

/// Inclusive row/column ranges of a rectangle after clamping to a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClampedRect {
    min: Point,
    max: Point,
}

impl ClampedRect {
    fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    fn area(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.max.x - self.min.x + 1) * (self.max.y - self.min.y + 1)) as usize
    }
}

impl<T> Grid<T> {
    /// Order the corners so min <= max per axis, then clip to the grid.
    ///
    /// Ordering happens before clipping, so a rectangle lying entirely
    /// outside the grid clips to an empty range instead of collapsing
    /// onto the nearest edge row or column.
    fn clamp_rect(&self, a: Point, b: Point) -> ClampedRect {
        let max_x = self.rows() as i64 - 1;
        let max_y = self.cols() as i64 - 1;
        ClampedRect {
            min: Point::new(a.x.min(b.x).max(0), a.y.min(b.y).max(0)),
            max: Point::new(a.x.max(b.x).min(max_x), a.y.max(b.y).min(max_y)),
        }
    }

    /// Number of grid cells inside the inclusive rectangle spanned by
    /// `corner1` and `corner2`, after clamping to the grid.
    ///
    /// Corners may be given in any order and may lie off the grid. A
    /// rectangle entirely outside the grid has area 0.
    pub fn get_area(&self, corner1: Point, corner2: Point) -> usize {
        self.clamp_rect(corner1, corner2).area()
    }

    /// The in-grid points of the clamped rectangle, in row-major order.
    ///
    /// Always yields exactly [`get_area`](Self::get_area) points.
    pub fn get_area_points(&self, corner1: Point, corner2: Point) -> impl Iterator<Item = Point> {
        let rect = self.clamp_rect(corner1, corner2);
        let (xs, ys) = if rect.is_empty() {
            (1..=0, 1..=0)
        } else {
            (rect.min.x..=rect.max.x, rect.min.y..=rect.max.y)
        };
        xs.flat_map(move |x| ys.clone().map(move |y| Point::new(x, y)))
    }

    /// `true` if `predicate` holds for every cell of the clamped
    /// rectangle. Stops at the first failure; vacuously `true` for an
    /// empty rectangle.
    pub fn all_in_area(
        &self,
        corner1: Point,
        corner2: Point,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> bool {
        self.get_area_points(corner1, corner2)
            .all(|pt| self.get(pt).is_some_and(&mut predicate))
    }
}
