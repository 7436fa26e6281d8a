//! Connected-region growth and perimeter extraction.

use crate::grid::Grid;
use gridwork_core::{Direction, GridError, Point};
use indexmap::IndexSet;
use std::collections::VecDeque;

impl<T: PartialEq> Grid<T> {
    /// The maximal 4-connected region of cells equal to the value at
    /// `start`, in breadth-first order from `start`.
    ///
    /// A neighbour joins the region iff it is in bounds, not yet visited,
    /// and equal to the start value. The first element is always `start`,
    /// and points appear in non-decreasing step distance from it.
    ///
    /// Returns `Err(GridError::OutOfRange)` if `start` is off the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwork_core::Point;
    /// use gridwork_space::Grid;
    ///
    /// let grid = Grid::new(vec![
    ///     vec!['a', 'a', 'b'],
    ///     vec!['b', 'a', 'b'],
    /// ]).unwrap();
    /// let region = grid.find_connected_region(Point::new(0, 0)).unwrap();
    /// assert_eq!(region, vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]);
    /// ```
    pub fn find_connected_region(&self, start: Point) -> Result<Vec<Point>, GridError> {
        let start_idx = self.index_of(start).ok_or_else(|| GridError::OutOfRange {
            point: start,
            bounds: self.bounds_description(),
        })?;
        let mut visited = vec![false; self.cell_count()];
        Ok(self.grow_region(start_idx, &mut visited))
    }

    /// Partition the whole grid into maximal 4-connected regions of equal
    /// values.
    ///
    /// Regions are ordered by the row-major position of their first cell;
    /// each region is in breadth-first order from that cell.
    pub fn find_regions(&self) -> Vec<Vec<Point>> {
        let mut visited = vec![false; self.cell_count()];
        let mut regions = Vec::new();
        for i in 0..self.cell_count() {
            if !visited[i] {
                regions.push(self.grow_region(i, &mut visited));
            }
        }
        tracing::trace!(regions = regions.len(), "partitioned grid into regions");
        regions
    }

    /// BFS from `start_idx` through equal-valued cells, marking `visited`.
    fn grow_region(&self, start_idx: usize, visited: &mut [bool]) -> Vec<Point> {
        let target = &self.as_slice()[start_idx];
        let mut queue = VecDeque::new();
        let mut region = Vec::new();

        visited[start_idx] = true;
        queue.push_back(self.point_at(start_idx));

        while let Some(point) = queue.pop_front() {
            region.push(point);
            for neighbour in self.get_surrounding_items(point) {
                let Some(i) = self.index_of(neighbour) else {
                    continue;
                };
                if !visited[i] && self.as_slice()[i] == *target {
                    visited[i] = true;
                    queue.push_back(neighbour);
                }
            }
        }
        region
    }
}

impl<T> Grid<T> {
    /// Outward-facing boundary of an arbitrary point set.
    ///
    /// `points` is de-duplicated (first-seen order kept). For each member
    /// and each of its four cardinal neighbours, the neighbour is yielded
    /// if it is off the grid or not itself a member. A non-member bordered
    /// by several members is yielded once per shared edge, so the result
    /// length is the edge perimeter of the set. Neighbours whose
    /// coordinates would overflow `i64` are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwork_core::Point;
    /// use gridwork_space::Grid;
    ///
    /// let grid = Grid::new(vec![vec![0; 3]; 3]).unwrap();
    /// let single = grid.calculate_region_perimeter([Point::new(1, 1)]);
    /// assert_eq!(single.len(), 4);
    /// ```
    pub fn calculate_region_perimeter(
        &self,
        points: impl IntoIterator<Item = Point>,
    ) -> Vec<Point> {
        let members: IndexSet<Point> = points.into_iter().collect();
        let mut perimeter = Vec::new();
        for &point in &members {
            for neighbour in Direction::ALL.iter().filter_map(|&d| point.step(d)) {
                if self.out_of_bounds(neighbour) || !members.contains(&neighbour) {
                    perimeter.push(neighbour);
                }
            }
        }
        perimeter
    }
}
