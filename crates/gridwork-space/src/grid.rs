//! The dense 2D grid container.

use gridwork_core::{Direction, GridError, Point};
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;

/// A rectangular, bounds-checked, mutable 2D grid.
///
/// Cells are addressed by [`Point`] with `x` as the row and `y` as the
/// column, so the valid range is `[0, rows) x [0, cols)`. Storage is a
/// single row-major buffer owned by the grid; the shape is fixed at
/// construction and never changes.
///
/// Reads past the border return `None`. Writes past the border return
/// [`GridError::OutOfRange`] and leave the grid untouched.
///
/// `Clone` is a deep copy: the clone shares no storage with the source.
///
/// # Examples
///
/// ```
/// use gridwork_core::Point;
/// use gridwork_space::Grid;
///
/// let mut grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.get(Point::new(1, 2)), Some(&6));
/// assert_eq!(grid.get(Point::new(2, 0)), None);
///
/// grid.set(Point::new(0, 0), 9).unwrap();
/// assert_eq!(grid.find_items(&9).collect::<Vec<_>>(), vec![Point::new(0, 0)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from a fully materialised matrix of rows.
    ///
    /// Returns `Err(GridError::InvalidShape)` if there are no rows, the
    /// first row is empty, or any row differs in length from the first.
    pub fn new(data: Vec<Vec<T>>) -> Result<Self, GridError> {
        let rows = data.len();
        if rows == 0 {
            return Err(GridError::InvalidShape {
                reason: "grid has no rows".to_string(),
            });
        }
        let cols = data[0].len();
        if cols == 0 {
            return Err(GridError::InvalidShape {
                reason: "grid rows have zero width".to_string(),
            });
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(GridError::InvalidShape {
                reason: format!("row {i} has {} cells, expected {cols}", row.len()),
            });
        }
        let cells = data.into_iter().flatten().collect();
        Ok(Self { rows, cols, cells })
    }

    /// Build a `rows x cols` grid by calling `f` for every point in
    /// row-major order.
    ///
    /// Returns `Err(GridError::InvalidShape)` if either dimension is 0.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(Point) -> T,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidShape {
                reason: format!("grid must be at least 1x1, got {rows}x{cols}"),
            });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for x in 0..rows {
            for y in 0..cols {
                cells.push(f(Point::new(x as i64, y as i64)));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable row-major view of every cell. The shape cannot change
    /// through this view.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// `true` if `point` lies outside `[0, rows) x [0, cols)`.
    pub fn out_of_bounds(&self, point: Point) -> bool {
        self.index_of(point).is_none()
    }

    /// `true` if `point` addresses a cell of this grid.
    pub fn contains(&self, point: Point) -> bool {
        self.index_of(point).is_some()
    }

    /// Flat buffer index of `point`, or `None` if out of bounds.
    pub(crate) fn index_of(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u64, point.y as u64);
        if x >= self.rows as u64 || y >= self.cols as u64 {
            return None;
        }
        Some(x as usize * self.cols + y as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub(crate) fn point_at(&self, index: usize) -> Point {
        Point::new((index / self.cols) as i64, (index % self.cols) as i64)
    }

    pub(crate) fn bounds_description(&self) -> String {
        format!("[0, {}) x [0, {})", self.rows, self.cols)
    }

    fn check_bounds(&self, point: Point) -> Result<usize, GridError> {
        self.index_of(point).ok_or_else(|| GridError::OutOfRange {
            point,
            bounds: self.bounds_description(),
        })
    }

    /// The value at `point`, or `None` if `point` is out of bounds.
    pub fn get(&self, point: Point) -> Option<&T> {
        self.index_of(point).map(|i| &self.cells[i])
    }

    /// Mutable access to the value at `point`, or `None` if out of bounds.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        let i = self.index_of(point)?;
        Some(&mut self.cells[i])
    }

    /// Overwrite the value at `point`.
    ///
    /// Returns `Err(GridError::OutOfRange)` if `point` is out of bounds;
    /// the grid is left untouched in that case.
    pub fn set(&mut self, point: Point, value: T) -> Result<(), GridError> {
        let i = self.check_bounds(point)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Exchange the values at `a` and `b`.
    ///
    /// Both points are validated before anything moves, so a failed swap
    /// leaves the grid untouched.
    pub fn swap_items(&mut self, a: Point, b: Point) -> Result<(), GridError> {
        let ia = self.check_bounds(a)?;
        let ib = self.check_bounds(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// The neighbour of `point` one step in `direction` together with its
    /// value, or `None` if that neighbour is off the grid.
    pub fn get_adjacent_item(&self, point: Point, direction: Direction) -> Option<(Point, &T)> {
        let neighbour = point.step(direction)?;
        self.get(neighbour).map(|value| (neighbour, value))
    }

    /// The in-bounds 4-connected neighbours of `point`, in up, down, left,
    /// right order.
    pub fn get_surrounding_items(&self, point: Point) -> SmallVec<[Point; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| point.step(d))
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// The in-bounds 8-connected neighbours of `point`: the four diagonals
    /// first, then the four cardinal neighbours.
    pub fn get_surrounding_items_diagonally(&self, point: Point) -> SmallVec<[Point; 8]> {
        const OFFSETS: [(i64, i64); 8] = [
            (-1, -1),
            (-1, 1),
            (1, -1),
            (1, 1),
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
        ];
        OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| point.checked_add(Point::new(dx, dy)))
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Iterate over every cell as `(point, &value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (self.point_at(i), v))
    }

    /// The cells of row `x`, or `None` if `x` is not a row index.
    pub fn row(&self, x: usize) -> Option<&[T]> {
        (x < self.rows).then(|| &self.cells[x * self.cols..(x + 1) * self.cols])
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Render each row by mapping cells to strings and concatenating them.
    pub fn render<S: AsRef<str>>(&self, mut f: impl FnMut(&T) -> S) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|v| f(v).as_ref().to_owned()).collect())
            .collect()
    }
}

impl<T: PartialEq> Grid<T> {
    /// Every point whose value equals `target`, lazily, in row-major order.
    ///
    /// The iterator borrows the grid; call again for a fresh scan.
    pub fn find_items<'a>(&'a self, target: &'a T) -> impl Iterator<Item = Point> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, v)| *v == target)
            .map(move |(i, _)| self.point_at(i))
    }
}

impl<T: Eq + Hash> Grid<T> {
    /// Distinct cell values in first-seen row-major order.
    pub fn unique_items(&self) -> Vec<&T> {
        self.cells.iter().collect::<IndexSet<&T>>().into_iter().collect()
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
