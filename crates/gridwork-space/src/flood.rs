//! Multi-source boundary flood fill.
//!
//! Instead of growing a region outward from a seed, these routines erode
//! inward from the border: every candidate cell on the outer ring seeds a
//! single breadth-first search that spreads through 4-connected candidate
//! cells. Whatever candidate is never reached is cut off from every edge
//! and is therefore enclosed.
//!
//! The masks are plain row-major `bool` slices so that callers with their
//! own storage (for example a coordinate-compressed occupancy grid) can
//! run the same classification.

use crate::grid::Grid;
use std::collections::VecDeque;

/// Mark every candidate cell reachable from the grid border through other
/// candidate cells.
///
/// `candidate` is a row-major `rows x cols` mask. The result has the same
/// layout; `true` means "open to the outside". Non-candidate cells are
/// never marked. Every candidate cell on the border is marked
/// unconditionally.
///
/// # Panics
///
/// Panics if `candidate.len() != rows * cols`.
pub fn boundary_reachable(rows: usize, cols: usize, candidate: &[bool]) -> Vec<bool> {
    assert_eq!(
        candidate.len(),
        rows * cols,
        "mask length {} does not match {rows}x{cols}",
        candidate.len()
    );
    let mut outside = vec![false; candidate.len()];
    let mut queue = VecDeque::new();

    let seed = |r: usize, c: usize, outside: &mut [bool], queue: &mut VecDeque<(usize, usize)>| {
        let i = r * cols + c;
        if candidate[i] && !outside[i] {
            outside[i] = true;
            queue.push_back((r, c));
        }
    };
    for c in 0..cols {
        seed(0, c, &mut outside, &mut queue);
        seed(rows - 1, c, &mut outside, &mut queue);
    }
    for r in 0..rows {
        seed(r, 0, &mut outside, &mut queue);
        seed(r, cols - 1, &mut outside, &mut queue);
    }

    while let Some((r, c)) = queue.pop_front() {
        let neighbours = [
            r.checked_sub(1).map(|nr| (nr, c)),
            (r + 1 < rows).then_some((r + 1, c)),
            c.checked_sub(1).map(|nc| (r, nc)),
            (c + 1 < cols).then_some((r, c + 1)),
        ];
        for (nr, nc) in neighbours.into_iter().flatten() {
            let i = nr * cols + nc;
            if candidate[i] && !outside[i] {
                outside[i] = true;
                queue.push_back((nr, nc));
            }
        }
    }
    outside
}

/// Candidate cells that are *not* reachable from the border.
///
/// Same layout and preconditions as [`boundary_reachable`].
pub fn enclosed(rows: usize, cols: usize, candidate: &[bool]) -> Vec<bool> {
    let outside = boundary_reachable(rows, cols, candidate);
    candidate
        .iter()
        .zip(&outside)
        .map(|(&is_candidate, &is_outside)| is_candidate && !is_outside)
        .collect()
}

impl<T> Grid<T> {
    /// Overwrite every enclosed fill-candidate cell with `fill_value`.
    ///
    /// A cell is a candidate if `is_fill_candidate` holds for its value. A
    /// candidate is enclosed if no path of 4-connected candidate cells
    /// links it to the grid border; candidates on the border itself are
    /// never enclosed. Non-candidate cells are never touched.
    ///
    /// Returns the number of cells overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwork_core::Point;
    /// use gridwork_space::Grid;
    ///
    /// let mut grid = Grid::<char>::new(vec![
    ///     ".....".chars().collect(),
    ///     ".###.".chars().collect(),
    ///     ".#.#.".chars().collect(),
    ///     ".###.".chars().collect(),
    ///     ".....".chars().collect(),
    /// ]).unwrap();
    /// let filled = grid.fill_enclosed_regions(|&c| c == '.', 'o');
    /// assert_eq!(filled, 1);
    /// assert_eq!(grid.get(Point::new(2, 2)), Some(&'o'));
    /// ```
    pub fn fill_enclosed_regions(
        &mut self,
        is_fill_candidate: impl Fn(&T) -> bool,
        fill_value: T,
    ) -> usize
    where
        T: Clone,
    {
        let candidate: Vec<bool> = self.as_slice().iter().map(&is_fill_candidate).collect();
        let mask = enclosed(self.rows(), self.cols(), &candidate);

        let mut filled = 0;
        for (i, &is_enclosed) in mask.iter().enumerate() {
            if is_enclosed {
                let point = self.point_at(i);
                if let Some(cell) = self.get_mut(point) {
                    *cell = fill_value.clone();
                    filled += 1;
                }
            }
        }
        tracing::trace!(
            candidates = candidate.iter().filter(|&&c| c).count(),
            filled,
            "filled enclosed regions"
        );
        filled
    }
}
