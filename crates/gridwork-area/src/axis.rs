//! Coordinate compression along one axis.

/// Sorted, de-duplicated breakpoints for one axis.
///
/// Built from every input coordinate `v` and its successor `v + 1`, so a
/// unit-wide closed interval `[v, v]` is exactly one compressed cell
/// `[v, v + 1)`. Compressed cell `k` covers the physical half-open
/// interval `[breakpoints[k], breakpoints[k + 1])`.
///
/// # Examples
///
/// ```
/// use gridwork_area::CompressedAxis;
///
/// let axis = CompressedAxis::from_coords([10, 3, 10, 1_000_000]);
/// assert_eq!(axis.breakpoints(), &[3, 4, 10, 11, 1_000_000, 1_000_001]);
/// assert_eq!(axis.index_of(10), Some(2));
/// assert_eq!(axis.width(3), 1_000_000 - 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressedAxis {
    breakpoints: Vec<i64>,
}

impl CompressedAxis {
    /// Compress a set of coordinates.
    ///
    /// `i64::MAX` has no successor, so its unit cell is lost; callers that
    /// need every coordinate to own a cell must reject it first.
    pub fn from_coords(coords: impl IntoIterator<Item = i64>) -> Self {
        let mut breakpoints: Vec<i64> = coords
            .into_iter()
            .flat_map(|v| [v, v.saturating_add(1)])
            .collect();
        breakpoints.sort_unstable();
        breakpoints.dedup();
        Self { breakpoints }
    }

    /// The breakpoints in strictly increasing order.
    pub fn breakpoints(&self) -> &[i64] {
        &self.breakpoints
    }

    /// Number of compressed cells (one fewer than the breakpoint count).
    pub fn cell_count(&self) -> usize {
        self.breakpoints.len().saturating_sub(1)
    }

    /// Smallest breakpoint.
    pub fn min(&self) -> Option<i64> {
        self.breakpoints.first().copied()
    }

    /// Largest breakpoint (exclusive end of the last cell).
    pub fn max(&self) -> Option<i64> {
        self.breakpoints.last().copied()
    }

    /// Index of a coordinate that was used to build the axis.
    ///
    /// Total over the build coordinates and their successors; `None` for
    /// anything else.
    pub fn index_of(&self, coord: i64) -> Option<usize> {
        self.breakpoints.binary_search(&coord).ok()
    }

    /// Physical width of compressed cell `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell >= self.cell_count()`.
    pub fn width(&self, cell: usize) -> u64 {
        self.breakpoints[cell + 1].abs_diff(self.breakpoints[cell])
    }

    /// Locate an arbitrary coordinate, clamped to the axis extent.
    ///
    /// Returns `(k, offset)` such that the clamped coordinate equals
    /// `breakpoints[k] + offset` with `offset < width(k)`, or `offset == 0`
    /// and `k == cell_count()` at the far end.
    pub fn locate(&self, coord: i64) -> (usize, u64) {
        let (Some(lo), Some(hi)) = (self.min(), self.max()) else {
            return (0, 0);
        };
        let v = coord.clamp(lo, hi);
        // Breakpoints <= v; at least one since v >= lo.
        let k = self.breakpoints.partition_point(|&b| b <= v) - 1;
        (k, v.abs_diff(self.breakpoints[k]))
    }
}
