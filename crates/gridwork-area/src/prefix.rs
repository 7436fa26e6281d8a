//! 2D prefix sums of filled physical area.

use crate::axis::CompressedAxis;
use crate::error::AreaError;
use crate::occupancy::OccupancyGrid;

/// Cumulative filled area over compressed cells.
///
/// Entry `(i, j)` holds the total physical area of filled cells in
/// `[0, i) x [0, j)`; the table is `(width + 1) x (height + 1)` with a
/// zero first row and column. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixSumTable {
    width: usize,
    height: usize,
    sums: Vec<u64>,
}

impl PrefixSumTable {
    /// Accumulate `dx * dy` for every filled cell of `occupancy`.
    ///
    /// Returns `Err(AreaError::AreaOverflow)` if any partial sum exceeds
    /// `u64::MAX`.
    pub fn build(
        occupancy: &OccupancyGrid,
        x_axis: &CompressedAxis,
        y_axis: &CompressedAxis,
    ) -> Result<Self, AreaError> {
        let width = occupancy.width();
        let height = occupancy.height();
        let stride = height + 1;
        let mut sums = vec![0u64; (width + 1) * stride];

        for i in 0..width {
            let dx = x_axis.width(i);
            for j in 0..height {
                let cell = if occupancy.is_filled(i, j) {
                    dx.checked_mul(y_axis.width(j)).ok_or(AreaError::AreaOverflow)?
                } else {
                    0
                };
                // Row i's filled area over [0, j); never negative.
                let row = sums[(i + 1) * stride + j] - sums[i * stride + j];
                sums[(i + 1) * stride + j + 1] = sums[i * stride + j + 1]
                    .checked_add(row)
                    .and_then(|s| s.checked_add(cell))
                    .ok_or(AreaError::AreaOverflow)?;
            }
        }
        Ok(Self {
            width,
            height,
            sums,
        })
    }

    /// Number of compressed cells along x.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of compressed cells along y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Filled area of cells `[0, i) x [0, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i > width` or `j > height`.
    pub fn at(&self, i: usize, j: usize) -> u64 {
        assert!(
            i <= self.width && j <= self.height,
            "prefix index ({i}, {j}) outside ({}, {})",
            self.width,
            self.height
        );
        self.sums[i * (self.height + 1) + j]
    }

    /// Filled area of the half-open cell block `[i0, i1) x [j0, j1)`.
    ///
    /// Empty (zero) when `i0 >= i1` or `j0 >= j1`.
    pub fn rect_sum(&self, i0: usize, i1: usize, j0: usize, j1: usize) -> u64 {
        if i0 >= i1 || j0 >= j1 {
            return 0;
        }
        (self.at(i1, j1) - self.at(i0, j1)) - (self.at(i1, j0) - self.at(i0, j0))
    }

    /// Total filled area.
    pub fn total(&self) -> u64 {
        self.at(self.width, self.height)
    }
}
