//! Boolean occupancy over the compressed coordinate space.

use crate::axis::CompressedAxis;
use crate::error::AreaError;
use gridwork_core::Point;
use gridwork_space::{flood, Grid};

/// Classification of one compressed cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not yet classified.
    Unknown,
    /// Lies under a polygon edge.
    Boundary,
    /// Reachable from the outer border without crossing an edge.
    Exterior,
    /// Cut off from the outer border by edges.
    Interior,
}

impl CellState {
    /// `true` for cells counted as filled area: boundary or interior.
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Boundary | Self::Interior)
    }
}

/// Per-cell classification over a pair of compressed axes.
///
/// Cell `(i, j)` covers the physical rectangle
/// `[x[i], x[i + 1]) x [y[j], y[j + 1])`. Stored as a [`Grid`] with the
/// x-axis as rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Grid<CellState>,
}

impl OccupancyGrid {
    /// An all-[`Unknown`](CellState::Unknown) grid of
    /// `width x height` compressed cells.
    pub fn new(width: usize, height: usize) -> Result<Self, AreaError> {
        Ok(Self {
            cells: Grid::from_fn(width, height, |_| CellState::Unknown)?,
        })
    }

    /// Number of compressed cells along x.
    pub fn width(&self) -> usize {
        self.cells.rows()
    }

    /// Number of compressed cells along y.
    pub fn height(&self) -> usize {
        self.cells.cols()
    }

    /// State of compressed cell `(i, j)`, or `None` if out of range.
    pub fn state(&self, i: usize, j: usize) -> Option<CellState> {
        self.cells.get(Point::new(i as i64, j as i64)).copied()
    }

    /// `true` if compressed cell `(i, j)` is boundary or interior.
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        self.state(i, j).is_some_and(CellState::is_filled)
    }

    /// Mark every cell under the axis-aligned segment `from -> to` as
    /// boundary.
    ///
    /// Both endpoints must be coordinates the axes were built from.
    pub(crate) fn mark_segment(
        &mut self,
        x_axis: &CompressedAxis,
        y_axis: &CompressedAxis,
        from: Point,
        to: Point,
    ) {
        let span = |axis: &CompressedAxis, a: i64, b: i64| {
            let lo = axis.index_of(a.min(b));
            let hi = axis.index_of(a.max(b).saturating_add(1));
            lo.zip(hi)
        };
        let (Some((x0, x1)), Some((y0, y1))) =
            (span(x_axis, from.x, to.x), span(y_axis, from.y, to.y))
        else {
            return;
        };
        for i in x0..x1 {
            for j in y0..y1 {
                if let Some(cell) = self.cells.get_mut(Point::new(i as i64, j as i64)) {
                    *cell = CellState::Boundary;
                }
            }
        }
    }

    /// Resolve every [`Unknown`](CellState::Unknown) cell into exterior or
    /// interior using a flood fill seeded from the outer border.
    pub(crate) fn classify(&mut self) {
        let candidate: Vec<bool> = self
            .cells
            .as_slice()
            .iter()
            .map(|&s| s == CellState::Unknown)
            .collect();
        let outside = flood::boundary_reachable(self.width(), self.height(), &candidate);
        for ((cell, &is_candidate), &is_outside) in self
            .cells
            .as_mut_slice()
            .iter_mut()
            .zip(&candidate)
            .zip(&outside)
        {
            if is_candidate {
                *cell = if is_outside {
                    CellState::Exterior
                } else {
                    CellState::Interior
                };
            }
        }
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.find_items(&state).count()
    }

    /// Draw the grid with `#` boundary, `X` interior, `.` exterior and `?`
    /// unknown, one string per x index.
    pub fn render(&self) -> Vec<String> {
        self.cells.render(|s| match s {
            CellState::Boundary => "#",
            CellState::Interior => "X",
            CellState::Exterior => ".",
            CellState::Unknown => "?",
        })
    }
}
