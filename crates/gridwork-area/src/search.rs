//! Largest fully filled rectangle between two vertices.

use crate::engine::{checked_raw_area, AreaEngine};
use gridwork_core::{unique_pairs, Point};

/// A rectangle spanned by two polygon vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilledRectangle {
    /// First corner (earlier in the candidate list).
    pub corner1: Point,
    /// Opposite corner.
    pub corner2: Point,
    /// Inclusive cell area.
    pub area: u64,
}

impl AreaEngine {
    /// The largest rectangle with two of `candidates` as opposite corners
    /// that is entirely filled.
    ///
    /// Every unordered pair of distinct candidates is tried. Ties keep the
    /// pair that appears first in pair order. Pairs whose cell count does
    /// not fit in a `u64` are skipped. Returns `None` when fewer than two
    /// distinct candidates are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwork_area::AreaEngine;
    /// use gridwork_core::Point;
    ///
    /// let l_shape = [(0, 0), (6, 0), (6, 3), (3, 3), (3, 6), (0, 6)]
    ///     .map(|(x, y)| Point::new(x, y));
    /// let engine = AreaEngine::new(&l_shape).unwrap();
    /// let best = engine.largest_filled_rectangle(l_shape).unwrap();
    /// assert_eq!(best.area, 28);
    /// ```
    pub fn largest_filled_rectangle(
        &self,
        candidates: impl IntoIterator<Item = Point>,
    ) -> Option<FilledRectangle> {
        let mut best: Option<FilledRectangle> = None;
        let mut checked = 0usize;
        for (a, b) in unique_pairs(candidates) {
            let Some(area) = checked_raw_area(a, b) else {
                continue;
            };
            if best.is_some_and(|r| r.area >= area) {
                continue;
            }
            checked += 1;
            if self.query_filled_area(a, b) == area {
                best = Some(FilledRectangle {
                    corner1: a,
                    corner2: b,
                    area,
                });
            }
        }
        tracing::debug!(checked, best = ?best.map(|r| r.area), "searched filled rectangles");
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn square_best_is_whole_square() {
        let square = path(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let engine = AreaEngine::new(&square).unwrap();
        let best = engine.largest_filled_rectangle(square).unwrap();
        assert_eq!(best.area, 25);
        assert_eq!((best.corner1, best.corner2), (Point::new(0, 0), Point::new(4, 4)));
    }

    #[test]
    fn l_shape_rejects_bounding_box() {
        let poly = path(&[(0, 0), (6, 0), (6, 3), (3, 3), (3, 6), (0, 6)]);
        let engine = AreaEngine::new(&poly).unwrap();
        let best = engine.largest_filled_rectangle(poly).unwrap();
        // (0,0)-(6,3) and (0,0)-(3,6) tie at 28; the first pair wins.
        assert_eq!(best.area, 28);
        assert_eq!((best.corner1, best.corner2), (Point::new(0, 0), Point::new(6, 3)));
    }

    #[test]
    fn too_few_candidates() {
        let square = path(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let engine = AreaEngine::new(&square).unwrap();
        assert_eq!(engine.largest_filled_rectangle([Point::new(1, 1)]), None);
        assert_eq!(
            engine.largest_filled_rectangle([Point::new(1, 1), Point::new(1, 1)]),
            None
        );
    }

    #[test]
    fn unrepresentable_pairs_are_skipped() {
        let square = path(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let engine = AreaEngine::new(&square).unwrap();
        let far = [Point::new(i64::MIN, i64::MIN), Point::new(i64::MAX, i64::MAX)];
        assert_eq!(engine.largest_filled_rectangle(far), None);
    }

    #[test]
    fn no_pair_is_filled() {
        let square = path(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        let engine = AreaEngine::new(&square).unwrap();
        let outside = [Point::new(10, 10), Point::new(12, 12)];
        assert_eq!(engine.largest_filled_rectangle(outside), None);
    }
}
