//! Grid invariant assertion helpers.
//!
//! Shared by the unit test modules of this crate so that each property
//! is checked the same way wherever a grid is produced.

use crate::grid::Grid;
use gridwork_core::Point;
use indexmap::IndexSet;

/// Assert that `get(p)` is `None` exactly when `p` is out of bounds.
pub fn assert_get_matches_bounds<T>(grid: &Grid<T>, point: Point) {
    assert_eq!(
        grid.get(point).is_none(),
        grid.out_of_bounds(point),
        "get({point}) disagrees with out_of_bounds on a {}x{} grid",
        grid.rows(),
        grid.cols()
    );
}

/// Assert that `region` is exactly the 4-connected equal-valued component
/// containing `start`.
pub fn assert_region_is_component<T: PartialEq + std::fmt::Debug>(
    grid: &Grid<T>,
    start: Point,
    region: &[Point],
) {
    let seed = grid.get(start).expect("start must be in bounds");
    let members: IndexSet<Point> = region.iter().copied().collect();
    assert_eq!(members.len(), region.len(), "region has duplicate points");
    assert_eq!(region.first(), Some(&start), "region must begin at start");

    for &pt in region {
        assert_eq!(grid.get(pt), Some(seed), "member {pt} differs from seed {seed:?}");
        // Maximal: no equal-valued neighbour is left out.
        for nb in grid.get_surrounding_items(pt) {
            if grid.get(nb) == Some(seed) {
                assert!(members.contains(&nb), "equal neighbour {nb} of {pt} missing");
            }
        }
    }
}

/// Assert that the perimeter of `region` contains no member of `region`.
pub fn assert_perimeter_excludes_members<T>(grid: &Grid<T>, region: &[Point]) {
    let members: IndexSet<Point> = region.iter().copied().collect();
    for pt in grid.calculate_region_perimeter(region.iter().copied()) {
        assert!(!members.contains(&pt), "perimeter contains member {pt}");
    }
}

/// Assert that `get_area` agrees with the number of points yielded by
/// `get_area_points` for the same corners.
pub fn assert_area_matches_points<T>(grid: &Grid<T>, a: Point, b: Point) {
    let area = grid.get_area(a, b);
    let points = grid.get_area_points(a, b).count();
    assert_eq!(area, points, "get_area({a}, {b}) = {area} but {points} points");
    for pt in grid.get_area_points(a, b) {
        assert!(grid.contains(pt), "area point {pt} is off the grid");
    }
}
